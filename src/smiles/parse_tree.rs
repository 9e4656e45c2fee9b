use std::collections::HashMap;

use crate::smiles::error::SmilesError;
use crate::smiles::tokenizer::{AtomToken, BondToken, Token};

/// Atoms in input order plus the bonds between them, before hydrogen
/// inference.
#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    pub atoms: Vec<AtomToken>,
    pub bonds: Vec<ParseBond>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseBond {
    pub from: usize,
    pub to: usize,
    pub bond: Option<BondToken>,
}

impl ParseTree {
    fn connect(&mut self, from: usize, to: usize, bond: Option<BondToken>) {
        self.bonds.push(ParseBond { from, to, bond });
    }

    fn has_bond(&self, a: usize, b: usize) -> bool {
        self.bonds
            .iter()
            .any(|pb| (pb.from == a && pb.to == b) || (pb.from == b && pb.to == a))
    }
}

struct RingOpen {
    atom: usize,
    bond: Option<BondToken>,
}

pub fn build_parse_tree(tokens: &[Token]) -> Result<ParseTree, SmilesError> {
    let mut tree = ParseTree::default();
    let mut branches: Vec<(usize, usize)> = Vec::new();
    let mut current: Option<usize> = None;
    let mut pending_bond: Option<(BondToken, usize)> = None;
    let mut ring_opens: HashMap<u16, RingOpen> = HashMap::new();

    for token in tokens {
        match token {
            Token::Atom(atom_tok) => {
                let idx = tree.atoms.len();
                tree.atoms.push(atom_tok.clone());
                let bond = pending_bond.take().map(|(b, _)| b);
                if let Some(cur) = current {
                    tree.connect(cur, idx, bond);
                }
                current = Some(idx);
            }
            Token::Bond { bond, pos } => {
                if pending_bond.is_some() || current.is_none() {
                    return Err(SmilesError::DanglingBond { pos: *pos });
                }
                pending_bond = Some((*bond, *pos));
            }
            Token::RingClosure { digit, pos } => {
                let cur = current.ok_or(SmilesError::InvalidRingBond {
                    digit: *digit,
                    pos: *pos,
                })?;
                let bond = pending_bond.take().map(|(b, _)| b);

                match ring_opens.remove(digit) {
                    Some(open) => {
                        let ring_bond = match (bond, open.bond) {
                            (Some(b1), Some(b2)) if b1 != b2 => {
                                return Err(SmilesError::RingBondConflict { digit: *digit });
                            }
                            (b1, b2) => b1.or(b2),
                        };
                        if open.atom == cur || tree.has_bond(open.atom, cur) {
                            return Err(SmilesError::DuplicateBond { digit: *digit });
                        }
                        tree.connect(open.atom, cur, ring_bond);
                    }
                    None => {
                        ring_opens.insert(*digit, RingOpen { atom: cur, bond });
                    }
                }
            }
            Token::OpenParen(pos) => {
                let cur = current.ok_or(SmilesError::UnmatchedParen { pos: *pos })?;
                if let Some((_, bond_pos)) = pending_bond {
                    return Err(SmilesError::DanglingBond { pos: bond_pos });
                }
                branches.push((cur, *pos));
            }
            Token::CloseParen(pos) => {
                if let Some((_, bond_pos)) = pending_bond {
                    return Err(SmilesError::DanglingBond { pos: bond_pos });
                }
                let (atom, _) = branches
                    .pop()
                    .ok_or(SmilesError::UnmatchedParen { pos: *pos })?;
                current = Some(atom);
            }
            Token::Dot(pos) => {
                if pending_bond.is_some() {
                    return Err(SmilesError::DanglingBond { pos: *pos });
                }
                current = None;
            }
        }
    }

    if let Some((_, pos)) = pending_bond {
        return Err(SmilesError::DanglingBond { pos });
    }

    if let Some(&(_, pos)) = branches.last() {
        return Err(SmilesError::UnmatchedParen { pos });
    }

    if let Some(&digit) = ring_opens.keys().min() {
        return Err(SmilesError::UnclosedRing { digit });
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::tokenizer::tokenize;

    fn tree(s: &str) -> ParseTree {
        build_parse_tree(&tokenize(s).unwrap()).unwrap()
    }

    fn degree(tree: &ParseTree, atom: usize) -> usize {
        tree.bonds
            .iter()
            .filter(|b| b.from == atom || b.to == atom)
            .count()
    }

    #[test]
    fn ethane_tree() {
        let t = tree("CC");
        assert_eq!(t.atoms.len(), 2);
        assert_eq!(t.bonds, vec![ParseBond { from: 0, to: 1, bond: None }]);
    }

    #[test]
    fn cyclohexane_tree() {
        let t = tree("C1CCCCC1");
        assert_eq!(t.atoms.len(), 6);
        assert_eq!(t.bonds.len(), 6);
        for atom in 0..6 {
            assert_eq!(degree(&t, atom), 2);
        }
    }

    #[test]
    fn branch_tree() {
        let t = tree("CC(C)C");
        assert_eq!(t.atoms.len(), 4);
        assert_eq!(degree(&t, 1), 3);
    }

    #[test]
    fn ring_bond_order_from_either_end() {
        let t = tree("C=1CC1");
        let closure = t.bonds.last().unwrap();
        assert_eq!((closure.from, closure.to), (0, 2));
        assert_eq!(closure.bond, Some(BondToken::Double));
    }

    #[test]
    fn ring_digit_reuse() {
        let t = tree("C1CC1C1CC1");
        assert_eq!(t.atoms.len(), 6);
        assert_eq!(t.bonds.len(), 7);
    }

    #[test]
    fn disconnected() {
        let t = tree("[Na+].[Cl-]");
        assert_eq!(t.atoms.len(), 2);
        assert!(t.bonds.is_empty());
    }

    #[test]
    fn structural_errors() {
        let parse = |s: &str| build_parse_tree(&tokenize(s).unwrap());
        assert!(matches!(parse("C1CC"), Err(SmilesError::UnclosedRing { digit: 1 })));
        assert!(matches!(parse("C(C"), Err(SmilesError::UnmatchedParen { .. })));
        assert!(matches!(parse("C)C"), Err(SmilesError::UnmatchedParen { .. })));
        assert!(matches!(parse("C=1CC#1"), Err(SmilesError::RingBondConflict { digit: 1 })));
        assert!(matches!(parse("C11"), Err(SmilesError::DuplicateBond { digit: 1 })));
        assert!(matches!(parse("CC="), Err(SmilesError::DanglingBond { .. })));
        assert!(matches!(parse("=C"), Err(SmilesError::DanglingBond { .. })));
        assert!(matches!(parse("1CC"), Err(SmilesError::InvalidRingBond { digit: 1, .. })));
    }
}
