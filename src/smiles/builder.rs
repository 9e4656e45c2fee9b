use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;
use crate::smiles::parse_tree::ParseTree;
use crate::smiles::tokenizer::{AtomToken, BondToken};

pub fn build_mol(tree: &ParseTree) -> Mol<Atom, Bond> {
    let mut mol = Mol::with_capacity(tree.atoms.len(), tree.bonds.len());

    for tok in &tree.atoms {
        mol.add_atom(Atom {
            atomic_num: tok.element.atomic_num(),
            formal_charge: tok.charge,
            isotope: tok.isotope,
            hydrogen_count: tok.hcount.unwrap_or(0),
            is_aromatic: tok.is_aromatic,
        });
    }

    for pb in &tree.bonds {
        let order = resolve_bond_order(
            pb.bond,
            tree.atoms[pb.from].is_aromatic,
            tree.atoms[pb.to].is_aromatic,
        );
        mol.add_bond(NodeIndex::new(pb.from), NodeIndex::new(pb.to), Bond::new(order));
    }

    for (i, tok) in tree.atoms.iter().enumerate() {
        if !tok.is_bracket() {
            let node = NodeIndex::new(i);
            mol.atom_mut(node).hydrogen_count = implicit_hydrogens(&mol, node, tok);
        }
    }

    mol
}

fn resolve_bond_order(bond: Option<BondToken>, from_aromatic: bool, to_aromatic: bool) -> BondOrder {
    match bond {
        Some(BondToken::Single) => BondOrder::Single,
        Some(BondToken::Double) => BondOrder::Double,
        Some(BondToken::Triple) => BondOrder::Triple,
        Some(BondToken::Aromatic) => BondOrder::Aromatic,
        None if from_aromatic && to_aromatic => BondOrder::Aromatic,
        None => BondOrder::Single,
    }
}

/// Organic-subset hydrogen inference: fill up to the lowest default
/// valence that accommodates the explicit bonds. An aromatic atom gives
/// one of those hydrogens to its share of the pi system.
fn implicit_hydrogens(mol: &Mol<Atom, Bond>, node: NodeIndex, tok: &AtomToken) -> u8 {
    let bond_order_sum = mol
        .bonds_of(node)
        .map(|edge| mol.bond(edge).order.valence_contribution())
        .fold(0u8, u8::saturating_add);

    let Some(&target) = tok
        .element
        .default_valences()
        .iter()
        .find(|&&v| v >= bond_order_sum)
    else {
        return 0;
    };

    let h = target - bond_order_sum;
    if tok.is_aromatic && h > 0 {
        h - 1
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_tree::build_parse_tree;
    use crate::smiles::tokenizer::tokenize;

    fn parse(s: &str) -> Mol<Atom, Bond> {
        build_mol(&build_parse_tree(&tokenize(s).unwrap()).unwrap())
    }

    fn h(mol: &Mol<Atom, Bond>, i: usize) -> u8 {
        mol.atom(NodeIndex::new(i)).hydrogen_count
    }

    #[test]
    fn methane_h_count() {
        let mol = parse("C");
        assert_eq!(mol.atom_count(), 1);
        assert_eq!(h(&mol, 0), 4);
    }

    #[test]
    fn ethene_h_counts() {
        let mol = parse("C=C");
        assert_eq!(h(&mol, 0), 2);
        assert_eq!(h(&mol, 1), 2);
    }

    #[test]
    fn bracket_atoms_keep_written_h() {
        assert_eq!(h(&parse("[CH4]"), 0), 4);
        assert_eq!(h(&parse("[C]"), 0), 0);
        assert_eq!(h(&parse("C[C@@H](N)O"), 1), 1);
    }

    #[test]
    fn aromatic_carbon_benzene() {
        let mol = parse("c1ccccc1");
        for i in 0..6 {
            assert!(mol.atom(NodeIndex::new(i)).is_aromatic);
            assert_eq!(h(&mol, i), 1, "atom {i} should have 1 H");
        }
        for edge in mol.bonds() {
            assert_eq!(mol.bond(edge).order, BondOrder::Aromatic);
        }
    }

    #[test]
    fn aromatic_heteroatoms() {
        let pyridine = parse("c1ccncc1");
        assert_eq!(h(&pyridine, 3), 0);
        let furan = parse("o1cccc1");
        assert_eq!(h(&furan, 0), 0);
        let pyrrole = parse("[nH]1cccc1");
        assert_eq!(h(&pyrrole, 0), 1);
    }

    #[test]
    fn fused_ring_junction_has_no_h() {
        let mol = parse("c1ccc2ccccc2c1");
        assert_eq!(h(&mol, 3), 0);
        assert_eq!(h(&mol, 8), 0);
        assert_eq!(h(&mol, 0), 1);
    }

    #[test]
    fn hypervalent_picks_next_valence() {
        let dmso = parse("CS(=O)C");
        assert_eq!(h(&dmso, 1), 0);
        let sulfonamide = parse("CS(=O)(=O)N");
        assert_eq!(h(&sulfonamide, 1), 0);
        assert_eq!(h(&sulfonamide, 4), 2);
    }

    #[test]
    fn substituent_bond_to_ring_is_single() {
        let mol = parse("Oc1ccccc1");
        let edge = mol.bond_between(NodeIndex::new(0), NodeIndex::new(1)).unwrap();
        assert_eq!(mol.bond(edge).order, BondOrder::Single);
        assert_eq!(h(&mol, 0), 1);
        assert_eq!(h(&mol, 1), 0);
    }
}
