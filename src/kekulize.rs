//! Kekulé assignment for aromatic bonds.
//!
//! Every aromatic atom one bond short of its target valence must receive
//! exactly one double bond from its aromatic neighbors. That is a perfect
//! matching on those atoms, found here with augmenting paths. A molecule
//! with no such matching (`c1cccc1`) cannot be a real structure.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::element::Element;
use crate::mol::Mol;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KekulizeError {
    /// These atoms could not be given a double bond.
    #[error("cannot kekulize aromatic system: unmatched atoms {0:?}")]
    Unkekulizable(Vec<usize>),
}

/// Returns a copy of `mol` with every aromatic bond replaced by a single or
/// double bond. Atoms, hydrogen counts and aromatic flags are unchanged.
pub fn kekulize(mol: &Mol<Atom, Bond>) -> Result<Mol<Atom, Bond>, KekulizeError> {
    let n = mol.atom_count();
    let mut aromatic_adj: Vec<Vec<(NodeIndex, EdgeIndex)>> = vec![Vec::new(); n];
    for edge in mol.bonds() {
        if mol.bond(edge).order != BondOrder::Aromatic {
            continue;
        }
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            aromatic_adj[a.index()].push((b, edge));
            aromatic_adj[b.index()].push((a, edge));
        }
    }

    let needs_double: Vec<bool> = mol
        .atoms()
        .map(|node| !aromatic_adj[node.index()].is_empty() && needs_double_bond(mol, node))
        .collect();

    let mut matched: Vec<Option<EdgeIndex>> = vec![None; n];
    for start in mol.atoms() {
        if needs_double[start.index()] && matched[start.index()].is_none() {
            augment(mol, &aromatic_adj, &needs_double, &mut matched, start);
        }
    }

    let unmatched: Vec<usize> = (0..n)
        .filter(|&i| needs_double[i] && matched[i].is_none())
        .collect();
    if !unmatched.is_empty() {
        return Err(KekulizeError::Unkekulizable(unmatched));
    }

    let doubles: HashSet<EdgeIndex> = matched.into_iter().flatten().collect();
    let mut result = Mol::with_capacity(n, mol.bond_count());
    for node in mol.atoms() {
        result.add_atom(*mol.atom(node));
    }
    for edge in mol.bonds() {
        let Some((a, b)) = mol.bond_endpoints(edge) else {
            continue;
        };
        let order = match mol.bond(edge).order {
            BondOrder::Aromatic if doubles.contains(&edge) => BondOrder::Double,
            BondOrder::Aromatic => BondOrder::Single,
            other => other,
        };
        result.add_bond(a, b, Bond::new(order));
    }
    Ok(result)
}

fn needs_double_bond(mol: &Mol<Atom, Bond>, node: NodeIndex) -> bool {
    let atom = mol.atom(node);
    let Some(element) = Element::from_atomic_num(atom.atomic_num) else {
        return false;
    };
    let used = mol
        .bonds_of(node)
        .map(|e| mol.bond(e).order.valence_contribution())
        .fold(atom.hydrogen_count, u8::saturating_add);
    let Some(target) = target_valence(element, used, atom.formal_charge) else {
        return false;
    };
    let gap = target - used;
    gap == 1 || (gap == 2 && atom.hydrogen_count == 0 && atom.formal_charge != 0)
}

/// Lowest charge-adjusted default valence that holds `used`.
fn target_valence(element: Element, used: u8, formal_charge: i8) -> Option<u8> {
    element
        .default_valences()
        .iter()
        .filter_map(|&v| u8::try_from(i16::from(v) + i16::from(formal_charge)).ok())
        .filter(|&v| v > 0)
        .find(|&v| v >= used)
}

fn augment(
    mol: &Mol<Atom, Bond>,
    aromatic_adj: &[Vec<(NodeIndex, EdgeIndex)>],
    needs_double: &[bool],
    matched: &mut [Option<EdgeIndex>],
    start: NodeIndex,
) -> bool {
    let n = needs_double.len();
    let mut prev: Vec<Option<(NodeIndex, EdgeIndex)>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([start]);
    visited[start.index()] = true;

    while let Some(u) = queue.pop_front() {
        for &(v, e) in &aromatic_adj[u.index()] {
            if !needs_double[v.index()] || visited[v.index()] || matched[u.index()] == Some(e) {
                continue;
            }
            visited[v.index()] = true;
            prev[v.index()] = Some((u, e));

            let Some(partner_edge) = matched[v.index()] else {
                flip_path(matched, &prev, start, v);
                return true;
            };
            let Some((a, b)) = mol.bond_endpoints(partner_edge) else {
                continue;
            };
            let w = if a == v { b } else { a };
            if !visited[w.index()] {
                visited[w.index()] = true;
                prev[w.index()] = Some((v, partner_edge));
                queue.push_back(w);
            }
        }
    }
    false
}

/// Walks the alternating path back from `end`, matching every other edge.
fn flip_path(
    matched: &mut [Option<EdgeIndex>],
    prev: &[Option<(NodeIndex, EdgeIndex)>],
    start: NodeIndex,
    end: NodeIndex,
) {
    let mut cur = end;
    let mut take = true;
    while cur != start {
        let Some((p, e)) = prev[cur.index()] else {
            break;
        };
        if take {
            matched[cur.index()] = Some(e);
            matched[p.index()] = Some(e);
        }
        take = !take;
        cur = p;
    }
}
