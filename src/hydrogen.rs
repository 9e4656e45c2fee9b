use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;

/// Materialize every implicit hydrogen as an explicit atom.
///
/// Heavy atoms keep their indices; new hydrogens are appended after the
/// last existing atom, grouped by parent in parent order. Each parent's
/// `hydrogen_count` is reset to zero, so calling this on an already
/// hydrogen-explicit molecule returns an identical copy.
pub fn add_hs(mol: &Mol<Atom, Bond>) -> Mol<Atom, Bond> {
    let implicit: usize = mol
        .atoms()
        .map(|idx| mol.atom(idx).hydrogen_count as usize)
        .sum();
    let mut result = Mol::with_capacity(mol.atom_count() + implicit, mol.bond_count() + implicit);
    let mut index_map = Vec::with_capacity(mol.atom_count());

    for idx in mol.atoms() {
        let atom = mol.atom(idx);
        let new_idx = result.add_atom(Atom {
            hydrogen_count: 0,
            ..*atom
        });
        index_map.push(new_idx);
    }

    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            result.add_bond(index_map[a.index()], index_map[b.index()], *mol.bond(edge));
        }
    }

    for (idx, &parent) in index_map.iter().enumerate() {
        let h_count = mol.atom(NodeIndex::new(idx)).hydrogen_count;
        for _ in 0..h_count {
            let h = result.add_atom(Atom::hydrogen());
            result.add_bond(parent, h, Bond::new(BondOrder::Single));
        }
    }

    result
}
