use std::collections::BTreeMap;

use crate::complexity::atom_type::{typed_atoms, TypedAtom};
use crate::complexity::error::ComplexityError;
use crate::traits::MolecularGraph;

/// Typed adjacency of a hydrogen-explicit molecular graph.
///
/// Keys compare by index and type, so two atoms of the same type stay
/// distinct entries. Neighbor lists keep the order the graph reports them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborMap {
    adjacency: BTreeMap<TypedAtom, Vec<TypedAtom>>,
}

impl NeighborMap {
    /// Types every atom and records its neighbors.
    ///
    /// Fails if any atom still has implicit hydrogens, if a neighbor index is
    /// out of range, or if a bond is listed on one side only.
    pub fn build<G: MolecularGraph>(graph: &G) -> Result<Self, ComplexityError> {
        let atoms = typed_atoms(graph)?;

        let mut adjacency = BTreeMap::new();
        for atom in &atoms {
            let count = graph.implicit_hydrogens(atom.index);
            if count > 0 {
                return Err(ComplexityError::ImplicitHydrogens {
                    atom: atom.index,
                    count,
                });
            }

            let neighbors = graph
                .neighbors(atom.index)
                .map(|nb| {
                    atoms
                        .get(nb)
                        .copied()
                        .ok_or(ComplexityError::NeighborOutOfRange {
                            atom: atom.index,
                            neighbor: nb,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            adjacency.insert(*atom, neighbors);
        }

        for (atom, neighbors) in &adjacency {
            for nb in neighbors {
                let reciprocal = adjacency
                    .get(nb)
                    .is_some_and(|back| back.contains(atom));
                if !reciprocal {
                    return Err(ComplexityError::AsymmetricNeighbors {
                        atom: atom.index,
                        neighbor: nb.index,
                    });
                }
            }
        }

        Ok(NeighborMap { adjacency })
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of `atom`, or an empty slice if it is not in the map.
    pub fn neighbors(&self, atom: &TypedAtom) -> &[TypedAtom] {
        self.adjacency.get(atom).map_or(&[], Vec::as_slice)
    }

    /// Atoms in ascending index order.
    pub fn atoms(&self) -> impl Iterator<Item = &TypedAtom> + '_ {
        self.adjacency.keys()
    }

    pub fn heavy_atoms(&self) -> impl Iterator<Item = &TypedAtom> + '_ {
        self.atoms().filter(|a| !a.is_hydrogen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::element::Element;
    use crate::hydrogen::add_hs;
    use crate::smiles::from_smiles;

    /// Adjacency lists given by hand, for shapes `Mol` cannot express.
    struct RawGraph {
        elements: Vec<Element>,
        adjacency: Vec<Vec<usize>>,
    }

    impl MolecularGraph for RawGraph {
        fn atom_count(&self) -> usize {
            self.elements.len()
        }

        fn element(&self, atom: usize) -> Option<Element> {
            self.elements.get(atom).copied()
        }

        fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
            self.adjacency[atom].iter().copied()
        }

        fn implicit_hydrogens(&self, _atom: usize) -> u8 {
            0
        }
    }

    #[test]
    fn methane_map() {
        let mol = add_hs(&from_smiles("C").unwrap());
        let map = NeighborMap::build(&mol).unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.heavy_atoms().count(), 1);

        let carbon = map.atoms().next().unwrap();
        assert_eq!(carbon.index, 0);
        assert_eq!(map.neighbors(carbon).len(), 4);
        assert!(map.neighbors(carbon).iter().all(|h| h.is_hydrogen()));
    }

    #[test]
    fn same_type_atoms_stay_distinct() {
        let mol = add_hs(&from_smiles("C1CC1").unwrap());
        let map = NeighborMap::build(&mol).unwrap();
        let carbons: Vec<_> = map.heavy_atoms().copied().collect();
        assert_eq!(carbons.len(), 3);
        assert_eq!(carbons[0].atom_type, carbons[1].atom_type);
        assert_ne!(carbons[0], carbons[1]);
    }

    #[test]
    fn implicit_hydrogens_rejected() {
        let mol: crate::mol::Mol<Atom, Bond> = from_smiles("CO").unwrap();
        assert_eq!(
            NeighborMap::build(&mol),
            Err(ComplexityError::ImplicitHydrogens { atom: 0, count: 3 })
        );
    }

    #[test]
    fn asymmetric_adjacency_rejected() {
        let graph = RawGraph {
            elements: vec![Element::C, Element::C, Element::O],
            adjacency: vec![vec![1], vec![0, 2], vec![]],
        };
        assert_eq!(
            NeighborMap::build(&graph),
            Err(ComplexityError::AsymmetricNeighbors { atom: 1, neighbor: 2 })
        );
    }

    #[test]
    fn out_of_range_neighbor_rejected() {
        let graph = RawGraph {
            elements: vec![Element::C],
            adjacency: vec![vec![3]],
        };
        assert_eq!(
            NeighborMap::build(&graph),
            Err(ComplexityError::NeighborOutOfRange { atom: 0, neighbor: 3 })
        );
    }

    #[test]
    fn missing_atom_has_no_neighbors() {
        let mol = add_hs(&from_smiles("O").unwrap());
        let map = NeighborMap::build(&mol).unwrap();
        let stranger = *map.atoms().next().unwrap();
        let stranger = TypedAtom {
            index: 99,
            ..stranger
        };
        assert!(map.neighbors(&stranger).is_empty());
    }
}
