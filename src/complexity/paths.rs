use std::fmt;

use crate::complexity::atom_type::{AtomType, TypedAtom};
use crate::complexity::neighbors::NeighborMap;

/// A short bonded walk starting at a heavy atom, recorded by atom types only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomPath {
    /// Root and a neighbor that leads nowhere else: a hydrogen, or an atom
    /// whose only neighbor is the root.
    Pair(AtomType, AtomType),
    /// Root, neighbor, and a next neighbor that is not the root.
    Triple(AtomType, AtomType, AtomType),
}

impl AtomPath {
    pub fn root(&self) -> AtomType {
        match *self {
            AtomPath::Pair(root, _) | AtomPath::Triple(root, _, _) => root,
        }
    }

    /// Number of atoms visited.
    pub fn atom_count(&self) -> usize {
        match self {
            AtomPath::Pair(..) => 2,
            AtomPath::Triple(..) => 3,
        }
    }
}

impl fmt::Display for AtomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomPath::Pair(a, b) => write!(f, "{a}-{b}"),
            AtomPath::Triple(a, b, c) => write!(f, "{a}-{b}-{c}"),
        }
    }
}

/// The sorted multiset of paths rooted at one atom.
///
/// Sorting makes environments of equivalent atoms compare equal no matter
/// which order the graph lists neighbors in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomEnvironment(Vec<AtomPath>);

impl AtomEnvironment {
    pub fn new(mut paths: Vec<AtomPath>) -> Self {
        paths.sort_unstable();
        AtomEnvironment(paths)
    }

    pub fn paths(&self) -> &[AtomPath] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every path rooted at `root`, in neighbor order.
pub fn paths_from(map: &NeighborMap, root: &TypedAtom) -> Vec<AtomPath> {
    let mut paths = Vec::new();
    for b in map.neighbors(root) {
        let onward = map.neighbors(b);
        let terminal = b.is_hydrogen() || (onward.len() == 1 && onward[0] == *root);
        if terminal {
            paths.push(AtomPath::Pair(root.atom_type, b.atom_type));
            continue;
        }
        for c in onward.iter().filter(|&c| c != root) {
            paths.push(AtomPath::Triple(root.atom_type, b.atom_type, c.atom_type));
        }
    }
    paths
}

/// Paths for each heavy atom, keyed by the atom, in index order.
pub fn heavy_atom_paths(map: &NeighborMap) -> Vec<(TypedAtom, Vec<AtomPath>)> {
    map.heavy_atoms()
        .map(|atom| (*atom, paths_from(map, atom)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::hydrogen::add_hs;
    use crate::smiles::from_smiles;

    fn map_of(smiles: &str) -> NeighborMap {
        NeighborMap::build(&add_hs(&from_smiles(smiles).unwrap())).unwrap()
    }

    fn ty(element: Element, degree: u8, heavy_degree: u8) -> AtomType {
        AtomType {
            element,
            degree,
            heavy_degree,
        }
    }

    #[test]
    fn methane_has_four_pairs() {
        let map = map_of("C");
        let rooted = heavy_atom_paths(&map);
        assert_eq!(rooted.len(), 1);
        let c = ty(Element::C, 4, 0);
        let h = ty(Element::H, 1, 1);
        assert_eq!(rooted[0].1, vec![AtomPath::Pair(c, h); 4]);
    }

    #[test]
    fn ethane_carbon_walks_through_its_partner() {
        let map = map_of("CC");
        let rooted = heavy_atom_paths(&map);
        let (_, paths) = &rooted[0];
        // three hydrogens, plus three walks C-C-H
        assert_eq!(paths.len(), 6);
        assert_eq!(paths.iter().filter(|p| p.atom_count() == 3).count(), 3);
        assert!(paths.iter().all(|p| p.root() == ty(Element::C, 4, 1)));
    }

    #[test]
    fn terminal_heavy_neighbor_gives_pair() {
        // [Cl]: its only neighbor is the root, no hydrogens to walk to
        let map = map_of("CCl");
        let rooted = heavy_atom_paths(&map);
        let (_, carbon) = &rooted[0];
        assert!(carbon.contains(&AtomPath::Pair(ty(Element::C, 4, 1), ty(Element::Cl, 1, 1))));

        let (_, chlorine) = &rooted[1];
        assert_eq!(chlorine.len(), 3);
        assert!(chlorine.iter().all(|p| p.atom_count() == 3));
    }

    #[test]
    fn cyclopropane_carbon() {
        let map = map_of("C1CC1");
        let rooted = heavy_atom_paths(&map);
        assert_eq!(rooted.len(), 3);
        for (_, paths) in &rooted {
            // 2 hydrogens + 2 ring neighbors each with 3 onward atoms
            assert_eq!(paths.len(), 8);
        }
    }

    #[test]
    fn lone_heavy_atom_has_no_paths() {
        let map = map_of("[Na+].[Cl-]");
        let rooted = heavy_atom_paths(&map);
        assert_eq!(rooted.len(), 2);
        assert!(rooted.iter().all(|(_, paths)| paths.is_empty()));
    }

    #[test]
    fn environment_ignores_neighbor_order() {
        let a = ty(Element::C, 4, 1);
        let h = ty(Element::H, 1, 1);
        let o = ty(Element::O, 2, 1);
        let forward = AtomEnvironment::new(vec![AtomPath::Pair(a, h), AtomPath::Triple(a, o, h)]);
        let backward = AtomEnvironment::new(vec![AtomPath::Triple(a, o, h), AtomPath::Pair(a, h)]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn display() {
        let path = AtomPath::Triple(
            ty(Element::C, 4, 1),
            ty(Element::O, 2, 1),
            ty(Element::H, 1, 1),
        );
        assert_eq!(path.to_string(), "C(4,1)-O(2,1)-H(1,1)");
    }
}
