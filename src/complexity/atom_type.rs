use std::fmt;

use crate::complexity::error::ComplexityError;
use crate::element::Element;
use crate::traits::MolecularGraph;

/// Structural classification of an atom: element, connections including
/// hydrogens, and connections to non-hydrogen atoms.
///
/// Two atoms in the same structural role always get equal `AtomType`s.
/// This is the only basis on which paths and environments are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomType {
    pub element: Element,
    pub degree: u8,
    pub heavy_degree: u8,
}

impl AtomType {
    pub fn is_hydrogen(&self) -> bool {
        self.element.is_hydrogen()
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.element, self.degree, self.heavy_degree)
    }
}

/// An atom index paired with its type. Atoms sharing a type are told apart
/// by index; lookups in a [`NeighborMap`](super::NeighborMap) use both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedAtom {
    pub index: usize,
    pub atom_type: AtomType,
}

impl TypedAtom {
    pub fn is_hydrogen(&self) -> bool {
        self.atom_type.is_hydrogen()
    }
}

pub fn atom_type<G: MolecularGraph>(graph: &G, atom: usize) -> Result<AtomType, ComplexityError> {
    let element = graph
        .element(atom)
        .ok_or(ComplexityError::UnknownElement { atom })?;
    let degree = graph.total_degree(atom);
    let hydrogens = graph.total_hydrogens(atom);
    Ok(AtomType {
        element,
        degree,
        heavy_degree: degree.saturating_sub(hydrogens),
    })
}

pub fn typed_atoms<G: MolecularGraph>(graph: &G) -> Result<Vec<TypedAtom>, ComplexityError> {
    (0..graph.atom_count())
        .map(|index| {
            Ok(TypedAtom {
                index,
                atom_type: atom_type(graph, index)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::hydrogen::add_hs;
    use crate::mol::Mol;
    use crate::smiles::from_smiles;

    fn explicit(smiles: &str) -> Mol<Atom, Bond> {
        add_hs(&from_smiles(smiles).unwrap())
    }

    fn ty(element: Element, degree: u8, heavy_degree: u8) -> AtomType {
        AtomType {
            element,
            degree,
            heavy_degree,
        }
    }

    #[test]
    fn ethanol_types() {
        let mol = explicit("CCO");
        assert_eq!(atom_type(&mol, 0).unwrap(), ty(Element::C, 4, 1));
        assert_eq!(atom_type(&mol, 1).unwrap(), ty(Element::C, 4, 2));
        assert_eq!(atom_type(&mol, 2).unwrap(), ty(Element::O, 2, 1));
    }

    #[test]
    fn bonded_hydrogen_does_not_count_itself() {
        let mol = explicit("C");
        assert_eq!(atom_type(&mol, 1).unwrap(), ty(Element::H, 1, 1));
    }

    #[test]
    fn implicit_hydrogens_count_toward_degree() {
        let mol = from_smiles("CC").unwrap();
        assert_eq!(atom_type(&mol, 0).unwrap(), ty(Element::C, 4, 1));
    }

    #[test]
    fn aromatic_and_carbonyl_types() {
        let mol = explicit("c1ccccc1C=O");
        assert_eq!(atom_type(&mol, 0).unwrap(), ty(Element::C, 3, 2));
        assert_eq!(atom_type(&mol, 5).unwrap(), ty(Element::C, 3, 3));
        assert_eq!(atom_type(&mol, 7).unwrap(), ty(Element::O, 1, 1));
    }

    #[test]
    fn unknown_element_is_an_error() {
        let mut mol = Mol::<Atom, Bond>::new();
        mol.add_atom(Atom::default());
        assert_eq!(
            atom_type(&mol, 0),
            Err(ComplexityError::UnknownElement { atom: 0 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(ty(Element::Cl, 1, 1).to_string(), "Cl(1,1)");
    }
}
