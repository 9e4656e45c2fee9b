use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::element::Element;
use crate::mol::Mol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValenceError {
    pub atom: usize,
    pub element: Element,
    pub valence: u8,
    pub allowed: &'static [u8],
}

/// Bond-order sum plus implicit hydrogens. Aromatic bonds count one, so
/// call this on a kekulized molecule.
pub fn total_valence(mol: &Mol<Atom, Bond>, atom: NodeIndex) -> u8 {
    mol.bonds_of(atom)
        .map(|e| mol.bond(e).order.valence_contribution())
        .fold(mol.atom(atom).hydrogen_count, u8::saturating_add)
}

/// Flags neutral atoms whose valence exceeds the lowest default valence of
/// their element without matching any other.
///
/// Charged atoms and elements without default valences are not checked.
/// A valence below the lowest default (`[C]`, `[CH3]`) is an open-shell
/// atom and passes.
pub fn check_valence(mol: &Mol<Atom, Bond>) -> Result<(), Vec<ValenceError>> {
    let errors: Vec<ValenceError> = mol
        .atoms()
        .filter_map(|idx| {
            let atom = mol.atom(idx);
            if atom.formal_charge != 0 {
                return None;
            }
            let element = Element::from_atomic_num(atom.atomic_num)?;
            let allowed = element.default_valences();
            let &lowest = allowed.first()?;
            let valence = total_valence(mol, idx);
            if valence <= lowest || allowed.contains(&valence) {
                return None;
            }
            Some(ValenceError {
                atom: idx.index(),
                element,
                valence,
                allowed,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
