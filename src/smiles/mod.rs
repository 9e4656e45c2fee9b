//! SMILES line-notation reader.
//!
//! Produces a [`Mol`] whose bare organic-subset atoms carry their inferred
//! implicit hydrogen counts and whose bracket atoms carry the count written
//! in the bracket. Stereo markers are accepted and discarded. Aromatic bonds
//! are kept as [`BondOrder::Aromatic`](crate::BondOrder::Aromatic) in the
//! result; a Kekulé structure is only built to validate the input.

mod builder;
pub mod error;
mod parse_tree;
mod tokenizer;

use tracing::trace;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::kekulize::kekulize;
use crate::mol::Mol;
use crate::valence::check_valence;
use parse_tree::ParseTree;
pub use error::SmilesError;

fn read_tree(s: &str) -> Result<ParseTree, SmilesError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(SmilesError::EmptyInput);
    }
    let tokens = tokenizer::tokenize(trimmed)?;
    if tokens.is_empty() {
        return Err(SmilesError::EmptyInput);
    }
    parse_tree::build_parse_tree(&tokens)
}

/// Parses `s` and rejects molecules with no Kekulé structure or with a
/// neutral atom of impossible valence.
pub fn from_smiles(s: &str) -> Result<Mol<Atom, Bond>, SmilesError> {
    let tree = read_tree(s)?;
    let mol = builder::build_mol(&tree);

    let kekule = kekulize(&mol)?;
    if let Err(errors) = check_valence(&kekule) {
        if let Some(err) = errors.first() {
            return Err(SmilesError::Valence {
                atom: err.atom,
                pos: tree.atoms.get(err.atom).map_or(0, |tok| tok.pos),
                valence: err.valence,
            });
        }
    }

    trace!(
        smiles = s.trim(),
        atoms = mol.atom_count(),
        bonds = mol.bond_count(),
        "parsed SMILES"
    );
    Ok(mol)
}

/// Graph straight from the parse tree, without Kekulé or valence checks.
#[cfg(test)]
pub(crate) fn build_unchecked(s: &str) -> Result<Mol<Atom, Bond>, SmilesError> {
    Ok(builder::build_mol(&read_tree(s)?))
}
