use thiserror::Error;

use crate::smiles::SmilesError;

/// Errors produced while scoring molecular complexity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplexityError {
    /// The line notation could not be turned into a molecular graph.
    #[error("could not interpret SMILES: {0}")]
    Parse(#[from] SmilesError),
    /// The graph has no atoms at all.
    #[error("molecule has no atoms")]
    EmptyGraph,
    /// No non-hydrogen atom is left to score.
    #[error("molecule has no scorable non-hydrogen atoms")]
    NoHeavyAtoms,
    /// An atom has no periodic-table element.
    #[error("atom {atom} has no known element")]
    UnknownElement { atom: usize },
    /// An atom still carries hydrogens that are not graph nodes.
    #[error("atom {atom} carries {count} implicit hydrogen(s); add explicit hydrogens first")]
    ImplicitHydrogens { atom: usize, count: u8 },
    /// A neighbor index points past the end of the atom list.
    #[error("atom {atom} lists neighbor {neighbor}, which does not exist")]
    NeighborOutOfRange { atom: usize, neighbor: usize },
    /// `neighbor` is listed as bonded to `atom` but not the other way round.
    #[error("atom {atom} lists neighbor {neighbor}, but {neighbor} does not list {atom}")]
    AsymmetricNeighbors { atom: usize, neighbor: usize },
    /// Fractional occurrence was asked for over zero items.
    #[error("fractional occurrence of an empty sequence is undefined")]
    EmptySequence,
    /// A heavy atom without neighbors under [`IsolatedAtomPolicy::Reject`](super::IsolatedAtomPolicy::Reject).
    #[error("atom {atom} has no neighbors, so its complexity is undefined")]
    IsolatedAtom { atom: usize },
}
