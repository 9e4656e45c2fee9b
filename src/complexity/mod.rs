//! Information-theoretic molecular complexity.
//!
//! Every heavy atom is described by the short bonded walks (paths) that
//! start at it, with atoms recorded only by [`AtomType`]. Three metrics are
//! derived from those paths:
//!
//! - **CM**: the sum of per-atom complexities `CA = H(paths) + log2(N)`.
//! - **CM\***: `log2(Σ 2^CA)`, dominated by the most complex atom.
//! - **Cse**: the entropy of the distinct atom environments, 0 when every
//!   heavy atom sits in the same environment.
//!
//! The graph-level functions expect hydrogens to be explicit graph nodes.
//! The SMILES-level functions parse and add hydrogens themselves.
//!
//! ```
//! use molecular_complexity::molecular_complexity;
//!
//! let c = molecular_complexity("C1CC1");
//! assert!((c.cm - 13.5).abs() < 1e-9);
//! assert_eq!(c.cse, 0.0);
//!
//! assert!(!molecular_complexity("not a molecule").is_defined());
//! ```

mod atom_type;
mod error;
mod neighbors;
mod occurrence;
mod paths;
mod score;

pub use atom_type::{atom_type, AtomType, TypedAtom};
pub use error::ComplexityError;
pub use neighbors::NeighborMap;
pub use occurrence::{fractional_occurrence, shannon_entropy};
pub use paths::{heavy_atom_paths, paths_from, AtomEnvironment, AtomPath};
pub use score::{atom_complexity, environment_entropy, log2_sum_exp2, AtomComplexity};

use tracing::{debug, instrument};

use crate::hydrogen::add_hs;
use crate::smiles::from_smiles;
use crate::traits::MolecularGraph;
use score::{score_atoms, summarize, ScoredAtom};

/// The molecule-level metrics, all in bits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MolecularComplexity {
    pub cm: f64,
    pub cm_star: f64,
    pub cse: f64,
}

impl MolecularComplexity {
    /// All three metrics NaN: the input could not be scored.
    pub const UNDEFINED: MolecularComplexity = MolecularComplexity {
        cm: f64::NAN,
        cm_star: f64::NAN,
        cse: f64::NAN,
    };

    /// `false` for [`UNDEFINED`](Self::UNDEFINED) or any result with a NaN metric.
    pub fn is_defined(&self) -> bool {
        !(self.cm.is_nan() || self.cm_star.is_nan() || self.cse.is_nan())
    }
}

/// What to do with a heavy atom that has no neighbors and therefore no paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IsolatedAtomPolicy {
    /// Score the atom as `CA = 0` with an empty environment.
    #[default]
    ZeroComplexity,
    /// Leave the atom out of every metric.
    Exclude,
    /// Fail with [`ComplexityError::IsolatedAtom`].
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexityOptions {
    pub isolated_atoms: IsolatedAtomPolicy,
}

fn score_graph<G: MolecularGraph>(
    graph: &G,
    options: &ComplexityOptions,
) -> Result<Vec<ScoredAtom>, ComplexityError> {
    if graph.atom_count() == 0 {
        return Err(ComplexityError::EmptyGraph);
    }
    let map = NeighborMap::build(graph)?;
    let rooted = heavy_atom_paths(&map);
    if rooted.is_empty() {
        return Err(ComplexityError::NoHeavyAtoms);
    }
    score_atoms(rooted, options.isolated_atoms)
}

/// Scores a hydrogen-explicit graph with default options.
pub fn complexity_of<G: MolecularGraph>(graph: &G) -> Result<MolecularComplexity, ComplexityError> {
    complexity_of_with(graph, &ComplexityOptions::default())
}

#[instrument(level = "debug", skip_all, fields(atoms = graph.atom_count()))]
pub fn complexity_of_with<G: MolecularGraph>(
    graph: &G,
    options: &ComplexityOptions,
) -> Result<MolecularComplexity, ComplexityError> {
    let scored = score_graph(graph, options)?;
    let result = summarize(&scored)?;
    debug!(
        cm = result.cm,
        cm_star = result.cm_star,
        cse = result.cse,
        scored_atoms = scored.len(),
        "scored molecule"
    );
    Ok(result)
}

/// Per-atom breakdown behind [`complexity_of`], in atom index order.
pub fn atom_complexities<G: MolecularGraph>(
    graph: &G,
) -> Result<Vec<AtomComplexity>, ComplexityError> {
    atom_complexities_with(graph, &ComplexityOptions::default())
}

pub fn atom_complexities_with<G: MolecularGraph>(
    graph: &G,
    options: &ComplexityOptions,
) -> Result<Vec<AtomComplexity>, ComplexityError> {
    Ok(score_graph(graph, options)?
        .into_iter()
        .map(|s| s.complexity)
        .collect())
}

/// Canonical environment of each scored heavy atom, keyed by atom index.
pub fn atom_environments<G: MolecularGraph>(
    graph: &G,
) -> Result<Vec<(usize, AtomEnvironment)>, ComplexityError> {
    Ok(score_graph(graph, &ComplexityOptions::default())?
        .into_iter()
        .map(|s| (s.complexity.atom, s.environment))
        .collect())
}

/// Parses `smiles`, adds explicit hydrogens and scores the result.
pub fn try_molecular_complexity(smiles: &str) -> Result<MolecularComplexity, ComplexityError> {
    try_molecular_complexity_with(smiles, &ComplexityOptions::default())
}

#[instrument(level = "debug", skip(options))]
pub fn try_molecular_complexity_with(
    smiles: &str,
    options: &ComplexityOptions,
) -> Result<MolecularComplexity, ComplexityError> {
    let mol = add_hs(&from_smiles(smiles)?);
    complexity_of_with(&mol, options)
}

/// Like [`try_molecular_complexity`], but any failure becomes
/// [`MolecularComplexity::UNDEFINED`]. Check [`MolecularComplexity::is_defined`]
/// before comparing results.
pub fn molecular_complexity(smiles: &str) -> MolecularComplexity {
    match try_molecular_complexity(smiles) {
        Ok(result) => result,
        Err(err) => {
            debug!(smiles, error = %err, "complexity undefined");
            MolecularComplexity::UNDEFINED
        }
    }
}
