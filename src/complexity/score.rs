use tracing::trace;

use crate::complexity::atom_type::{AtomType, TypedAtom};
use crate::complexity::error::ComplexityError;
use crate::complexity::occurrence::{fractional_occurrence, shannon_entropy};
use crate::complexity::paths::{AtomEnvironment, AtomPath};
use crate::complexity::{IsolatedAtomPolicy, MolecularComplexity};

/// Complexity contribution of one scored heavy atom.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomComplexity {
    pub atom: usize,
    pub atom_type: AtomType,
    pub path_count: usize,
    /// `CA`, in bits.
    pub complexity: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct ScoredAtom {
    pub complexity: AtomComplexity,
    pub environment: AtomEnvironment,
}

/// `CA = H(paths) + log2(N)` for a non-empty path list.
pub fn atom_complexity(paths: &[AtomPath]) -> Result<f64, ComplexityError> {
    let occurrence = fractional_occurrence(paths)?;
    let entropy = shannon_entropy(occurrence.iter().map(|&(_, p)| p));
    Ok(entropy + (paths.len() as f64).log2())
}

/// `log2(Σ 2^v)`, shifted by the maximum so large values do not overflow.
/// Negative infinity for an empty slice.
pub fn log2_sum_exp2(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return max;
    }
    let sum: f64 = values.iter().map(|v| (v - max).exp2()).sum();
    max + sum.log2()
}

/// Entropy of the distinct environments.
pub fn environment_entropy(environments: &[AtomEnvironment]) -> Result<f64, ComplexityError> {
    let occurrence = fractional_occurrence(environments)?;
    Ok(shannon_entropy(occurrence.iter().map(|&(_, q)| q)))
}

pub(crate) fn score_atoms(
    rooted: Vec<(TypedAtom, Vec<AtomPath>)>,
    policy: IsolatedAtomPolicy,
) -> Result<Vec<ScoredAtom>, ComplexityError> {
    let mut scored = Vec::with_capacity(rooted.len());
    for (atom, paths) in rooted {
        let complexity = if paths.is_empty() {
            match policy {
                IsolatedAtomPolicy::ZeroComplexity => 0.0,
                IsolatedAtomPolicy::Exclude => {
                    trace!(atom = atom.index, "skipping isolated atom");
                    continue;
                }
                IsolatedAtomPolicy::Reject => {
                    return Err(ComplexityError::IsolatedAtom { atom: atom.index })
                }
            }
        } else {
            atom_complexity(&paths)?
        };
        trace!(
            atom = atom.index,
            atom_type = %atom.atom_type,
            paths = paths.len(),
            complexity
        );

        scored.push(ScoredAtom {
            complexity: AtomComplexity {
                atom: atom.index,
                atom_type: atom.atom_type,
                path_count: paths.len(),
                complexity,
            },
            environment: AtomEnvironment::new(paths),
        });
    }
    Ok(scored)
}

pub(crate) fn summarize(scored: &[ScoredAtom]) -> Result<MolecularComplexity, ComplexityError> {
    if scored.is_empty() {
        return Err(ComplexityError::NoHeavyAtoms);
    }

    let values: Vec<f64> = scored.iter().map(|s| s.complexity.complexity).collect();
    let environments: Vec<AtomEnvironment> =
        scored.iter().map(|s| s.environment.clone()).collect();

    Ok(MolecularComplexity {
        cm: values.iter().sum(),
        cm_star: log2_sum_exp2(&values),
        cse: environment_entropy(&environments)?,
    })
}
