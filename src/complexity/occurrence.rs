use std::collections::HashMap;
use std::hash::Hash;

use crate::complexity::error::ComplexityError;

/// Share of `items` taken by each distinct value, in order of first
/// appearance. The fractions sum to 1.
pub fn fractional_occurrence<T: Hash + Eq>(items: &[T]) -> Result<Vec<(&T, f64)>, ComplexityError> {
    if items.is_empty() {
        return Err(ComplexityError::EmptySequence);
    }

    let mut slots: HashMap<&T, usize> = HashMap::new();
    let mut counts: Vec<(&T, usize)> = Vec::new();
    for item in items {
        let slot = *slots.entry(item).or_insert_with(|| {
            counts.push((item, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let total = items.len() as f64;
    Ok(counts
        .into_iter()
        .map(|(item, n)| (item, n as f64 / total))
        .collect())
}

/// Base-2 Shannon entropy of a distribution, `-Σ p·log2(p)`.
pub fn shannon_entropy<I: IntoIterator<Item = f64>>(fractions: I) -> f64 {
    -fractions
        .into_iter()
        .filter(|&p| p > 0.0)
        .map(|p| p * p.log2())
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn counts_in_first_appearance_order() {
        let items = ["b", "a", "b", "c", "b", "a"];
        let occ = fractional_occurrence(&items).unwrap();
        let keys: Vec<_> = occ.iter().map(|(k, _)| **k).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_relative_eq!(occ[0].1, 0.5);
        assert_relative_eq!(occ[1].1, 1.0 / 3.0);
        assert_relative_eq!(occ[2].1, 1.0 / 6.0);
    }

    #[test]
    fn single_value() {
        let occ = fractional_occurrence(&[7, 7, 7]).unwrap();
        assert_eq!(occ, vec![(&7, 1.0)]);
    }

    #[test]
    fn empty_is_an_error() {
        let empty: [u8; 0] = [];
        assert_eq!(
            fractional_occurrence(&empty),
            Err(ComplexityError::EmptySequence)
        );
    }

    #[test]
    fn entropy_of_uniform_distribution() {
        assert_relative_eq!(shannon_entropy([0.25; 4]), 2.0);
        assert_relative_eq!(shannon_entropy([0.5, 0.5]), 1.0);
    }

    #[test]
    fn entropy_of_certainty_is_zero() {
        assert_eq!(shannon_entropy([1.0]), 0.0);
        assert_eq!(shannon_entropy(std::iter::empty()), 0.0);
    }
}
