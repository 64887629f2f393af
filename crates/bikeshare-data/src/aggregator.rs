//! Frequency counting over trip columns.
//!
//! Ties between equally frequent values always go to the smallest value in
//! the key's natural order, so every "most common" answer is deterministic.

use std::collections::BTreeMap;

/// Count occurrences of each distinct value.
///
/// Returns `(value, count)` pairs sorted by count descending; values with the
/// same count stay in ascending key order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    // BTreeMap yields keys ascending; the stable sort below keeps that order
    // among equal counts.
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut ordered: Vec<(K, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered
}

/// The most frequent value and how many times it occurs.
///
/// Returns `None` when `values` is empty.
pub fn mode<K, I>(values: I) -> Option<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── value_counts ──────────────────────────────────────────────────────────

    #[test]
    fn test_value_counts_orders_by_count() {
        let counts = value_counts([
            "Customer",
            "Subscriber",
            "Subscriber",
            "Dependent",
            "Subscriber",
            "Customer",
        ]);
        assert_eq!(
            counts,
            vec![("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_value_counts_ties_in_key_order() {
        let counts = value_counts(["b", "a", "c", "a", "b"]);
        assert_eq!(counts, vec![("a", 2), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_value_counts_empty() {
        let counts = value_counts(Vec::<u32>::new());
        assert!(counts.is_empty());
    }

    // ── mode ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_mode_single_winner() {
        assert_eq!(mode([17u32, 8, 17, 9, 17, 8]), Some((17, 3)));
    }

    #[test]
    fn test_mode_tie_goes_to_smallest() {
        assert_eq!(mode([18u32, 7, 18, 7]), Some((7, 2)));
        assert_eq!(mode(["saturday", "friday"]), Some(("friday", 1)));
    }

    #[test]
    fn test_mode_on_pairs() {
        let pairs = [("A", "B"), ("B", "A"), ("A", "B"), ("B", "A"), ("A", "C")];
        assert_eq!(mode(pairs), Some((("A", "B"), 2)));
    }

    #[test]
    fn test_mode_empty_is_none() {
        assert_eq!(mode(Vec::<&str>::new()), None);
    }
}
