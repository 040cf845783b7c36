use crate::Entry;
use std::collections::BTreeSet;

/// Test vector statistics.
///
/// Helps relating a size difference to the structure of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Number of values, duplicates included.
    pub nb_values: usize,
    /// Number of distinct values (cardinality of the resulting bitmap).
    pub nb_distinct: usize,
    /// Number of distinct 32-bit buckets (upper halves).
    pub nb_buckets: usize,
    /// Whether the values are strictly increasing.
    pub is_sorted: bool,

    /// The minimal value, `None` if the vector is empty.
    pub min_value: Option<u64>,
    /// The maximal value, `None` if the vector is empty.
    pub max_value: Option<u64>,
}

impl Stats {
    /// Computes the statistics of a test vector.
    pub fn of(values: &[u64]) -> Self {
        let distinct = values.iter().copied().collect::<BTreeSet<_>>();
        let buckets = distinct
            .iter()
            .map(|&value| Entry::from(value).bucket)
            .collect::<BTreeSet<_>>();

        Self {
            nb_values: values.len(),
            nb_distinct: distinct.len(),
            nb_buckets: buckets.len(),
            is_sorted: values.windows(2).all(|pair| pair[0] < pair[1]),

            min_value: distinct.first().copied(),
            max_value: distinct.last().copied(),
        }
    }
}
