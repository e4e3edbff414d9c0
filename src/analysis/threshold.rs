// src/analysis/threshold.rs
//
// Minimum-frequency cut. Bounds are computed from the table only when it is
// non-empty; an empty table has no valid slider range at all.

use std::ops::RangeInclusive;

use super::frequency::{FrequencyEntry, FrequencyTable};

/// Valid `min_count` range for one table: `1..=max(count)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdBounds {
    pub min: u32,
    pub max: u32,
}

impl ThresholdBounds {
    /// `None` when the table is empty.
    pub fn for_table(table: &FrequencyTable) -> Option<Self> {
        table.max_count().map(|max| Self { min: 1, max: max.max(1) })
    }

    pub fn clamp(&self, requested: u32) -> u32 {
        requested.clamp(self.min, self.max)
    }

    pub fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Entries of a [`FrequencyTable`] with `count >= min_count`, order preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredTable {
    entries: Vec<FrequencyEntry>,
    min_count: u32,
}

impl FilteredTable {
    pub fn entries(&self) -> &[FrequencyEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn min_count(&self) -> u32 { self.min_count }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    /// `(token, count)` pairs, mostly for display and tests.
    pub fn pairs(&self) -> Vec<(&str, u32)> {
        self.entries.iter().map(|e| (e.token.as_str(), e.count)).collect()
    }
}

impl<'a> IntoIterator for &'a FilteredTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// Keep entries with `count >= min_count`. Total: works on empty tables and
/// on thresholds outside the bounds (the result is then simply empty or full).
pub fn filter(table: &FrequencyTable, min_count: u32) -> FilteredTable {
    // Table is sorted descending, so the survivors are a prefix.
    let keep = table.entries().partition_point(|e| e.count >= min_count);
    FilteredTable {
        entries: table.entries()[..keep].to_vec(),
        min_count,
    }
}
