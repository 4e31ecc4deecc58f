use crate::model::SUMMARY_KEYS;
use std::collections::BTreeMap;

/// Synthetic bucket collecting entries below the inclusion threshold.
pub const OTHER_LABEL: &str = "other";

/// Declared rendering shape for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Proportional-share layout (pie); suits small category counts
    Proportional,
    /// Ranked-magnitude horizontal layout (bars); suits larger counts
    RankedMagnitude,
}

/// A label→value mapping ready for rendering. Entries iterate in ascending
/// label order with `other` last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    entries: Vec<(String, u64)>,
}

impl ChartSeries {
    /// Bucket entries below `minimum` into a trailing `other` entry,
    /// appended only when its sum is non-zero. Rollup keys (`total`,
    /// `past_year`) are stripped first; their absence is not an error.
    /// The value sum is preserved across bucketing.
    pub fn build(raw: &BTreeMap<String, u64>, minimum: u64) -> Self {
        let mut entries = Vec::new();
        let mut other = 0u64;

        for (label, value) in raw {
            if SUMMARY_KEYS.contains(&label.as_str()) {
                continue;
            }
            if *value < minimum {
                other += value;
            } else {
                entries.push((label.clone(), *value));
            }
        }
        if other != 0 {
            entries.push((OTHER_LABEL.to_string(), other));
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, value)| value).sum()
    }

    /// Entries sorted descending by value, for ranked layouts.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}
