//! Per-query aggregation of classified results into counts and percentages.

use crate::classify::{ClassifiedResult, ControlType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counts and rounded percentages per control category for one query.
///
/// Percentages are rounded independently per category (`f64::round`, half
/// away from zero), so they need not sum to exactly 100. That matches the
/// rendered report's behavior and is deliberately not renormalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub counts: HashMap<ControlType, usize>,
    pub percentages: HashMap<ControlType, u32>,
}

impl CategoryBreakdown {
    /// Tally the classified results for one query. Every category appears in
    /// both maps, zero-filled when absent from the results.
    pub fn from_results(results: &[ClassifiedResult]) -> Self {
        let mut counts: HashMap<ControlType, usize> =
            ControlType::ALL.iter().map(|c| (*c, 0)).collect();
        for result in results {
            *counts.entry(result.control_type).or_insert(0) += 1;
        }

        // max(len, 1) guards the empty-results division; all counts are
        // zero in that case so every percentage is still 0.
        let total = results.len().max(1) as f64;
        let percentages = counts
            .iter()
            .map(|(category, count)| (*category, (*count as f64 / total * 100.0).round() as u32))
            .collect();

        Self { counts, percentages }
    }

    pub fn count(&self, category: ControlType) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn percentage(&self, category: ControlType) -> u32 {
        self.percentages.get(&category).copied().unwrap_or(0)
    }

    /// Total results tallied across all categories.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
