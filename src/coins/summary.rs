//! Summary statistics and filtering over penny/nickel combinations.

use super::types::Combination;

/// Aggregate statistics over a combination set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinationSummary {
    /// Number of combinations summarized.
    pub count: usize,
    /// Largest penny count.
    pub max_pennies: u64,
    /// Smallest penny count.
    pub min_pennies: u64,
    /// Largest nickel count.
    pub max_nickels: u64,
    /// Smallest nickel count.
    pub min_nickels: u64,
    /// Mean penny count.
    pub mean_pennies: f64,
    /// Mean nickel count.
    pub mean_nickels: f64,
}

impl CombinationSummary {
    /// Summarizes `combinations`. Returns `None` for an empty slice.
    pub fn from_combinations(combinations: &[Combination]) -> Option<Self> {
        let first = combinations.first()?;
        let mut summary = Self {
            count: combinations.len(),
            max_pennies: first.pennies,
            min_pennies: first.pennies,
            max_nickels: first.nickels,
            min_nickels: first.nickels,
            mean_pennies: 0.0,
            mean_nickels: 0.0,
        };

        let mut penny_sum = 0.0;
        let mut nickel_sum = 0.0;
        for c in combinations {
            summary.max_pennies = summary.max_pennies.max(c.pennies);
            summary.min_pennies = summary.min_pennies.min(c.pennies);
            summary.max_nickels = summary.max_nickels.max(c.nickels);
            summary.min_nickels = summary.min_nickels.min(c.nickels);
            penny_sum += c.pennies as f64;
            nickel_sum += c.nickels as f64;
        }

        let n = combinations.len() as f64;
        summary.mean_pennies = penny_sum / n;
        summary.mean_nickels = nickel_sum / n;
        Some(summary)
    }
}

/// Keeps the combinations that use at most `max_nickels` nickels,
/// preserving order.
pub fn filter_max_nickels(combinations: &[Combination], max_nickels: u64) -> Vec<Combination> {
    combinations
        .iter()
        .filter(|c| c.nickels <= max_nickels)
        .copied()
        .collect()
}
