//! Ranking configuration.

/// Direction of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankOrder {
    /// Highest score first.
    #[default]
    Descending,

    /// Lowest score first.
    Ascending,
}

/// Options for building a [`Ranking`](super::Ranking).
///
/// Ties always keep roster order.
///
/// # Examples
///
/// ```
/// use u_coinage::ranking::{RankOrder, RankingConfig};
///
/// let config = RankingConfig::default().with_threshold(60);
/// assert_eq!(config.order, RankOrder::Descending);
/// assert_eq!(config.threshold, Some(60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingConfig {
    /// Sort direction.
    pub order: RankOrder,

    /// Drop entries scoring below this value. `None` keeps everyone.
    pub threshold: Option<i64>,
}

impl RankingConfig {
    /// Sets the sort direction.
    pub fn with_order(mut self, order: RankOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the minimum score kept in the ranking.
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}
