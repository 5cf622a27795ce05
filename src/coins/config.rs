//! Enumerator configuration.

use super::types::{Denominations, NICKEL, PENNY};
use crate::error::{Error, Result};

/// Which enumeration algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Closed form for two denominations, backtracking otherwise.
    #[default]
    Auto,

    /// Direct iteration over the larger coin's count. Requires exactly two
    /// denominations.
    ClosedForm,

    /// Recursive search over any denomination set.
    Backtracking,
}

/// Configuration for a coin enumeration run.
///
/// # Examples
///
/// ```
/// use u_coinage::coins::{EnumeratorConfig, Strategy};
///
/// let config = EnumeratorConfig::default()
///     .with_denominations(vec![1, 5, 10, 25])
///     .with_strategy(Strategy::Backtracking)
///     .with_max_decompositions(10_000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_decompositions, Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumeratorConfig {
    /// Coin values in cents. Order does not matter.
    pub denominations: Vec<u64>,

    /// Algorithm selection.
    pub strategy: Strategy,

    /// Upper bound on the number of decompositions a run may produce.
    ///
    /// `None` disables the cap (the default). Exceeding the cap aborts the
    /// run with [`Error::LimitExceeded`].
    pub max_decompositions: Option<usize>,

    /// Fan the backtracking search out over rayon's thread pool.
    ///
    /// Has no effect unless the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            denominations: vec![PENNY, NICKEL],
            strategy: Strategy::Auto,
            max_decompositions: None,
            parallel: false,
        }
    }
}

impl EnumeratorConfig {
    /// Sets the denomination set.
    pub fn with_denominations(mut self, coins: Vec<u64>) -> Self {
        self.denominations = coins;
        self
    }

    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Caps the number of decompositions.
    pub fn with_max_decompositions(mut self, limit: usize) -> Self {
        self.max_decompositions = Some(limit);
        self
    }

    /// Enables or disables parallel backtracking.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration and returns the normalized denominations.
    pub fn denominations(&self) -> Result<Denominations> {
        self.validate()?;
        Denominations::new(&self.denominations)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let coins = Denominations::new(&self.denominations)?;
        if self.strategy == Strategy::ClosedForm && coins.len() != 2 {
            return Err(Error::InvalidArgument(format!(
                "closed form needs exactly 2 denominations, got {}",
                coins.len()
            )));
        }
        if self.max_decompositions == Some(0) {
            return Err(Error::invalid("max_decompositions must be positive"));
        }
        Ok(())
    }

    /// Resolves [`Strategy::Auto`] against the denomination count.
    pub fn resolved_strategy(&self) -> Strategy {
        match self.strategy {
            Strategy::Auto if self.denominations.len() == 2 => Strategy::ClosedForm,
            Strategy::Auto => Strategy::Backtracking,
            s => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnumeratorConfig::default();
        assert_eq!(config.denominations, vec![1, 5]);
        assert_eq!(config.strategy, Strategy::Auto);
        assert!(config.max_decompositions.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EnumeratorConfig::default()
            .with_denominations(vec![10, 1])
            .with_strategy(Strategy::ClosedForm)
            .with_max_decompositions(50)
            .with_parallel(true);
        assert_eq!(config.denominations, vec![10, 1]);
        assert_eq!(config.strategy, Strategy::ClosedForm);
        assert_eq!(config.max_decompositions, Some(50));
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_closed_form_cardinality() {
        let config = EnumeratorConfig::default()
            .with_denominations(vec![1, 5, 10])
            .with_strategy(Strategy::ClosedForm);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_limit() {
        let config = EnumeratorConfig::default().with_max_decompositions(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_denomination() {
        let config = EnumeratorConfig::default().with_denominations(vec![0, 5]);
        assert!(config.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_auto_resolution() {
        let two = EnumeratorConfig::default();
        assert_eq!(two.resolved_strategy(), Strategy::ClosedForm);

        let four = EnumeratorConfig::default().with_denominations(vec![1, 5, 10, 25]);
        assert_eq!(four.resolved_strategy(), Strategy::Backtracking);

        let forced = EnumeratorConfig::default().with_strategy(Strategy::Backtracking);
        assert_eq!(forced.resolved_strategy(), Strategy::Backtracking);
    }
}
