//! Coin combination data types.

use crate::error::{Error, Result};

/// Value of a penny, in cents.
pub const PENNY: u64 = 1;

/// Value of a nickel, in cents.
pub const NICKEL: u64 = 5;

/// One way to form an amount from pennies and nickels.
///
/// Invariant: `pennies + 5 * nickels` equals the amount it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    /// Number of pennies.
    pub pennies: u64,
    /// Number of nickels.
    pub nickels: u64,
}

impl Combination {
    /// Creates a combination.
    pub fn new(pennies: u64, nickels: u64) -> Self {
        Self { pennies, nickels }
    }

    /// Total value in cents.
    pub fn value(&self) -> u64 {
        self.pennies + NICKEL * self.nickels
    }
}

impl From<(u64, u64)> for Combination {
    fn from((pennies, nickels): (u64, u64)) -> Self {
        Self { pennies, nickels }
    }
}

/// How many of a single coin a decomposition uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoinCount {
    /// Coin value in cents.
    pub coin: u64,
    /// Number of coins of this value.
    pub count: u64,
}

/// A complete decomposition of an amount over a denomination set.
///
/// Holds exactly one [`CoinCount`] per denomination, ordered by coin
/// value descending (unused coins appear with a count of zero).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition {
    /// Per-coin counts, largest coin first.
    pub counts: Vec<CoinCount>,
}

impl Decomposition {
    /// Total value in cents.
    pub fn value(&self) -> u64 {
        self.counts.iter().map(|c| c.coin * c.count).sum()
    }

    /// Total number of coins used.
    pub fn coin_total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Returns the count for `coin`, or `None` if the coin is not part of
    /// this decomposition's denomination set.
    pub fn count_of(&self, coin: u64) -> Option<u64> {
        self.counts.iter().find(|c| c.coin == coin).map(|c| c.count)
    }
}

impl TryFrom<&Decomposition> for Combination {
    type Error = Error;

    /// Converts a decomposition over exactly `{5, 1}` into a penny/nickel pair.
    fn try_from(d: &Decomposition) -> Result<Self> {
        match d.counts.as_slice() {
            [CoinCount {
                coin: NICKEL,
                count: nickels,
            }, CoinCount {
                coin: PENNY,
                count: pennies,
            }] => Ok(Combination::new(*pennies, *nickels)),
            _ => Err(Error::invalid(
                "decomposition is not over pennies and nickels",
            )),
        }
    }
}

/// A validated coin denomination set.
///
/// Non-empty, strictly positive and free of duplicates. Stored in
/// descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Denominations {
    coins: Vec<u64>,
}

impl Denominations {
    /// Validates and sorts a denomination set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `coins` is empty, contains a zero
    /// value, or lists the same value twice.
    pub fn new(coins: &[u64]) -> Result<Self> {
        if coins.is_empty() {
            return Err(Error::invalid("denomination set must not be empty"));
        }
        if coins.contains(&0) {
            return Err(Error::invalid("denominations must be positive"));
        }
        let mut sorted = coins.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::InvalidArgument(format!(
                "duplicate denomination {}",
                w[0]
            )));
        }
        Ok(Self { coins: sorted })
    }

    /// The penny/nickel set `{5, 1}`.
    pub fn pennies_and_nickels() -> Self {
        Self {
            coins: vec![NICKEL, PENNY],
        }
    }

    /// Coin values, largest first.
    pub fn as_slice(&self) -> &[u64] {
        &self.coins
    }

    /// Number of denominations.
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

/// Output of a configured enumeration run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enumeration {
    /// The decomposed amount, in cents.
    pub amount: u64,
    /// Denominations used, largest first.
    pub denominations: Vec<u64>,
    /// Name of the strategy that produced the result.
    pub strategy: String,
    /// Every decomposition, ascending by count of the largest coin.
    pub decompositions: Vec<Decomposition>,
}

impl Enumeration {
    /// Number of decompositions found.
    pub fn count(&self) -> usize {
        self.decompositions.len()
    }

    /// Converts the decompositions into penny/nickel pairs.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the denomination set is not `{1, 5}`.
    pub fn to_combinations(&self) -> Result<Vec<Combination>> {
        self.decompositions
            .iter()
            .map(Combination::try_from)
            .collect()
    }
}
