//! Enumeration strategies and the run entry point.

use super::config::{EnumeratorConfig, Strategy};
use super::types::{CoinCount, Combination, Decomposition, Denominations, Enumeration, NICKEL};
use crate::error::{Error, Result};
use tracing::{debug, trace, warn};

/// An algorithm that lists every decomposition of an amount.
///
/// Implementations must emit decompositions ascending by count of the
/// largest coin, then of the next coin, and so on, so that strategies are
/// interchangeable.
pub trait CoinEnumerator: Send + Sync {
    /// Returns the name of this strategy.
    fn name(&self) -> &str;

    /// Lists every decomposition of `amount` over `coins`.
    fn enumerate(&self, amount: u64, coins: &Denominations) -> Result<Vec<Decomposition>>;
}

/// Converts a caller-supplied amount, rejecting negatives.
pub(crate) fn checked_amount(amount: i64) -> Result<u64> {
    u64::try_from(amount)
        .map_err(|_| Error::InvalidArgument(format!("amount must be non-negative, got {amount}")))
}

/// Pushes `d`, failing once `limit` decompositions are already held.
fn push_capped(out: &mut Vec<Decomposition>, d: Decomposition, limit: Option<usize>) -> Result<()> {
    if let Some(limit) = limit {
        if out.len() >= limit {
            warn!(limit, "decomposition cap reached");
            return Err(Error::LimitExceeded { limit });
        }
    }
    out.push(d);
    Ok(())
}

/// Closed-form enumeration over exactly two denominations.
///
/// With two coins, the count of the larger coin fixes the whole
/// decomposition, so no search is needed: each candidate count is kept when
/// the remainder is a multiple of the smaller coin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedForm {
    /// Optional cap on the number of decompositions.
    pub max_decompositions: Option<usize>,
}

impl CoinEnumerator for ClosedForm {
    fn name(&self) -> &str {
        "closed-form"
    }

    fn enumerate(&self, amount: u64, coins: &Denominations) -> Result<Vec<Decomposition>> {
        let &[large, small] = coins.as_slice() else {
            return Err(Error::InvalidArgument(format!(
                "closed form needs exactly 2 denominations, got {}",
                coins.len()
            )));
        };

        let mut out = Vec::new();
        for k in 0..=amount / large {
            let rest = amount - k * large;
            if rest % small != 0 {
                continue;
            }
            let d = Decomposition {
                counts: vec![
                    CoinCount {
                        coin: large,
                        count: k,
                    },
                    CoinCount {
                        coin: small,
                        count: rest / small,
                    },
                ],
            };
            push_capped(&mut out, d, self.max_decompositions)?;
        }
        Ok(out)
    }
}

/// Backtracking enumeration over any denomination set.
///
/// Tries every usable count of the largest remaining coin, then recurses on
/// the smaller coins. The last coin only accepts an exact remainder, so
/// branches that cannot close are dropped without descending further.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracking {
    /// Optional cap on the number of decompositions.
    pub max_decompositions: Option<usize>,
    /// Split first-level branches across rayon's pool.
    pub parallel: bool,
}

impl Backtracking {
    fn search(
        &self,
        remaining: u64,
        coins: &[u64],
        current: &mut Vec<CoinCount>,
        out: &mut Vec<Decomposition>,
    ) -> Result<()> {
        let Some((&coin, rest)) = coins.split_first() else {
            return Ok(());
        };

        if rest.is_empty() {
            if remaining % coin == 0 {
                current.push(CoinCount {
                    coin,
                    count: remaining / coin,
                });
                trace!(?current, "decomposition found");
                let d = Decomposition {
                    counts: current.clone(),
                };
                current.pop();
                push_capped(out, d, self.max_decompositions)?;
            }
            return Ok(());
        }

        for count in 0..=remaining / coin {
            current.push(CoinCount { coin, count });
            let result = self.search(remaining - count * coin, rest, current, out);
            current.pop();
            result?;
        }
        Ok(())
    }

    /// Runs the search for one count of the largest coin.
    #[cfg(feature = "parallel")]
    fn branch(&self, amount: u64, coins: &[u64], count: u64) -> Result<Vec<Decomposition>> {
        let (&coin, rest) = coins
            .split_first()
            .ok_or_else(|| Error::invalid("denomination set must not be empty"))?;
        let mut out = Vec::new();
        let mut current = vec![CoinCount { coin, count }];
        if rest.is_empty() {
            if amount == count * coin {
                push_capped(&mut out, Decomposition { counts: current }, self.max_decompositions)?;
            }
        } else {
            self.search(amount - count * coin, rest, &mut current, &mut out)?;
        }
        Ok(out)
    }

    #[cfg(feature = "parallel")]
    fn enumerate_parallel(&self, amount: u64, coins: &[u64]) -> Result<Vec<Vec<Decomposition>>> {
        use rayon::prelude::*;

        let top = coins[0];
        (0..=amount / top)
            .into_par_iter()
            .map(|count| self.branch(amount, coins, count))
            .collect()
    }
}

impl CoinEnumerator for Backtracking {
    fn name(&self) -> &str {
        "backtracking"
    }

    fn enumerate(&self, amount: u64, coins: &Denominations) -> Result<Vec<Decomposition>> {
        let coins = coins.as_slice();
        let Some(&top) = coins.first() else {
            return Err(Error::invalid("denomination set must not be empty"));
        };

        #[cfg(feature = "parallel")]
        if self.parallel {
            let branches = self.enumerate_parallel(amount, coins)?;
            let mut out = Vec::with_capacity(branches.iter().map(Vec::len).sum());
            for d in branches.into_iter().flatten() {
                push_capped(&mut out, d, self.max_decompositions)?;
            }
            return Ok(out);
        }

        let mut out = Vec::new();
        let mut current = Vec::with_capacity(coins.len());
        if coins.len() == 1 {
            if amount % top == 0 {
                let d = Decomposition {
                    counts: vec![CoinCount {
                        coin: top,
                        count: amount / top,
                    }],
                };
                push_capped(&mut out, d, self.max_decompositions)?;
            }
            return Ok(out);
        }
        self.search(amount, coins, &mut current, &mut out)?;
        Ok(out)
    }
}

/// Lists every way to form `amount` cents from pennies and nickels.
///
/// Returns the number of combinations together with the combinations
/// themselves, ascending by nickel count. The count is always
/// `amount / 5 + 1`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `amount` is negative.
///
/// # Examples
///
/// ```
/// use u_coinage::coins::{enumerate_combinations, Combination};
///
/// let (count, combos) = enumerate_combinations(10).unwrap();
/// assert_eq!(count, 3);
/// assert_eq!(
///     combos,
///     vec![Combination::new(10, 0), Combination::new(5, 1), Combination::new(0, 2)]
/// );
/// ```
pub fn enumerate_combinations(amount: i64) -> Result<(usize, Vec<Combination>)> {
    let amount = checked_amount(amount)?;
    let combinations: Vec<Combination> = (0..=amount / NICKEL)
        .map(|nickels| Combination::new(amount - NICKEL * nickels, nickels))
        .collect();
    debug!(amount, count = combinations.len(), "enumerated penny/nickel combinations");
    Ok((combinations.len(), combinations))
}

/// Executes a configured enumeration.
pub struct EnumeratorRunner;

impl EnumeratorRunner {
    /// Runs the strategy selected by `config` over its denomination set.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a negative amount or an invalid config;
    /// [`Error::LimitExceeded`] when the decomposition cap is hit.
    pub fn run(amount: i64, config: &EnumeratorConfig) -> Result<Enumeration> {
        let amount = checked_amount(amount)?;
        let coins = config.denominations()?;
        let strategy = config.resolved_strategy();
        debug!(amount, coins = ?coins.as_slice(), ?strategy, "starting enumeration");

        let enumerator: Box<dyn CoinEnumerator> = match strategy {
            Strategy::ClosedForm => Box::new(ClosedForm {
                max_decompositions: config.max_decompositions,
            }),
            Strategy::Backtracking | Strategy::Auto => Box::new(Backtracking {
                max_decompositions: config.max_decompositions,
                parallel: config.parallel,
            }),
        };

        Self::run_with(amount, &coins, enumerator.as_ref())
    }

    /// Runs a caller-supplied strategy.
    pub fn run_with(
        amount: u64,
        coins: &Denominations,
        enumerator: &dyn CoinEnumerator,
    ) -> Result<Enumeration> {
        let decompositions = enumerator.enumerate(amount, coins)?;
        debug!(
            amount,
            strategy = enumerator.name(),
            count = decompositions.len(),
            "enumeration finished"
        );
        Ok(Enumeration {
            amount,
            denominations: coins.as_slice().to_vec(),
            strategy: enumerator.name().to_string(),
            decompositions,
        })
    }
}

/// Enumerates `amount` with the strategy and denominations in `config`.
///
/// Convenience wrapper over [`EnumeratorRunner::run`].
pub fn enumerate_combinations_with(amount: i64, config: &EnumeratorConfig) -> Result<Enumeration> {
    EnumeratorRunner::run(amount, config)
}
