//! Coin combination enumeration.
//!
//! Lists every way to form an amount of cents from a set of coin
//! denominations. Two interchangeable strategies sit behind the
//! [`CoinEnumerator`] trait:
//!
//! - **Closed form** ([`ClosedForm`]): exactly two denominations. The count
//!   of the larger coin determines the whole decomposition, so enumeration
//!   is a single pass. For pennies and nickels this yields `amount / 5 + 1`
//!   combinations.
//! - **Backtracking** ([`Backtracking`]): any denomination set. Recursively
//!   tries each usable count of the largest remaining coin.
//!
//! [`Strategy::Auto`] picks between them by denomination count.
//!
//! The penny/nickel case also has a direct entry point,
//! [`enumerate_combinations`], returning plain [`Combination`] pairs.

mod config;
mod enumerator;
mod summary;
mod types;

pub use config::{EnumeratorConfig, Strategy};
pub use enumerator::{
    enumerate_combinations, enumerate_combinations_with, Backtracking, ClosedForm,
    CoinEnumerator, EnumeratorRunner,
};
pub use summary::{filter_max_nickels, CombinationSummary};
pub use types::{
    CoinCount, Combination, Decomposition, Denominations, Enumeration, NICKEL, PENNY,
};
