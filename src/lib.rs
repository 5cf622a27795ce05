//! Coin combination enumeration and score ranking.
//!
//! Pure, stateless building blocks for two small dashboards:
//!
//! - **Coins**: every way to form an amount of cents from pennies and
//!   nickels, with a generalized backtracking strategy for arbitrary
//!   denomination sets, plus summary statistics and filtering.
//! - **Ranking**: the lowest scorer in a roster and a stable,
//!   descending-score ranking with optional threshold filtering.
//!
//! # Architecture
//!
//! Rendering, charting and input widgets belong to the caller. This crate
//! takes every input as an explicit parameter and returns newly built
//! values; nothing is shared between calls. The optional `wasm` feature
//! exposes the operations to a JavaScript front end.

pub mod coins;
pub mod error;
pub mod ranking;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use coins::{enumerate_combinations, Combination};
pub use error::{Error, Result};
pub use ranking::{lowest_scoring, rank_descending, Roster};
