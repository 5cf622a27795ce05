//! Score ranking over student rosters.
//!
//! Two core lookups over parallel name/score sequences:
//!
//! - [`lowest_scoring`]: the first student holding the minimum score.
//! - [`rank_descending`]: names and scores reordered by descending score,
//!   keeping input order among equal scores.
//!
//! [`Ranking`] and [`RankingConfig`] add direction and a minimum-score
//! threshold for filtered views.

mod config;
mod engine;
mod types;

pub use config::{RankOrder, RankingConfig};
pub use engine::{lowest_scoring, rank_descending, rank_with, Ranking};
pub use types::{RankedEntry, Roster};
