//! JavaScript bindings for the dashboard front end.
//!
//! Every export takes plain JS values, runs the matching library operation,
//! and returns a serialized result. Library errors surface as a thrown JS
//! `Error` carrying the [`Error`](crate::Error) display message.

use crate::coins::{self, Combination, CombinationSummary};
use crate::ranking::{self, RankingConfig};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct WaysOutput {
    count: usize,
    combinations: Vec<Combination>,
    summary: Option<CombinationSummary>,
}

#[derive(Serialize)]
struct SortedOutput {
    names: Vec<String>,
    scores: Vec<i64>,
}

#[derive(Deserialize)]
struct RosterInput {
    names: Vec<String>,
    scores: Vec<i64>,
}

/// Enumerates penny/nickel combinations for `amount` cents.
///
/// Returns `{ count, combinations: [{ pennies, nickels }], summary }`.
#[wasm_bindgen]
pub fn ways(amount: i32) -> Result<JsValue, JsError> {
    let (count, combinations) = coins::enumerate_combinations(i64::from(amount))?;
    let summary = CombinationSummary::from_combinations(&combinations);
    Ok(serde_wasm_bindgen::to_value(&WaysOutput {
        count,
        combinations,
        summary,
    })?)
}

/// Returns the name of the first lowest scorer in `{ names, scores }`.
#[wasm_bindgen(js_name = lowestScore)]
pub fn lowest_score(roster: JsValue) -> Result<String, JsError> {
    let input: RosterInput = serde_wasm_bindgen::from_value(roster)?;
    Ok(ranking::lowest_scoring(&input.names, &input.scores)?.to_string())
}

/// Sorts `{ names, scores }` by descending score, keeping ties in order.
#[wasm_bindgen(js_name = sortNames)]
pub fn sort_names(roster: JsValue) -> Result<JsValue, JsError> {
    let input: RosterInput = serde_wasm_bindgen::from_value(roster)?;
    let (names, scores) = ranking::rank_descending(&input.names, &input.scores)?;
    Ok(serde_wasm_bindgen::to_value(&SortedOutput { names, scores })?)
}

/// Ranks `{ names, scores }` and keeps entries scoring at least `threshold`.
#[wasm_bindgen(js_name = rankedAbove)]
pub fn ranked_above(roster: JsValue, threshold: i32) -> Result<JsValue, JsError> {
    let input: RosterInput = serde_wasm_bindgen::from_value(roster)?;
    let config = RankingConfig::default().with_threshold(i64::from(threshold));
    let ranked = ranking::rank_with(&input.names, &input.scores, &config)?;
    Ok(serde_wasm_bindgen::to_value(&ranked)?)
}
