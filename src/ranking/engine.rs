//! Lowest-score lookup and stable score ranking.

use super::config::{RankOrder, RankingConfig};
use super::types::{check_parallel, RankedEntry, Roster};
use crate::error::Result;
use tracing::debug;

/// Index of the first minimum in a non-empty slice.
fn first_min_index(scores: &[i64]) -> Option<usize> {
    // `min_by_key` returns the first of several equal minima.
    scores
        .iter()
        .enumerate()
        .min_by_key(|&(_, s)| *s)
        .map(|(i, _)| i)
}

/// Indices into `scores` in rank order.
///
/// Uses a stable sort, so entries with equal scores keep their relative
/// input order in either direction.
fn sort_indices(scores: &[i64], order: RankOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    match order {
        RankOrder::Descending => indices.sort_by(|&a, &b| scores[b].cmp(&scores[a])),
        RankOrder::Ascending => indices.sort_by(|&a, &b| scores[a].cmp(&scores[b])),
    }
    indices
}

/// Returns the name of the lowest scorer.
///
/// When several students share the minimum score, the one appearing first
/// wins.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when the
/// sequences are empty or differ in length.
///
/// # Examples
///
/// ```
/// use u_coinage::ranking::lowest_scoring;
///
/// assert_eq!(lowest_scoring(&["A", "B", "C"], &[90, 40, 40]).unwrap(), "B");
/// ```
pub fn lowest_scoring<'a, S: AsRef<str>>(names: &'a [S], scores: &[i64]) -> Result<&'a str> {
    check_parallel(names.len(), scores.len())?;
    let idx = first_min_index(scores).unwrap_or_default();
    Ok(names[idx].as_ref())
}

/// Reorders names and scores by descending score.
///
/// The sort is stable: students with equal scores keep their input order.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when the
/// sequences are empty or differ in length.
///
/// # Examples
///
/// ```
/// use u_coinage::ranking::rank_descending;
///
/// let (names, scores) = rank_descending(&["A", "B", "C"], &[70, 90, 70]).unwrap();
/// assert_eq!(names, vec!["B", "A", "C"]);
/// assert_eq!(scores, vec![90, 70, 70]);
/// ```
pub fn rank_descending<S: AsRef<str>>(
    names: &[S],
    scores: &[i64],
) -> Result<(Vec<String>, Vec<i64>)> {
    check_parallel(names.len(), scores.len())?;
    let order = sort_indices(scores, RankOrder::Descending);
    let ranked_names = order.iter().map(|&i| names[i].as_ref().to_string()).collect();
    let ranked_scores = order.iter().map(|&i| scores[i]).collect();
    Ok((ranked_names, ranked_scores))
}

/// A ranked view over a roster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    /// Entries in rank order.
    pub entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Ranks `roster` according to `config`.
    pub fn build(roster: &Roster, config: &RankingConfig) -> Self {
        let entries: Vec<RankedEntry> = sort_indices(roster.scores(), config.order)
            .into_iter()
            .map(|i| RankedEntry {
                name: roster.names()[i].clone(),
                score: roster.scores()[i],
                original_index: i,
            })
            .filter(|e| config.threshold.map_or(true, |t| e.score >= t))
            .collect();
        debug!(
            students = roster.len(),
            kept = entries.len(),
            threshold = ?config.threshold,
            "ranking built"
        );
        Self { entries }
    }

    /// Keeps entries scoring at least `threshold`, preserving rank order.
    pub fn at_or_above(&self, threshold: i64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| e.score >= threshold)
                .cloned()
                .collect(),
        }
    }

    /// Names in rank order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Scores in rank order.
    pub fn scores(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    /// Splits into parallel name and score sequences.
    pub fn into_parts(self) -> (Vec<String>, Vec<i64>) {
        self.entries.into_iter().map(|e| (e.name, e.score)).unzip()
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the threshold filtered everyone out.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Roster {
    /// Name of the first student with the lowest score.
    pub fn lowest_scoring(&self) -> &str {
        let idx = first_min_index(self.scores()).unwrap_or_default();
        &self.names()[idx]
    }

    /// Ranks this roster.
    pub fn rank(&self, config: &RankingConfig) -> Ranking {
        Ranking::build(self, config)
    }
}

/// Ranks parallel names and scores with `config`.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when the
/// sequences are empty or differ in length.
pub fn rank_with<S: AsRef<str>>(
    names: &[S],
    scores: &[i64],
    config: &RankingConfig,
) -> Result<Ranking> {
    let roster = Roster::new(
        names.iter().map(|n| n.as_ref().to_string()).collect(),
        scores.to_vec(),
    )?;
    Ok(roster.rank(config))
}
