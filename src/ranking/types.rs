//! Roster and ranking entry types.

use crate::error::{Error, Result};

/// Checks the shared precondition of every ranking operation.
pub(crate) fn check_parallel(names: usize, scores: usize) -> Result<()> {
    if names != scores {
        return Err(Error::InvalidArgument(format!(
            "names and scores differ in length ({names} vs {scores})"
        )));
    }
    if names == 0 {
        return Err(Error::invalid("roster must not be empty"));
    }
    Ok(())
}

/// Parallel student names and scores.
///
/// Index `i` of `names` belongs to index `i` of `scores`. Names and scores
/// need not be unique. A `Roster` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    names: Vec<String>,
    scores: Vec<i64>,
}

impl Roster {
    /// Builds a roster from parallel sequences.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when the lengths differ or both are empty.
    pub fn new(names: Vec<String>, scores: Vec<i64>) -> Result<Self> {
        check_parallel(names.len(), scores.len())?;
        Ok(Self { names, scores })
    }

    /// Builds a roster from `(name, score)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let (names, scores): (Vec<String>, Vec<i64>) =
            pairs.into_iter().map(|(n, s)| (n.into(), s)).unzip();
        Self::new(names, scores)
    }

    /// Student names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Student scores.
    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: rosters are validated non-empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(name, score)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }
}

/// One student's position in a ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    /// Student name.
    pub name: String,
    /// Student score.
    pub score: i64,
    /// Position of the student in the input roster.
    pub original_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_new() {
        let roster = Roster::new(vec!["A".into(), "B".into()], vec![10, 20]).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.names(), &["A".to_string(), "B".to_string()]);
        assert_eq!(roster.scores(), &[10, 20]);
        assert_eq!(roster.iter().collect::<Vec<_>>(), vec![("A", 10), ("B", 20)]);
    }

    #[test]
    fn test_roster_mismatched() {
        let err = Roster::new(vec!["A".into()], vec![1, 2]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_roster_empty() {
        let err = Roster::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("roster must not be empty".into()));
    }

    #[test]
    fn test_roster_from_pairs() {
        let roster = Roster::from_pairs([("Ana", 88), ("Bo", 72)]).unwrap();
        assert_eq!(roster.scores(), &[88, 72]);
        assert!(Roster::from_pairs(Vec::<(&str, i64)>::new()).is_err());
    }
}
