//! Error types shared by the enumerator and ranking modules.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by u-coinage operations.
///
/// Every operation is pure, so an error is terminal for the call that
/// produced it: repeating the call with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input violated the operation's preconditions (negative amount,
    /// empty or mismatched roster, unusable denomination set).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The generalized enumerator produced more decompositions than the
    /// configured cap allows.
    #[error("enumeration exceeded the limit of {limit} decompositions")]
    LimitExceeded {
        /// The configured `max_decompositions`.
        limit: usize,
    },
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Returns `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
