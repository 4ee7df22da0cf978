//! Error type shared by the registry, input boundary, and run analysis.

/// Error type for strategy lookup, input parsing, and result analysis.
///
/// Strategy computation itself is total for any `u64` index, so none of
/// these variants originate inside `Strategy::compute`.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// User-supplied text could not be parsed into a valid index.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No strategy is registered under the requested name.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Two strategies disagreed on the value of the same index.
    #[error("result mismatch: {first} and {second} disagree on F({n})")]
    Mismatch {
        /// Name of the strategy whose value was taken as reference.
        first: String,
        /// Name of the disagreeing strategy.
        second: String,
        /// The index both strategies were asked for.
        n: u64,
    },

    /// A run set contained no results to analyze.
    #[error("no results to analyze")]
    NoResults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let err = FibError::InvalidInput("abc".into());
        assert_eq!(err.to_string(), "invalid input: abc");
    }

    #[test]
    fn display_unknown_strategy() {
        let err = FibError::UnknownStrategy("quantum".into());
        assert_eq!(err.to_string(), "unknown strategy: quantum");
    }

    #[test]
    fn display_mismatch() {
        let err = FibError::Mismatch {
            first: "Iterative".into(),
            second: "ClosedForm".into(),
            n: 600,
        };
        assert_eq!(
            err.to_string(),
            "result mismatch: Iterative and ClosedForm disagree on F(600)"
        );
    }
}
