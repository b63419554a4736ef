//! Error types for problem construction

/// Convenience alias for problem-construction results
pub type Result<T> = std::result::Result<T, ProblemError>;

/// Errors raised while composing problems
///
/// Evaluation itself never returns errors: calling a capability a problem
/// does not have, or passing buffers of the wrong size, is a programming
/// error and panics.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    /// Stacking requires both problems to share the search-space dimension
    #[error("cannot stack problems of dimension {first} and {second}")]
    DimensionMismatch { first: usize, second: usize },

    /// Both sides of a stack define the same bound with different values
    #[error("stacked problems disagree on their {which} bounds")]
    BoundsDisagree { which: &'static str },
}
