//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridMdpError {
    /// Malformed constructor arguments.
    ///
    /// Raised for a grid smaller than `3 x 3` or when the observation and
    /// action spaces of an environment are not of the kinds a component expects.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An observation whose dimensionality disagrees with the observation space.
    #[error("Shape mismatch: expected {expected} dimensions, got {actual}")]
    ShapeMismatch {
        /// Number of dimensions of the observation space.
        expected: usize,

        /// Number of dimensions of the given observation.
        actual: usize,
    },

    /// A coordinate or a linear index outside of the state space.
    #[error("State out of range: {0}")]
    StateOutOfRange(String),

    /// No legal action keeps a positive probability and no fallback exists.
    #[error("Degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
