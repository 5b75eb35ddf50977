/// Convenience result type used across deckplay.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy.
///
/// Only content assembly and interpolation setup can fail. Playback itself (navigation,
/// transitions, autoplay) is total and never produces a `DeckError`.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// Invalid user-provided deck or option data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed interpolation ranges.
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    /// Errors when serializing or deserializing deck descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

/// Structured reasons an interpolation range pair is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Input and output ranges differ in length.
    #[error("input range ({input}) and output range ({output}) must have the same length")]
    LengthMismatch {
        /// Number of input points.
        input: usize,
        /// Number of output points.
        output: usize,
    },

    /// Fewer than two points were supplied.
    #[error("ranges must have at least 2 values, got {len}")]
    TooFewPoints {
        /// Number of points supplied.
        len: usize,
    },

    /// `input[index]` is NaN or infinite.
    #[error("input range must be finite (NaN or infinity at index {index})")]
    NonFinite {
        /// First offending position.
        index: usize,
    },

    /// `input[index] < input[index - 1]`.
    #[error("input range must be non-decreasing (violated at index {index})")]
    NotMonotonic {
        /// First offending position.
        index: usize,
    },
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
