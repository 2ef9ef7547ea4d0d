//! Error types for splitting and combining secrets

use thiserror::Error;

/// Why a set of split parameters was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("threshold must be at least 2 (got {0})")]
    ThresholdTooSmall(usize),

    #[error("threshold cannot exceed 255 (got {0})")]
    ThresholdTooLarge(usize),

    #[error("parts must be at least 2 (got {0})")]
    TooFewParts(usize),

    #[error("parts cannot exceed 255 (got {0})")]
    TooManyParts(usize),

    #[error("threshold {threshold} cannot exceed parts {parts}")]
    ThresholdExceedsParts { threshold: usize, parts: usize },
}

/// Errors reported by the split/combine engine
///
/// Every precondition failure is reported before any randomness is drawn
/// or any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    #[error("cannot split an empty secret")]
    EmptySecret,

    #[error("at least 2 shares are required to combine (got {0})")]
    InsufficientShares(usize),

    #[error("all shares must be the same length: expected {expected} bytes, share #{index} has {actual}")]
    MismatchedShareLength {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("malformed share #{index}: {reason}")]
    MalformedShare { index: usize, reason: MalformedReason },

    #[error("duplicate share coordinate {coordinate} (share #{index})")]
    DuplicateShare { index: usize, coordinate: u8 },

    /// Field arithmetic was asked to invert zero
    #[error("zero has no multiplicative inverse in GF(2^8)")]
    Domain,

    #[error("random source failed: {0}")]
    Randomness(String),

    #[error("random source produced no usable value after {draws} draws")]
    RandomnessExhausted { draws: usize },
}

/// Structural defects that make a share unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("share is {0} bytes, need at least 2 (payload and coordinate)")]
    TooShort(usize),

    #[error("coordinate 0 is reserved for the secret")]
    ZeroCoordinate,
}

pub type Result<T, E = ShamirError> = std::result::Result<T, E>;
