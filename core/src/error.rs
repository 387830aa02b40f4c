use sharedsecret_math::MathError;
use thiserror::Error;

/// Result type specialized for sharing operations.
pub type Result<T> = std::result::Result<T, SharingError>;

/// Errors that can arise while splitting, recovering or decoding shares.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SharingError {
    #[error(
        "Invalid threshold configuration: threshold {threshold} must be between 1 and the share count {shares}"
    )]
    InvalidThreshold { threshold: usize, shares: usize },
    #[error("Secret does not fit in the field")]
    SecretOutOfRange,
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("Malformed share: {0}")]
    MalformedInput(#[from] ShareParseError),
}

impl SharingError {
    /// Whether the caller passed parameters that can never succeed.
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            Self::InvalidThreshold { .. } | Self::SecretOutOfRange => true,
            Self::Math(err) => err.is_invalid_parameter(),
            Self::MalformedInput(_) => false,
        }
    }
}

/// Errors raised while decoding the `"{x},{y}"` text form of a share.
#[non_exhaustive]
#[derive(Debug, Clone, Error)]
pub enum ShareParseError {
    #[error("expected two comma-separated parts, found {0}")]
    FieldCount(usize),
    #[error("x coordinate {0:?} is not a decimal integer")]
    InvalidX(String),
    #[error("y coordinate {0:?} is not a decimal integer")]
    InvalidY(String),
}
