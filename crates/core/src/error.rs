//! Identifier error model.

use thiserror::Error;

/// Result type used by identifier operations.
pub type KeyResult<T> = Result<T, KeyError>;

/// Errors produced while populating or decoding a [`crate::UuidKey`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The generator failed to produce or marshal a new identifier.
    ///
    /// Fatal to the insert that triggered the hook; never retried here.
    #[error("failed to generate identifier: {0}")]
    Generation(String),

    /// The field does not hold exactly 16 bytes (never generated, or truncated).
    #[error("UUID has not been created")]
    NoIdentifier,

    /// The stored (or supplied) value could not be interpreted as a UUID.
    #[error("invalid identifier: {0}")]
    Decode(String),
}

impl KeyError {
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Whether the error only means "not persisted yet".
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NoIdentifier)
    }
}
