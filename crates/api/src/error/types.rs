//! Error type definitions for cryptographic operations

use thiserror::Error;

/// Primary error type for cryptographic operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    #[error("Invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
