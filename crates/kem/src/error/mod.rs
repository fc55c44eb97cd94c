//! Error handling for KEM operations

use alloc::format;
use alloc::string::ToString;
use bike_algorithms::error::Error as PrimitiveError;
use bike_api::error::Error as CoreError;
use thiserror::Error;

/// Error type for KEM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure inside a primitive (PRF, hash, ring arithmetic, sampling)
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// The caller's RNG could not supply a seed
    #[error("Random generation error for {algorithm}: {details}")]
    RandomGeneration {
        /// Algorithm name
        algorithm: &'static str,
        /// Which seed was being drawn
        details: &'static str,
    },

    /// Decapsulation failed on a structural error (never on a decoding failure)
    #[error("Decapsulation error for {algorithm}: {details}")]
    Decapsulation {
        /// Algorithm name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Invalid key format
    #[error("Invalid {key_type} key: {reason}")]
    InvalidKey {
        /// Which key
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext format
    #[error("Invalid {algorithm} ciphertext: {reason}")]
    InvalidCiphertext {
        /// Algorithm name
        algorithm: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error in {context}: {details}")]
    Serialization {
        /// Where the error occurred
        context: &'static str,
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::RandomGeneration { algorithm, details } => CoreError::RandomGenerationError {
                context: algorithm,
                message: details.to_string(),
            },
            Error::Decapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("decapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
