//! Guards that turn a failed check into the matching KEM error

use super::{Error, Result};

/// Fail decapsulation with `details` unless `condition` holds
pub fn decapsulation(condition: bool, algorithm: &'static str, details: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Decapsulation { algorithm, details })
    }
}

/// Reject a malformed key encoding
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidKey { key_type, reason })
    }
}

/// Reject a buffer of the wrong shape for a byte-level API
pub fn serialization(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Serialization { context, details })
    }
}
