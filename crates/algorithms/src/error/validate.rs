//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a processing precondition
#[inline(always)]
pub fn processing(condition: bool, operation: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Processing { operation, details });
    }
    Ok(())
}
