//! Validation utilities for cipher primitives

use super::{Error, Result};

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

/// Validate that a key has one of the sizes accepted by `algorithm`
#[inline(always)]
pub fn key_size(algorithm: &'static str, actual: usize, accepted: &[usize]) -> Result<()> {
    if !accepted.contains(&actual) {
        return Err(Error::KeySize { algorithm, actual });
    }
    Ok(())
}
