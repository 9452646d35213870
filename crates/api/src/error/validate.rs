//! Validation helpers returning the unified [`Error`](super::Error)

use super::types::{Error, Result};

/// Validate ciphertext framing
///
/// Used for everything a decryptor can only find out from the data itself:
/// a trailing partial block, or a final byte that is not a valid pad length.
#[inline(always)]
pub fn ciphertext(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCiphertext {
            context,
            #[cfg(feature = "std")]
            message: reason.into(),
        });
    }
    #[cfg(not(feature = "std"))]
    let _ = reason;
    Ok(())
}
