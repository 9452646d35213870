//! Type-safe wrappers for key material and IVs

pub mod key;
pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

pub use key::{AesKeySize, MasterKey, ACCEPTED_KEY_SIZES};
pub use nonce::{AesCtrCompatible, Iv, Nonce};
