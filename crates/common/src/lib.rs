//! Common security containers for the aescrypt library
//!
//! Key material and round keys are held in the zeroizing containers defined
//! here so that they are wiped when the owning cipher is dropped.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::SecretVec;

// Re-export comparison and barrier utilities
pub use security::memory::{barrier, SecureCompare};
