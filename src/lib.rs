//! # aescrypt
//!
//! A software-only AES engine: the FIPS 197 block cipher for 128, 192 and
//! 256-bit keys, counter (CTR) mode, and padded file encryption built on the
//! block primitive.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! aescrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, `std::error::Error` impls
//! - `symmetric` (default): file and stream encryption
//! - `serde`: serialization of [`CipherMode`](symmetric::CipherMode)
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`aescrypt-api`]: error type and validation helpers
//! - [`aescrypt-params`]: key sizes, block size and round counts
//! - [`aescrypt-common`]: zeroizing containers and memory barriers
//! - [`aescrypt-algorithms`]: AES, its key schedule and CTR mode
//! - [`aescrypt-symmetric`]: padded file encryption and file comparison
//!
//! ## Example
//!
//! ```
//! use aescrypt::prelude::*;
//!
//! # fn main() -> aescrypt::api::Result<()> {
//! let key = [0x2bu8; 16];
//! let iv = [0u8; 16];
//!
//! let cipher = Aes::new(&key)?;
//! let ciphertext = cipher.encrypt_ctr(b"attack at dawn", &iv)?;
//! assert_eq!(cipher.decrypt_ctr(&ciphertext, &iv)?, b"attack at dawn");
//! # Ok(())
//! # }
//! ```
//!
//! [`aescrypt-api`]: api
//! [`aescrypt-params`]: params
//! [`aescrypt-common`]: common
//! [`aescrypt-algorithms`]: algorithms
//! [`aescrypt-symmetric`]: symmetric

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use aescrypt_algorithms as algorithms;
pub use aescrypt_api as api;
pub use aescrypt_common as common;
pub use aescrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use aescrypt_symmetric as symmetric;

/// Common imports for aescrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export the cipher and its building blocks
    pub use crate::algorithms::{
        Aes,
        AesKeySize,
        BlockCipher,
        Counter,
        Ctr,
        Iv,
        MasterKey,
    };

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec, SecureCompare};

    // File encryption
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{compare_files, CipherMode, FileCipher, IoResultExt, SymmetricResultExt};
}
