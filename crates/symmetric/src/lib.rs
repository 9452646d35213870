//! File and stream encryption for the aescrypt library
//!
//! This crate builds the user-facing file transform on top of the AES block
//! cipher in `aescrypt-algorithms`:
//!
//! - [`padding`]: block padding and its removal
//! - [`file`]: [`FileCipher`] for readers, writers and paths, plus
//!   [`compare_files`]
//! - [`mode`]: the [`CipherMode`] selector
//!
//! All failures are reported through the unified API error.
//!
//! ```no_run
//! use aescrypt_symmetric::{compare_files, CipherMode, FileCipher};
//!
//! # fn main() -> aescrypt_symmetric::Result<()> {
//! let cipher = FileCipher::new(&[0u8; 32], CipherMode::Ecb)?;
//! cipher.encrypt_file("notes.txt", "notes.enc")?;
//! cipher.decrypt_file("notes.enc", "notes.dec")?;
//! assert!(compare_files("notes.txt", "notes.dec")?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod file;
pub mod mode;
pub mod padding;

// Re-export main types for convenience
pub use file::{compare_files, compare_streams, FileCipher};
pub use mode::CipherMode;
pub use padding::{pad, unpad};

// Re-export the API error system instead of custom error types
pub use api::error::{Error, Result};

// Re-export commonly used validation and error handling utilities
pub use error::{IoResultExt, SymmetricResultExt};
pub use api::error::{validate, ResultExt};
