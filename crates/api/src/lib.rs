//! Public API types for the aescrypt library
//!
//! This crate provides the error surface shared by every aescrypt crate: the
//! unified [`Error`] type, the [`Result`] alias, validation helpers and the
//! extension traits used to attach context to failures.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use error::{validate, ResultExt};
