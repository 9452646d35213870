//! AES block cipher primitives
//!
//! This crate implements the Advanced Encryption Standard (FIPS 197) for
//! 128, 192 and 256-bit keys together with the counter (CTR) mode built on
//! top of it. The library is usable in both `std` and `no_std + alloc`
//! environments.
//!
//! # Layout
//!
//! - [`block::aes`]: constant tables, GF(2⁸) arithmetic, the state matrix,
//!   the key schedule and the [`Aes`] cipher itself
//! - [`block::modes::ctr`]: the [`Ctr`] driver and its big-endian [`Counter`]
//! - [`types`]: the master key and IV wrappers
//!
//! Table lookups are not constant-time; this crate makes no side-channel
//! resistance claims.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::aes::{Aes, KeySchedule, State};
pub use block::modes::ctr::{Counter, Ctr};
pub use block::BlockCipher;

// Type system
pub mod types;
pub use types::{AesKeySize, Iv, MasterKey, Nonce};

// Re-export security types from aescrypt-common
pub use common::security::{barrier, SecretBuffer};
