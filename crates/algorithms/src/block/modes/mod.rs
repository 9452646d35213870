//! Block cipher modes of operation
//!
//! Only counter (CTR) mode is provided. The padded file transform in
//! `aescrypt-symmetric` applies the block cipher to each block on its own.

pub mod ctr;

// Re-exports
pub use ctr::{Counter, Ctr};
