//! Shared fixtures for the aescrypt integration tests and benchmarks
//!
//! Known-answer vectors are kept here so the integration tests and the
//! benchmarks check against the same published values.

pub mod vectors;

/// Decode a hex string from a vector table
///
/// Vectors are compile-time constants, so malformed hex is a bug in this
/// crate and panics.
pub fn hex_bytes(hex_str: &str) -> Vec<u8> {
    match hex::decode(hex_str) {
        Ok(bytes) => bytes,
        Err(e) => panic!("malformed test vector {:?}: {}", hex_str, e),
    }
}
