//! Constant values for aescrypt cryptographic operations
//!
//! This crate provides the fixed sizes and counts shared across the aescrypt
//! workspace. It has no dependencies and is always `no_std`.

#![no_std]

pub mod utils;
