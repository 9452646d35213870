//! AES master key and key size classification

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use common::security::SecretVec;
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS,
};

use crate::error::{validate, Result};

/// Key sizes accepted by AES, in bytes
pub const ACCEPTED_KEY_SIZES: [usize; 3] = [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

/// The three AES variants, selected by master key length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesKeySize {
    /// 16-byte key, 10 rounds
    Aes128,
    /// 24-byte key, 12 rounds
    Aes192,
    /// 32-byte key, 14 rounds
    Aes256,
}

impl AesKeySize {
    /// Classify a key length, failing for anything other than 16, 24 or 32
    pub fn from_key_len(len: usize) -> Result<Self> {
        validate::key_size("AES", len, &ACCEPTED_KEY_SIZES)?;
        Ok(match len {
            AES128_KEY_SIZE => AesKeySize::Aes128,
            AES192_KEY_SIZE => AesKeySize::Aes192,
            _ => AesKeySize::Aes256,
        })
    }

    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            AesKeySize::Aes128 => AES128_KEY_SIZE,
            AesKeySize::Aes192 => AES192_KEY_SIZE,
            AesKeySize::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Number of cipher rounds
    pub const fn rounds(self) -> usize {
        match self {
            AesKeySize::Aes128 => AES128_ROUNDS,
            AesKeySize::Aes192 => AES192_ROUNDS,
            AesKeySize::Aes256 => AES256_ROUNDS,
        }
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            AesKeySize::Aes128 => "AES-128",
            AesKeySize::Aes192 => "AES-192",
            AesKeySize::Aes256 => "AES-256",
        }
    }
}

impl fmt::Display for AesKeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw AES key material, 16, 24 or 32 bytes
///
/// The bytes are wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    data: SecretVec,
    #[zeroize(skip)]
    size: AesKeySize,
}

impl MasterKey {
    /// Wrap key bytes after checking their length
    pub fn new(key: &[u8]) -> Result<Self> {
        let size = AesKeySize::from_key_len(key.len())?;
        Ok(Self {
            data: SecretVec::from_slice(key),
            size,
        })
    }

    /// The AES variant selected by this key
    pub fn size(&self) -> AesKeySize {
        self.size
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a master key is never empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl AsRef<[u8]> for MasterKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MasterKey({}, [REDACTED])", self.size)
    }
}
