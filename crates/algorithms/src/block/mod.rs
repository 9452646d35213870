//! Block cipher trait, the AES implementation and its modes of operation

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::Aes;
pub use modes::Ctr;

/// A keyed block cipher operating in place on single blocks
///
/// Implementations reject buffers whose length differs from
/// [`block_size`](BlockCipher::block_size) instead of truncating or padding.
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Encrypt exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Human-readable algorithm name, e.g. `"AES-256"`
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }
}

impl<B: BlockCipher> BlockCipher for &B {
    const BLOCK_SIZE: usize = B::BLOCK_SIZE;

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).decrypt_block(block)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
