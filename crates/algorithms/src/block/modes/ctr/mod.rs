//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the data. The
//! whole 16-byte counter block is treated as one big-endian 128-bit integer
//! that starts at the caller's IV and wraps silently from all-ones to zero.
//!
//! Only the forward cipher is ever used, so decryption is the same operation
//! as encryption.

use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use common::security::{barrier, SecretBuffer};
use params::utils::symmetric::CTR_COUNTER_SIZE;

use super::super::BlockCipher;
use crate::error::{validate, Result};
use crate::types::nonce::{AesCtrCompatible, Nonce};

/// 128-bit big-endian counter block
#[derive(Clone, Copy, PartialEq, Eq, Default, Zeroize)]
pub struct Counter([u8; CTR_COUNTER_SIZE]);

impl Counter {
    /// Start counting from `block`
    pub fn new(block: [u8; CTR_COUNTER_SIZE]) -> Self {
        Self(block)
    }

    /// Current counter block
    pub fn as_bytes(&self) -> &[u8; CTR_COUNTER_SIZE] {
        &self.0
    }

    /// Counter value as an integer
    pub fn value(&self) -> u128 {
        BigEndian::read_u128(&self.0)
    }

    /// Add one, carrying from the last byte towards the first; all-0xFF wraps
    /// to all-zero
    pub fn increment(&mut self) {
        let next = self.value().wrapping_add(1);
        BigEndian::write_u128(&mut self.0, next);
    }
}

impl core::fmt::Debug for Counter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Counter({:032x})", self.value())
    }
}

/// Counter mode driver over any block cipher with 16-byte blocks
///
/// The driver keeps the unused tail of the last keystream block, so data may
/// be fed in pieces of any size and the result equals a single call over the
/// concatenation.
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    counter: Counter,
    keystream: SecretBuffer<CTR_COUNTER_SIZE>,
    keystream_pos: usize,
}

impl<B: BlockCipher> Ctr<B> {
    /// Creates a CTR driver whose first keystream block is `E(nonce)`
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: AesCtrCompatible,
    {
        validate::length("CTR block cipher", B::block_size(), CTR_COUNTER_SIZE)?;

        let mut block = [0u8; CTR_COUNTER_SIZE];
        block.copy_from_slice(nonce.as_ref());

        Ok(Self {
            cipher,
            counter: Counter::new(block),
            keystream: SecretBuffer::zeroed(),
            // Nothing buffered yet
            keystream_pos: CTR_COUNTER_SIZE,
        })
    }

    /// The counter value that will produce the next keystream block
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Encrypt the current counter into the keystream buffer and advance it
    fn generate_keystream(&mut self) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        self.keystream.as_mut_slice().copy_from_slice(self.counter.as_bytes());
        self.cipher.encrypt_block(self.keystream.as_mut_slice())?;
        log::trace!("{} keystream block for counter {:?}", self.cipher.name(), self.counter);
        self.counter.increment();
        self.keystream_pos = 0;

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// XOR `data` with the keystream in place (encrypt or decrypt)
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        let mut offset = 0;
        while offset < data.len() {
            if self.keystream_pos >= CTR_COUNTER_SIZE {
                self.generate_keystream()?;
            }

            let take = (CTR_COUNTER_SIZE - self.keystream_pos).min(data.len() - offset);
            let keystream = &self.keystream.as_slice()[self.keystream_pos..self.keystream_pos + take];
            for (byte, key) in data[offset..offset + take].iter_mut().zip(keystream) {
                *byte ^= key;
            }

            self.keystream_pos += take;
            offset += take;
        }
        Ok(())
    }

    /// Encrypts a message, returning ciphertext of the same length
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.process(&mut out)?;
        Ok(out)
    }

    /// Decrypts a message; identical to [`encrypt`](Ctr::encrypt)
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt(ciphertext)
    }

    /// Write raw keystream into `output`
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.zeroize();
        self.process(output)
    }
}
