//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for 128, 192 and 256-bit keys.
//!
//! The cipher is split into its algebraic parts:
//!
//! - [`tables`]: the S-box, its inverse and the round constants
//! - [`gf`]: doubling (`xtime`) and a reference multiply in GF(2⁸)
//! - [`state`]: the 4x4 state matrix and the round transforms
//! - [`key_schedule`]: expansion of the master key into round keys
//!
//! [`Aes`] ties them together. Key size is chosen at runtime from the length
//! of the key passed to [`Aes::new`].
//!
//! The S-box is a plain table lookup, so timing depends on secret data. Do
//! not use this implementation where cache-timing attacks are a concern.

use alloc::vec::Vec;
use zeroize::Zeroize;

use params::utils::symmetric::AES_BLOCK_SIZE;

use super::modes::ctr::Ctr;
use super::BlockCipher;
use crate::error::Result;
use crate::types::{AesKeySize, Iv, MasterKey};

pub mod gf;
pub mod key_schedule;
pub mod state;
pub mod tables;

pub use key_schedule::KeySchedule;
pub use state::State;

/// AES block cipher for 128, 192 or 256-bit keys
///
/// Holds only the expanded key schedule; every block operation works on a
/// fresh [`State`], so a single instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Creates a cipher from raw key bytes
    ///
    /// Fails unless `key` is exactly 16, 24 or 32 bytes long.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = MasterKey::new(key)?;
        Self::with_key(&key)
    }

    /// Creates a cipher from an already validated master key
    pub fn with_key(key: &MasterKey) -> Result<Self> {
        let schedule = KeySchedule::expand(key)?;
        log::debug!("initialized {} cipher ({} rounds)", key.size(), schedule.rounds());
        Ok(Self { schedule })
    }

    /// The AES variant in use
    pub fn key_size(&self) -> AesKeySize {
        self.schedule.key_size()
    }

    /// Number of rounds (10, 12 or 14)
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// The expanded round keys
    pub fn key_schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts one 16-byte block, returning the ciphertext block
    pub fn encrypt_block_copy(&self, plaintext: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        let mut state = State::from_block(plaintext)?;
        self.encrypt_state(&mut state);
        let out = state.to_bytes();
        state.zeroize();
        Ok(out)
    }

    /// Decrypts one 16-byte block, returning the plaintext block
    pub fn decrypt_block_copy(&self, ciphertext: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        let mut state = State::from_block(ciphertext)?;
        self.decrypt_state(&mut state);
        let out = state.to_bytes();
        state.zeroize();
        Ok(out)
    }

    /// Encrypts `plaintext` of any length in CTR mode starting from counter `iv`
    ///
    /// The output has the same length as the input. The same `(key, iv)` pair
    /// must never be used for two different messages.
    pub fn encrypt_ctr(&self, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = Iv::from_slice(iv)?;
        let mut ctr = Ctr::new(self, &iv)?;
        ctr.encrypt(plaintext)
    }

    /// Decrypts CTR-mode ciphertext; identical to [`encrypt_ctr`](Aes::encrypt_ctr)
    pub fn decrypt_ctr(&self, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let iv = Iv::from_slice(iv)?;
        let mut ctr = Ctr::new(self, &iv)?;
        ctr.decrypt(ciphertext)
    }

    fn encrypt_state(&self, state: &mut State) {
        let rounds = self.schedule.rounds();

        // Initial round
        state.add_round_key(self.schedule.round_key(0));

        // Main rounds
        for round in 1..rounds {
            state.sub_bytes();
            state.shift_rows();
            state.mix_columns();
            state.add_round_key(self.schedule.round_key(round));
        }

        // Final round has no MixColumns
        state.sub_bytes();
        state.shift_rows();
        state.add_round_key(self.schedule.round_key(rounds));
    }

    fn decrypt_state(&self, state: &mut State) {
        let rounds = self.schedule.rounds();

        state.add_round_key(self.schedule.round_key(rounds));
        state.inv_shift_rows();
        state.inv_sub_bytes();

        for round in (1..rounds).rev() {
            state.add_round_key(self.schedule.round_key(round));
            state.inv_mix_columns();
            state.inv_shift_rows();
            state.inv_sub_bytes();
        }

        state.add_round_key(self.schedule.round_key(0));
    }
}

impl BlockCipher for Aes {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let mut state = State::from_block(block)?;
        self.encrypt_state(&mut state);
        state.store(block)?;
        state.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let mut state = State::from_block(block)?;
        self.decrypt_state(&mut state);
        state.store(block)?;
        state.zeroize();
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.key_size().name()
    }
}
