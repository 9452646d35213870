//! AES key expansion (FIPS 197, section 5.2)

use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use params::utils::symmetric::{AES256_KEY_SIZE, AES_STATE_COLUMNS, AES_WORD_SIZE};

use super::state::State;
use super::tables::{RCON, SBOX};
use crate::error::{Error, Result};
use crate::types::{AesKeySize, MasterKey};

type Word = [u8; 4];

/// Rotates a word left by one byte
#[inline(always)]
fn rot_word(word: Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: Word) -> Word {
    [
        SBOX[word[0] as usize],
        SBOX[word[1] as usize],
        SBOX[word[2] as usize],
        SBOX[word[3] as usize],
    ]
}

#[inline(always)]
fn xor_words(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expanded round keys, `rounds + 1` of them, in the order they are applied
/// during encryption
///
/// Immutable after construction and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: Vec<State>,
    #[zeroize(skip)]
    size: AesKeySize,
}

impl KeySchedule {
    /// Expand raw key bytes; fails unless the key is 16, 24 or 32 bytes long
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = MasterKey::new(key)?;
        Self::expand(&key)
    }

    /// Expand a validated master key
    pub fn expand(key: &MasterKey) -> Result<Self> {
        let size = key.size();
        let key_bytes = key.as_bytes();
        let rounds = size.rounds();
        let iteration_size = key_bytes.len() / AES_WORD_SIZE;
        let total_words = AES_STATE_COLUMNS * (rounds + 1);

        let mut words: Vec<Word> = Vec::with_capacity(total_words);
        for chunk in key_bytes.chunks_exact(AES_WORD_SIZE) {
            words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        let mut rcon_index = 1;
        while words.len() < total_words {
            let index = words.len();
            let mut word = words[index - 1];

            if index % iteration_size == 0 {
                word = sub_word(rot_word(word));
                word[0] ^= *RCON.get(rcon_index).ok_or(Error::Processing {
                    operation: "AES key expansion",
                    details: "round constant table exhausted",
                })?;
                rcon_index += 1;
            } else if key_bytes.len() == AES256_KEY_SIZE && index % iteration_size == 4 {
                word = sub_word(word);
            }

            let base = words[index - iteration_size];
            words.push(xor_words(word, base));
        }

        let round_keys = words
            .chunks_exact(AES_STATE_COLUMNS)
            .map(|chunk| State::from_columns([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        words.zeroize();

        Ok(Self { round_keys, size })
    }

    /// The AES variant this schedule was expanded for
    pub fn key_size(&self) -> AesKeySize {
        self.size
    }

    /// Number of cipher rounds
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Number of round keys (`rounds + 1`)
    pub fn len(&self) -> usize {
        self.round_keys.len()
    }

    /// Always false for a constructed schedule
    pub fn is_empty(&self) -> bool {
        self.round_keys.is_empty()
    }

    /// Round key `round`, or `None` past the last round
    pub fn get(&self, round: usize) -> Option<&State> {
        self.round_keys.get(round)
    }

    /// Iterate round keys in encryption order
    pub fn iter(&self) -> core::slice::Iter<'_, State> {
        self.round_keys.iter()
    }

    /// Round key `round`; callers only pass indices in `0..=rounds`
    #[inline(always)]
    pub(crate) fn round_key(&self, round: usize) -> &State {
        &self.round_keys[round]
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeySchedule({}, {} round keys, [REDACTED])", self.size, self.round_keys.len())
    }
}
