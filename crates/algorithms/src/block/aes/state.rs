//! The AES state: one 16-byte block viewed as a 4x4 byte matrix
//!
//! Bytes are laid out column-major exactly as in FIPS 197: input bytes 0-3
//! form column 0, bytes 4-7 column 1, and so on. `columns[c][r]` is the byte
//! in row `r` of column `c`.

use zeroize::Zeroize;

use params::utils::symmetric::AES_BLOCK_SIZE;

use super::gf::xtime;
use super::tables::{INV_SBOX, SBOX};
use crate::error::{validate, Result};

/// 4x4 byte matrix holding one block between round transforms
#[derive(Clone, Copy, PartialEq, Eq, Default, Zeroize)]
pub struct State {
    columns: [[u8; 4]; 4],
}

impl State {
    /// Build a state from exactly 16 bytes
    pub fn from_block(block: &[u8]) -> Result<Self> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut columns = [[0u8; 4]; 4];
        for (column, chunk) in columns.iter_mut().zip(block.chunks_exact(4)) {
            column.copy_from_slice(chunk);
        }
        Ok(Self { columns })
    }

    /// Build a state from a fixed-size block
    pub fn from_bytes(bytes: &[u8; AES_BLOCK_SIZE]) -> Self {
        let mut columns = [[0u8; 4]; 4];
        for (column, chunk) in columns.iter_mut().zip(bytes.chunks_exact(4)) {
            column.copy_from_slice(chunk);
        }
        Self { columns }
    }

    /// Build a state from four 4-byte words, one per column
    pub fn from_columns(columns: [[u8; 4]; 4]) -> Self {
        Self { columns }
    }

    /// Serialize back to bytes, column by column
    pub fn to_bytes(&self) -> [u8; AES_BLOCK_SIZE] {
        let mut out = [0u8; AES_BLOCK_SIZE];
        self.write_to(&mut out);
        out
    }

    /// Write the 16 state bytes into `out`, which must be 16 bytes long
    fn write_to(&self, out: &mut [u8]) {
        for (chunk, column) in out.chunks_exact_mut(4).zip(self.columns.iter()) {
            chunk.copy_from_slice(column);
        }
    }

    /// Copy the state into a caller-provided block buffer
    pub fn store(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        self.write_to(block);
        Ok(())
    }

    /// The four columns of the matrix
    pub fn columns(&self) -> &[[u8; 4]; 4] {
        &self.columns
    }

    /// AddRoundKey: XOR every byte with the matching round key byte
    pub fn add_round_key(&mut self, round_key: &State) {
        for (column, key_column) in self.columns.iter_mut().zip(round_key.columns.iter()) {
            for (byte, key_byte) in column.iter_mut().zip(key_column.iter()) {
                *byte ^= key_byte;
            }
        }
    }

    /// SubBytes step
    pub fn sub_bytes(&mut self) {
        for byte in self.columns.iter_mut().flatten() {
            *byte = SBOX[*byte as usize];
        }
    }

    /// Inverse SubBytes
    pub fn inv_sub_bytes(&mut self) {
        for byte in self.columns.iter_mut().flatten() {
            *byte = INV_SBOX[*byte as usize];
        }
    }

    /// ShiftRows step: row `r` rotates left by `r` columns
    pub fn shift_rows(&mut self) {
        let old = self.columns;
        for c in 0..4 {
            for r in 1..4 {
                self.columns[c][r] = old[(c + r) % 4][r];
            }
        }
    }

    /// Inverse ShiftRows: row `r` rotates right by `r` columns
    pub fn inv_shift_rows(&mut self) {
        let old = self.columns;
        for c in 0..4 {
            for r in 1..4 {
                self.columns[c][r] = old[(c + 4 - r) % 4][r];
            }
        }
    }

    /// MixColumns step
    pub fn mix_columns(&mut self) {
        for column in self.columns.iter_mut() {
            mix_single_column(column);
        }
    }

    /// Inverse MixColumns
    ///
    /// Multiplying each column by `{04}x² + {05}` first and then applying the
    /// forward transform yields the inverse MDS matrix.
    pub fn inv_mix_columns(&mut self) {
        for column in self.columns.iter_mut() {
            let u = xtime(xtime(column[0] ^ column[2]));
            let v = xtime(xtime(column[1] ^ column[3]));
            column[0] ^= u;
            column[1] ^= v;
            column[2] ^= u;
            column[3] ^= v;
        }
        self.mix_columns();
    }
}

/// Multiply one column by the fixed MDS polynomial `{03}x³ + {01}x² + {01}x + {02}`
#[inline(always)]
fn mix_single_column(a: &mut [u8; 4]) {
    let t = a[0] ^ a[1] ^ a[2] ^ a[3];
    let first = a[0];
    a[0] ^= t ^ xtime(a[0] ^ a[1]);
    a[1] ^= t ^ xtime(a[1] ^ a[2]);
    a[2] ^= t ^ xtime(a[2] ^ a[3]);
    a[3] ^= t ^ xtime(a[3] ^ first);
}

impl core::fmt::Debug for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "State(")?;
        for byte in self.columns.iter().flatten() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}
