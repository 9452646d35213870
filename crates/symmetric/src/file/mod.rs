//! Padded block encryption of streams and files
//!
//! [`FileCipher`] encrypts its input as a sequence of independent 16-byte
//! blocks. The final segment of the input is padded (see [`crate::padding`]),
//! so the output is always `(len / 16 + 1) * 16` bytes long. Decryption
//! reverses the transform and strips the padding from the last block only.
//!
//! Both directions read strictly forward, one block at a time, so pipes and
//! other non-seekable sources work as well as files.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use zeroize::Zeroize;

use algorithms::{Aes, BlockCipher, Iv, Nonce};
use params::utils::symmetric::{AES_BLOCK_SIZE, CTR_COUNTER_SIZE};

use crate::error::{validate, IoResultExt, Result, SymmetricResultExt};
use crate::mode::CipherMode;
use crate::padding::{pad, unpad};

pub mod compare;

pub use compare::{compare_files, compare_streams};

/// Fill `buf` from `reader`, stopping early only at end of input
///
/// Returns the number of bytes read; anything less than `buf.len()` means the
/// reader is exhausted.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// AES file cipher
///
/// Holds the expanded key for its whole lifetime. The mode, IV and nonce are
/// recorded but do not change the transform: every block is encrypted on its
/// own.
#[derive(Clone, Debug)]
pub struct FileCipher {
    cipher: Aes,
    mode: CipherMode,
    iv: Option<Iv>,
    nonce: Option<Nonce<CTR_COUNTER_SIZE>>,
}

impl FileCipher {
    /// Create a file cipher from a 16, 24 or 32-byte key
    pub fn new(key: &[u8], mode: CipherMode) -> Result<Self> {
        let cipher = Aes::new(key).map_primitive_err()?;
        if mode != CipherMode::Ecb {
            log::warn!(
                "{} mode requested for file encryption; blocks are still encrypted independently",
                mode
            );
        }
        Ok(Self {
            cipher,
            mode,
            iv: None,
            nonce: None,
        })
    }

    /// Attach a 16-byte IV to this cipher
    pub fn with_iv(mut self, iv: &[u8]) -> Result<Self> {
        self.iv = Some(Iv::from_slice(iv).map_primitive_err()?);
        Ok(self)
    }

    /// Attach a 16-byte initial counter value to this cipher
    pub fn with_nonce(mut self, nonce: &[u8]) -> Result<Self> {
        self.nonce = Some(Nonce::from_slice(nonce).map_primitive_err()?);
        Ok(self)
    }

    /// The mode this cipher was created with
    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// The IV attached with [`with_iv`](FileCipher::with_iv), if any
    pub fn iv(&self) -> Option<&Iv> {
        self.iv.as_ref()
    }

    /// The nonce attached with [`with_nonce`](FileCipher::with_nonce), if any
    pub fn nonce(&self) -> Option<&Nonce<CTR_COUNTER_SIZE>> {
        self.nonce.as_ref()
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &Aes {
        &self.cipher
    }

    /// Encrypt everything `reader` yields into `writer`
    ///
    /// Returns the number of ciphertext bytes written.
    pub fn encrypt_stream<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> Result<u64> {
        let mut block = [0u8; AES_BLOCK_SIZE];
        let mut written = 0u64;

        loop {
            let n = read_full(&mut reader, &mut block).io_context("read plaintext")?;

            if n < AES_BLOCK_SIZE {
                // Short read: this is the final segment
                let mut last = pad(&block[..n]);
                self.cipher.encrypt_block(&mut last).map_primitive_err()?;
                writer.write_all(&last).io_context("write ciphertext")?;
                written += last.len() as u64;
                last.zeroize();
                break;
            }

            self.cipher.encrypt_block(&mut block).map_primitive_err()?;
            writer.write_all(&block).io_context("write ciphertext")?;
            written += AES_BLOCK_SIZE as u64;
        }

        block.zeroize();
        writer.flush().io_context("flush ciphertext")?;
        Ok(written)
    }

    /// Decrypt everything `reader` yields into `writer`
    ///
    /// The last decrypted block is held back until end of input so the
    /// padding is stripped from it alone. Returns the number of plaintext
    /// bytes written. Empty input produces empty output.
    pub fn decrypt_stream<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> Result<u64> {
        let mut held: Option<[u8; AES_BLOCK_SIZE]> = None;
        let mut written = 0u64;

        loop {
            let mut block = [0u8; AES_BLOCK_SIZE];
            let n = read_full(&mut reader, &mut block).io_context("read ciphertext")?;
            if n == 0 {
                break;
            }
            validate::ciphertext(
                n == AES_BLOCK_SIZE,
                "decrypt stream",
                "ciphertext length is not a multiple of the block size",
            )?;

            self.cipher.decrypt_block(&mut block).map_primitive_err()?;

            if let Some(mut previous) = held.replace(block) {
                writer.write_all(&previous).io_context("write plaintext")?;
                written += AES_BLOCK_SIZE as u64;
                previous.zeroize();
            }
        }

        if let Some(mut last) = held {
            let result = unpad(&last).and_then(|plain| {
                writer.write_all(plain).io_context("write plaintext")?;
                Ok(plain.len() as u64)
            });
            last.zeroize();
            written += result?;
        }

        writer.flush().io_context("flush plaintext")?;
        Ok(written)
    }

    /// Encrypt the file at `input` into a new file at `output`
    pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<u64> {
        let (input, output) = (input.as_ref(), output.as_ref());
        log::debug!(
            "{} encrypting {} -> {}",
            self.cipher.name(),
            input.display(),
            output.display()
        );

        let reader = BufReader::new(File::open(input).io_context("open input file")?);
        let writer = BufWriter::new(File::create(output).io_context("create output file")?);
        let written = self.encrypt_stream(reader, writer)?;

        log::debug!("wrote {} ciphertext bytes to {}", written, output.display());
        Ok(written)
    }

    /// Decrypt the file at `input` into a new file at `output`
    pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<u64> {
        let (input, output) = (input.as_ref(), output.as_ref());
        log::debug!(
            "{} decrypting {} -> {}",
            self.cipher.name(),
            input.display(),
            output.display()
        );

        let reader = BufReader::new(File::open(input).io_context("open input file")?);
        let writer = BufWriter::new(File::create(output).io_context("create output file")?);
        let written = self.decrypt_stream(reader, writer)?;

        log::debug!("wrote {} plaintext bytes to {}", written, output.display());
        Ok(written)
    }
}
