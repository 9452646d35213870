//! Block padding for the file transform
//!
//! The final segment is extended by `n = 16 - len % 16` bytes, each holding
//! the value `n`. Aligned input therefore gains a whole block of `0x10`.

use params::utils::symmetric::AES_BLOCK_SIZE;

use crate::error::{validate, Error, Result};

/// Number of padding bytes [`pad`] appends to `len` bytes of data
#[inline]
pub fn pad_len(len: usize) -> usize {
    AES_BLOCK_SIZE - len % AES_BLOCK_SIZE
}

/// Append padding, returning a buffer whose length is a non-zero multiple of 16
pub fn pad(data: &[u8]) -> Vec<u8> {
    let n = pad_len(data.len());
    let mut out = Vec::with_capacity(data.len() + n);
    out.extend_from_slice(data);
    out.resize(data.len() + n, n as u8);
    out
}

/// Strip padding, trusting the final byte as the pad length
///
/// Only the final byte is inspected; the other pad bytes are not checked.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let pad = match data.last() {
        Some(&byte) => byte as usize,
        None => {
            return Err(Error::InvalidCiphertext {
                context: "unpad",
                message: "no data to unpad".into(),
            })
        }
    };

    validate::ciphertext(
        (1..=AES_BLOCK_SIZE).contains(&pad),
        "unpad",
        "pad value outside 1..=16",
    )?;
    validate::ciphertext(pad <= data.len(), "unpad", "pad longer than data")?;

    Ok(&data[..data.len() - pad])
}
