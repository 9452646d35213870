//! Chunked byte-for-byte comparison of files and streams

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use params::utils::symmetric::COMPARE_CHUNK_SIZE;

use super::read_full;
use crate::error::{IoResultExt, Result};

/// Compare two readers chunk by chunk
///
/// Returns `false` at the first differing chunk, and `true` only when both
/// readers run out at the same point with every chunk equal. Two empty
/// readers are equal.
pub fn compare_streams<A: Read, B: Read>(mut a: A, mut b: B) -> Result<bool> {
    let mut chunk_a = [0u8; COMPARE_CHUNK_SIZE];
    let mut chunk_b = [0u8; COMPARE_CHUNK_SIZE];

    loop {
        let n_a = read_full(&mut a, &mut chunk_a).io_context("read first input")?;
        let n_b = read_full(&mut b, &mut chunk_b).io_context("read second input")?;

        if chunk_a[..n_a] != chunk_b[..n_b] {
            return Ok(false);
        }
        if n_a == 0 {
            return Ok(true);
        }
    }
}

/// Compare the contents of two files
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> Result<bool> {
    let file_a = File::open(a.as_ref()).io_context("open first file")?;
    let file_b = File::open(b.as_ref()).io_context("open second file")?;

    let equal = compare_streams(BufReader::new(file_a), BufReader::new(file_b))?;
    log::debug!(
        "{} and {} are {}",
        a.as_ref().display(),
        b.as_ref().display(),
        if equal { "identical" } else { "different" }
    );
    Ok(equal)
}
