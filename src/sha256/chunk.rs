use super::BLOCK_LEN;
use crate::errors::{HashError, Result};

pub type Block = [u8; BLOCK_LEN];

/// Splits a padded buffer into consecutive 64-byte blocks, in order.
///
/// A buffer whose length is not a multiple of [`BLOCK_LEN`] is reported as an
/// [`HashError::InternalInvariant`]; nothing is truncated.
pub fn blocks(padded: &[u8]) -> Result<Vec<&Block>> {
    if padded.len() % BLOCK_LEN != 0 {
        return Err(HashError::InternalInvariant(format!(
            "padded length {} is not a multiple of {}",
            padded.len(),
            BLOCK_LEN
        )));
    }

    padded
        .chunks_exact(BLOCK_LEN)
        .map(|chunk| {
            <&Block>::try_from(chunk).map_err(|_| {
                HashError::InternalInvariant(format!("block of {} bytes", chunk.len()))
            })
        })
        .collect()
}
