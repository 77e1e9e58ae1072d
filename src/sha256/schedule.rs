use super::chunk::Block;
use super::{BLOCK_LEN, SCHEDULE_LEN};
use crate::errors::{HashError, Result};

pub type MessageSchedule = [u32; SCHEDULE_LEN];

fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expands one block into the 64-word message schedule.
pub fn schedule(block: &Block) -> MessageSchedule {
    let mut w = [0u32; SCHEDULE_LEN];

    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for i in 16..SCHEDULE_LEN {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    w
}

/// Like [`schedule`] but for an unchecked slice.
pub fn schedule_slice(bytes: &[u8]) -> Result<MessageSchedule> {
    let block = <&Block>::try_from(bytes).map_err(|_| {
        HashError::InternalInvariant(format!(
            "message block must be {} bytes, got {}",
            BLOCK_LEN,
            bytes.len()
        ))
    })?;
    Ok(schedule(block))
}
