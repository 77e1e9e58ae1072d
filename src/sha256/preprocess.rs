use std::cmp::Ordering;

use super::BLOCK_LEN;

const LENGTH_FIELD_LEN: usize = 8;
/// Offset inside the final block where the length field begins.
const LENGTH_FIELD_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;
const MARKER: u8 = 0x80;

/// A message after padding. The only constructor is [`pad`], so the length is
/// always a non-zero multiple of [`BLOCK_LEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage(Vec<u8>);

impl PaddedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for PaddedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Appends the `0x80` marker, zero fill up to the length field of the last
/// block, and the original length in bits as a big-endian `u64`.
pub fn pad(message: &[u8]) -> PaddedMessage {
    let bit_len = (message.len() as u64).wrapping_mul(8);
    let remainder = message.len() % BLOCK_LEN;

    let zeros = match remainder.cmp(&LENGTH_FIELD_OFFSET) {
        Ordering::Less => LENGTH_FIELD_OFFSET - 1 - remainder,
        // marker lands on the length field; spill into a fresh block
        Ordering::Equal => BLOCK_LEN - 1,
        Ordering::Greater => BLOCK_LEN - remainder + LENGTH_FIELD_OFFSET - 1,
    };

    let mut padded = Vec::with_capacity(message.len() + 1 + zeros + LENGTH_FIELD_LEN);
    padded.extend_from_slice(message);
    padded.push(MARKER);
    padded.resize(padded.len() + zeros, 0x00);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    PaddedMessage(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_length_is_block_multiple() {
        for len in 0..300 {
            let padded = pad(&vec![0xab; len]);
            assert_eq!(padded.as_bytes().len() % BLOCK_LEN, 0, "len {}", len);
            assert!(padded.as_bytes().len() >= len + 9, "len {}", len);
        }
    }

    #[test]
    fn test_pad_empty_message() {
        let padded = pad(b"");
        let bytes = padded.as_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[0], 0x80);
        assert!(bytes[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pad_abc_layout() {
        let padded = pad(b"abc");
        let bytes = padded.as_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..3], b"abc");
        assert_eq!(bytes[3], 0x80);
        assert!(bytes[4..56].iter().all(|&b| b == 0));
        assert_eq!(&bytes[56..], &24u64.to_be_bytes());
    }

    #[test]
    fn test_pad_remainder_55_fits_one_block() {
        let padded = pad(&[b'x'; 55]);
        assert_eq!(padded.as_bytes().len(), 64);
        assert_eq!(padded.as_bytes()[55], 0x80);
        assert_eq!(&padded.as_bytes()[56..], &440u64.to_be_bytes());
    }

    #[test]
    fn test_pad_remainder_56_spills_into_next_block() {
        let padded = pad(&[b'x'; 56]);
        let bytes = padded.as_bytes();
        assert_eq!(bytes.len(), 128);
        assert_eq!(bytes[56], 0x80);
        assert!(bytes[57..120].iter().all(|&b| b == 0));
        assert_eq!(&bytes[120..], &448u64.to_be_bytes());
    }

    #[test]
    fn test_pad_remainder_57_spills_into_next_block() {
        let padded = pad(&[b'x'; 57]);
        let bytes = padded.as_bytes();
        assert_eq!(bytes.len(), 128);
        assert_eq!(bytes[57], 0x80);
        assert!(bytes[58..120].iter().all(|&b| b == 0));
        assert_eq!(&bytes[120..], &456u64.to_be_bytes());
    }

    #[test]
    fn test_pad_exact_block_adds_full_block() {
        let padded = pad(&[0u8; 64]);
        assert_eq!(padded.as_bytes().len(), 128);
        assert_eq!(padded.as_bytes()[64], 0x80);
        assert_eq!(&padded.as_bytes()[120..], &512u64.to_be_bytes());
    }

    #[test]
    fn test_remainder_after_full_blocks() {
        // 2 full blocks + 56 bytes behaves like the 56-byte case
        let padded = pad(&[1u8; 184]);
        assert_eq!(padded.into_bytes().len(), 256);
    }
}
