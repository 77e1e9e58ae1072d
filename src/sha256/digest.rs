use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::DIGEST_LEN;
use super::compress::HashState;
use crate::errors::HashError;

/// A finished 32-byte SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    pub fn to_hex(&self, lowercase: bool) -> String {
        if lowercase {
            format!("{:x}", self)
        } else {
            format!("{:X}", self)
        }
    }
}

/// Serializes the final state word by word, most significant byte first.
pub fn assemble(state: &HashState) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    Digest(out)
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != DIGEST_LEN * 2 {
            return Err(HashError::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                DIGEST_LEN * 2,
                s.len()
            )));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HashError::InvalidDigest(format!("not hexadecimal: {}", s)));
        }

        let mut out = [0u8; DIGEST_LEN];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|e| HashError::InvalidDigest(e.to_string()))?;
        }
        Ok(Digest(out))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_HEX: &str = "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD";

    fn abc_state() -> HashState {
        [
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]
    }

    #[test]
    fn test_assemble_is_big_endian_in_state_order() {
        let digest = assemble(&[0x01020304, 0, 0, 0, 0, 0, 0, 0xa0b0c0d0]);
        let bytes = digest.as_bytes();
        assert_eq!(&bytes[..4], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[28..], &[0xa0, 0xb0, 0xc0, 0xd0]);
        assert!(bytes[4..28].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        let digest = assemble(&abc_state());
        assert_eq!(digest.to_string(), ABC_HEX);
        assert_eq!(digest.to_hex(false), ABC_HEX);
        assert_eq!(digest.to_hex(true), ABC_HEX.to_lowercase());
    }

    #[test]
    fn test_hex_zero_pads_each_byte() {
        let digest = Digest::from([0x0a; DIGEST_LEN]);
        assert_eq!(digest.to_hex(false), "0A".repeat(DIGEST_LEN));
    }

    #[test]
    fn test_parse_accepts_either_case() {
        let upper: Digest = ABC_HEX.parse().unwrap();
        let lower: Digest = ABC_HEX.to_lowercase().parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, assemble(&abc_state()));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "abcd".parse::<Digest>(),
            Err(HashError::InvalidDigest(_))
        ));
        let not_hex = "Z".repeat(64);
        assert!(matches!(
            not_hex.parse::<Digest>(),
            Err(HashError::InvalidDigest(_))
        ));
    }

    #[test]
    fn test_serialize_as_hex_string() {
        let digest = assemble(&abc_state());
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", ABC_HEX));
    }
}
