//! SHA-256 as an explicit pipeline:
//! pad -> split into blocks -> (schedule -> compress) per block -> assemble.

pub mod chunk;
pub mod compress;
pub mod digest;
pub mod preprocess;
pub mod schedule;

use tracing::{debug, trace};

use crate::config::HashOptions;
use crate::errors::{HashError, Result};

pub use chunk::{Block, blocks};
pub use compress::{H0, HashState, K, compress, compress_slices};
pub use digest::{Digest, assemble};
pub use preprocess::{PaddedMessage, pad};
pub use schedule::{MessageSchedule, schedule, schedule_slice};

pub const BLOCK_LEN: usize = 64;
pub const SCHEDULE_LEN: usize = 64;
pub const STATE_LEN: usize = 8;
pub const DIGEST_LEN: usize = 32;

/// Stateless front end over the pipeline. Each call starts from [`H0`] with
/// its own buffers, so one `Hasher` can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hasher {
    options: HashOptions,
}

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: HashOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> HashOptions {
        self.options
    }

    pub fn hash(&self, message: &[u8]) -> Result<Digest> {
        if message.is_empty() && !self.options.allow_empty {
            return Err(HashError::InvalidInput("message is empty".to_string()));
        }

        let padded = pad(message);
        let blocks = blocks(padded.as_bytes())?;
        debug!(
            message_len = message.len(),
            padded_len = padded.as_bytes().len(),
            blocks = blocks.len(),
            "hashing message"
        );

        let mut state = H0;
        for (index, block) in blocks.into_iter().enumerate() {
            let w = schedule(block);
            compress(&mut state, &w);
            trace!(index, "compressed block");
        }

        Ok(assemble(&state))
    }

    /// Hashes the UTF-8 bytes of `text` and renders the digest as 64 hex
    /// characters (uppercase unless the options say otherwise).
    pub fn hex_digest(&self, text: &str) -> Result<String> {
        if text.is_empty() && !self.options.allow_empty {
            return Err(HashError::InvalidInput("text is empty".to_string()));
        }
        let digest = self.hash(text.as_bytes())?;
        Ok(digest.to_hex(self.options.lowercase))
    }
}

/// Hashes `message` with default options. Empty input is rejected.
pub fn hash(message: &[u8]) -> Result<Digest> {
    Hasher::new().hash(message)
}

pub fn hex_digest(text: &str) -> Result<String> {
    Hasher::new().hex_digest(text)
}
