pub mod config;
pub mod errors;
pub mod input;
pub mod sha256;

pub use config::HashOptions;
pub use errors::{HashError, Result};
pub use sha256::{Digest, Hasher, hash, hex_digest};
