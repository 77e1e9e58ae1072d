use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::errors::Result;

/// Loads a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

pub fn read_stdin() -> Result<Vec<u8>> {
    read_all(io::stdin().lock())
}
