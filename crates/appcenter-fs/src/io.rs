//! Thin file-system accessors that attach the offending path to errors

use std::fs;
use std::path::Path;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Byte length of a file as reported by the file system.
pub fn file_length(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|e| Error::io(path, e))
}
