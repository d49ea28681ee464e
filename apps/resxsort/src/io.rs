//! File I/O at the edges of a sort run.
//!
//! The source is read fully into memory and its handle closed before any
//! write, so overwriting the source in place never reads a partial file.

use crate::error::SortError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn read_source(path: &Path) -> Result<Vec<u8>, SortError> {
    fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SortError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => SortError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write `bytes` to `path`, creating missing parent directories first.
pub fn write_target(path: &Path, bytes: &[u8]) -> Result<(), SortError> {
    let unwritable = |source: std::io::Error| SortError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(unwritable)?;
    }
    fs::write(path, bytes).map_err(unwritable)
}
