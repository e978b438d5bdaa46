//! Bounded byte-window reads used by the signature stage.
//!
//! Two primitives: read a window from the start of a file, or from its end.
//! A file shorter than the requested window yields a shorter buffer rather
//! than a silently part-filled one. Errors here are real I/O errors;
//! downgrading them to the `unknown` sentinel is the orchestrator's job.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// Reads up to `length` bytes from the start of the file.
///
/// Returns exactly `length` bytes when the file is long enough, a shorter
/// buffer otherwise.
pub fn read_head(path: impl AsRef<Path>, length: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_read(path, e))?;
    fill_window(file, path, length)
}

/// Reads up to `length` bytes from the end of the file.
///
/// Provided for tail-anchored signature rules; the shipped catalog anchors
/// everything to the head.
pub fn read_tail(path: impl AsRef<Path>, length: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::file_read(path, e))?;
    let size = file
        .metadata()
        .map_err(|e| Error::file_read(path, e))?
        .len();
    let start = size.saturating_sub(length as u64);
    file.seek(SeekFrom::Start(start))
        .map_err(|e| Error::file_read(path, e))?;
    fill_window(file, path, length.min(size as usize))
}

/// Reads until the window is full or the file ends.
fn fill_window(mut file: File, path: &Path, length: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; length];
    let mut filled = 0;

    while filled < length {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::file_read(path, e)),
        }
    }

    buffer.truncate(filled);
    Ok(buffer)
}
