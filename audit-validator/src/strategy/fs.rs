//! Filesystem document source.
//!
//! Reads configured audit documents for the validation pipeline:
//! - Only regular files are read; anything else counts as missing
//! - Bounded streaming reads enforce `max_file_size`
//! - Invalid UTF-8 sequences are replaced, never rejected

use std::io::Read;
use std::path::Path;

/// Result of attempting to read a configured document.
pub enum ReadResult {
    /// File was read successfully; contains the UTF-8 content.
    Ok(String),
    /// Path does not refer to an existing regular file.
    Missing,
    /// File exists but could not be loaded; contains the cause.
    Err(String),
}

/// Read a document using a bounded streaming read, enforcing `max_file_size`.
///
/// Uses `Read::take` so the size check and the actual read are the same
/// operation. Never calls `read_to_string` on an unbounded handle.
///
/// Returns `ReadResult::Err` if:
/// - The file cannot be opened or read
/// - The file exceeds `max_file_size`
///
/// Invalid UTF-8 is replaced with U+FFFD; the structural markers are ASCII or
/// valid sequences, so their relative order is unchanged.
pub fn read_document(path: &Path, max_file_size: u64) -> ReadResult {
    if !path.is_file() {
        return ReadResult::Missing;
    }

    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => return ReadResult::Err(format!("Failed to open file: {e}")),
    };

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    if let Err(e) = file
        .take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
    {
        return ReadResult::Err(format!("Failed to read file: {e}"));
    }

    if buffer.len() as u64 > max_file_size {
        return ReadResult::Err(format!(
            "File exceeds maximum size of {max_file_size} bytes"
        ));
    }

    ReadResult::Ok(String::from_utf8_lossy(&buffer).into_owned())
}
