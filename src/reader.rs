//! Permissive file reading.
//!
//! Reading never fails from the caller's point of view: errors become an inline
//! placeholder so one unreadable file cannot abort a walk.

use crate::error::DircatError;
use crate::options::DecodePolicy;
use crate::types::FileEntry;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads `path` and decodes it as UTF-8 according to `policy`.
///
/// On failure returns `[Error reading file: <description>]` instead of an error.
pub fn read_text(path: &Path, policy: DecodePolicy) -> String {
    read_file(path, policy).content
}

/// Same as [`read_text`], but records whether the placeholder was substituted.
pub fn read_file(path: &Path, policy: DecodePolicy) -> FileEntry {
    let (content, read_failed) = match try_read(path, policy) {
        Ok(content) => (content, false),
        Err(DircatError::Io { source, .. }) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Failed to read {}: {}", path.display(), source);
            (placeholder(&source), true)
        }
        Err(other) => (placeholder(&other), true),
    };
    FileEntry {
        path: path.to_path_buf(),
        content,
        read_failed,
    }
}

fn placeholder(error: &dyn std::fmt::Display) -> String {
    format!("[Error reading file: {}]", error)
}

fn try_read(path: &Path, policy: DecodePolicy) -> Result<String, DircatError> {
    let file = File::open(path).map_err(|e| DircatError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| DircatError::io(path, e))?;
    Ok(decode(&bytes, policy))
}

/// Decodes UTF-8, dropping or replacing invalid sequences.
pub fn decode(bytes: &[u8], policy: DecodePolicy) -> String {
    match policy {
        DecodePolicy::Replace => String::from_utf8_lossy(bytes).into_owned(),
        DecodePolicy::Ignore => {
            let mut out = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                out.push_str(chunk.valid());
            }
            out
        }
    }
}

/// Translates `\r\n` and lone `\r` line endings to `\n`.
pub fn universal_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
