use std::fmt;
use std::path::{Path, PathBuf};

/// A single extracted file with its path and decoded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The full path to the file (the walk root joined with the relative path).
    pub path: PathBuf,
    /// The decoded content of the file.
    ///
    /// If the file could not be read, this holds a placeholder such as
    /// `[Error reading file: permission denied (os error 13)]`.
    pub content: String,
    /// Whether `content` is a read-failure placeholder.
    pub read_failed: bool,
}

/// Extracted files in traversal order, keyed by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    entries: Vec<FileEntry>,
}
impl Extraction {
    pub(crate) fn push(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Content recorded for `path`, if it was extracted.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.content.as_str())
    }
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.path.as_path())
    }
}
impl IntoIterator for Extraction {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
impl<'a> IntoIterator for &'a Extraction {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Indented listing of a directory tree, one line per directory or file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    lines: Vec<String>,
}
impl TreeListing {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
impl fmt::Display for TreeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// The complete result of a single walk.
#[derive(Debug, Clone)]
pub struct DircatResult {
    /// Indented tree of every directory and file visited.
    pub tree: TreeListing,
    /// Contents of the files whose extension is allowlisted.
    pub files: Extraction,
}
