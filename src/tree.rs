//! Internal module for rendering the indented tree listing from walked directories.

use crate::types::TreeListing;
use std::path::{Path, PathBuf};

const INDENT: &str = "    ";

/// A directory visited by the walk with the files found directly inside it.
#[derive(Debug)]
pub(crate) struct DirNode {
    pub path: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Builds the listing: each directory line is followed by its own files, at one
/// more level of indentation.
///
/// `dirs` must be in walk (pre-order) order.
pub(crate) fn build_tree(root: &Path, dirs: &[DirNode]) -> TreeListing {
    let mut lines = Vec::new();
    for dir in dirs {
        let depth = relative_depth(root, &dir.path);
        lines.push(format!("{}{}/", INDENT.repeat(depth), dir_name(&dir.path)));

        let file_indent = INDENT.repeat(depth + 1);
        for file in &dir.files {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            lines.push(format!("{}{}", file_indent, name));
        }
    }
    TreeListing::new(lines)
}

/// Number of components between `root` and `dir`; the root itself is 0.
fn relative_depth(root: &Path, dir: &Path) -> usize {
    dir.strip_prefix(root)
        .map(|relative| relative.components().count())
        .unwrap_or(0)
}

// `.`, `..` and `/` have no base name; show them as given.
fn dir_name(dir: &Path) -> String {
    match dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            let shown = dir.display().to_string();
            let trimmed = shown.trim_end_matches(['/', '\\']);
            if trimmed.is_empty() {
                shown
            } else {
                trimmed.to_string()
            }
        }
    }
}
