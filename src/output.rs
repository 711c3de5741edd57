//! Console report for dircat results.
//!
//! A report is one section per extracted file (banner, path label, banner,
//! truncated content) followed by the directory tree.

use crate::console::SafePrinter;
use crate::types::{DircatResult, Extraction, TreeListing};
use std::io::{self, Write};
use std::path::Path;

/// Width of the `=` banner lines.
pub const BANNER_WIDTH: usize = 80;

/// Returns at most the first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Writes the line printed before extraction starts.
pub fn write_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nReading files...\n")
}

/// Writes the message for a root that is not a directory.
pub fn write_invalid_root<W: Write>(out: &mut W, root: &Path) -> io::Result<()> {
    writeln!(
        out,
        "Invalid path. Check the provided directory: {}",
        root.display()
    )
}

/// Writes one section per file. `preview_chars` of `None` prints content in full.
pub fn write_files<W: Write>(
    out: &mut W,
    files: &Extraction,
    printer: &SafePrinter,
    preview_chars: Option<usize>,
) -> io::Result<()> {
    for file in files {
        writeln!(out, "{}", banner())?;
        writeln!(out, "File: {}", file.path.display())?;
        writeln!(out, "{}", banner())?;
        let content = match preview_chars {
            Some(max) => truncate_chars(&file.content, max),
            None => file.content.as_str(),
        };
        printer.println(out, content)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the directory structure section, never truncated.
pub fn write_tree<W: Write>(out: &mut W, tree: &TreeListing, printer: &SafePrinter) -> io::Result<()> {
    writeln!(out, "\nDirectory structure:")?;
    writeln!(out, "{}", banner())?;
    printer.println(out, &tree.to_string())
}

/// Writes the file sections and the tree for a finished walk.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &DircatResult,
    printer: &SafePrinter,
    preview_chars: Option<usize>,
) -> io::Result<()> {
    write_files(out, &result.files, printer, preview_chars)?;
    write_tree(out, &result.tree, printer)
}

/// Renders the report into a string, mostly for tests and embedding.
pub fn format_report(
    result: &DircatResult,
    printer: &SafePrinter,
    preview_chars: Option<usize>,
) -> String {
    let mut buffer = Vec::with_capacity(1024);
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buffer, result, printer, preview_chars);
    String::from_utf8_lossy(&buffer).into_owned()
}
