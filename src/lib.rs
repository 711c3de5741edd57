//! # Dircat
//!
//! `dircat` walks a directory tree, reads the files whose extension is on an
//! allowlist, and renders their contents together with an indented listing of
//! every directory and file.
//!
//! Reading is permissive: undecodable bytes are dropped (or replaced, see
//! [`DecodePolicy`]) and unreadable files yield an inline placeholder rather
//! than an error. Output goes through a [`SafePrinter`] that re-encodes text
//! for legacy consoles.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate, and a
//!   `tracing-subscriber` setup in the binary.
//!
//! # Example
//!
//! ```no_run
//! use dircat::{DircatBuilder, SafePrinter, dircat, output};
//!
//! let options = DircatBuilder::new(".")
//!     .extensions([".rs", ".toml"])
//!     .sort_entries(true)
//!     .build();
//!
//! let result = dircat(&options).expect("Failed to scan directory");
//!
//! for file in &result.files {
//!     println!("{} ({} bytes)", file.path.display(), file.content.len());
//! }
//! let printer = SafePrinter::new("windows-1252", '?');
//! print!("{}", output::format_report(&result, &printer, Some(2000)));
//! ```

pub mod console;
mod engine;
mod error;
mod options;
pub mod output;
pub mod reader;
mod tree;
mod types;

pub use console::SafePrinter;
pub use engine::{dircat, extract_texts, list_tree};
pub use error::DircatError;
pub use options::{
    DEFAULT_CONSOLE_ENCODING, DEFAULT_EXTENSIONS, DEFAULT_PREVIEW_CHARS, DecodePolicy,
    DircatBuilder, DircatOptions, dotted_extension,
};
pub use reader::read_text;
pub use types::{DircatResult, Extraction, FileEntry, TreeListing};
