//! Command-line interface for dircat.
//!
//! Walks a directory, prints the content of every allowlisted file (truncated)
//! and finishes with the directory tree.

use clap::Parser;
use dircat::{
    DecodePolicy, DircatBuilder, DircatError, DircatOptions, SafePrinter, dircat, output,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

/// dircat — print text files and the tree of a directory
#[derive(Parser)]
#[command(name = "dircat", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Load options from a JSON file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extensions to extract (can be repeated; replaces the default list)
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Characters of each file to print
    #[arg(long, conflicts_with = "no_truncate")]
    max_chars: Option<usize>,

    /// Print file contents in full
    #[arg(long)]
    no_truncate: bool,

    /// Console encoding label used for safe printing (e.g. windows-1252, latin1)
    #[arg(long, conflicts_with = "raw")]
    encoding: Option<String>,

    /// Print text without transcoding
    #[arg(long)]
    raw: bool,

    /// Character printed in place of unrepresentable ones
    #[arg(long)]
    replacement: Option<char>,

    /// How invalid UTF-8 is handled
    #[arg(long, value_parser = parse_decode_policy)]
    decode: Option<DecodePolicy>,

    /// Keep \r\n and \r line endings in file contents
    #[arg(long)]
    keep_crlf: bool,

    /// Sort entries by name
    #[arg(long)]
    sort: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,
}

/// Parse string into DecodePolicy enum.
fn parse_decode_policy(s: &str) -> Result<DecodePolicy, String> {
    match s {
        "ignore" => Ok(DecodePolicy::Ignore),
        "replace" => Ok(DecodePolicy::Replace),
        _ => Err(format!("invalid decode policy: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> Result<DircatOptions, DircatError> {
        let base = match &self.config {
            Some(path) => DircatOptions::from_json_file(path)?,
            None => DircatOptions::default(),
        };
        let mut builder = DircatBuilder::from_options(base);

        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if !self.extensions.is_empty() {
            builder = builder.extensions(self.extensions);
        }
        if !self.ignore_patterns.is_empty() {
            builder = builder.ignore_patterns(self.ignore_patterns);
        }
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        if let Some(max) = self.max_chars {
            builder = builder.preview_chars(Some(max));
        }
        if self.no_truncate {
            builder = builder.preview_chars(None);
        }
        if let Some(label) = self.encoding {
            builder = builder.console_encoding(Some(label));
        }
        if self.raw {
            builder = builder.console_encoding(None);
        }
        if let Some(replacement) = self.replacement {
            builder = builder.replacement(replacement);
        }
        if let Some(policy) = self.decode {
            builder = builder.decode_policy(policy);
        }
        if self.keep_crlf {
            builder = builder.universal_newlines(false);
        }
        if self.sort {
            builder = builder.sort_entries(true);
        }
        if self.no_hidden {
            builder = builder.include_hidden(false);
        }
        if self.gitignore {
            builder = builder.respect_gitignore(true);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        Ok(builder.build())
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let options = cli.into_options().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1);
    });

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if options.validate_root().is_err() {
        // Exit status reports the failure even if stdout is already closed.
        output::write_invalid_root(&mut handle, &options.root).ok();
        handle.flush().ok();
        exit(1);
    }

    if let Err(e) = run(&mut handle, &options) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run<W: Write>(out: &mut W, options: &DircatOptions) -> Result<(), Box<dyn std::error::Error>> {
    output::write_intro(out)?;
    let result = dircat(options)?;
    let printer = SafePrinter::from_options(options);
    output::write_report(out, &result, &printer, options.preview_chars)?;
    out.flush()?;
    Ok(())
}
