use crate::error::DircatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions extracted when no allowlist is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".txt", ".py", ".js", ".ts", ".json", ".md", ".html", ".css", ".java", ".c", ".cpp",
];

/// Number of characters of each file printed by the report.
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// Console encoding used by the safe printer.
pub const DEFAULT_CONSOLE_ENCODING: &str = "windows-1252";

/// How bytes that are not valid UTF-8 are handled when reading a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Drop undecodable sequences.
    #[default]
    Ignore,
    /// Substitute U+FFFD for each undecodable sequence.
    Replace,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DircatOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
    pub sort_entries: bool,
    pub decode_policy: DecodePolicy,
    pub preview_chars: Option<usize>,
    pub console_encoding: Option<String>,
    pub replacement: char,
    pub universal_newlines: bool,
}
impl Default for DircatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
            ignore_patterns: Vec::new(),
            sort_entries: false,
            decode_policy: DecodePolicy::Ignore,
            preview_chars: Some(DEFAULT_PREVIEW_CHARS),
            console_encoding: Some(DEFAULT_CONSOLE_ENCODING.to_string()),
            replacement: '?',
            universal_newlines: true,
        }
    }
}
impl DircatOptions {
    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DircatError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| DircatError::io(path, e))?;
        let mut options: DircatOptions =
            serde_json::from_str(&raw).map_err(|source| DircatError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        options.extensions = normalize_extensions(options.extensions);
        Ok(options)
    }

    /// Fails with [`DircatError::InvalidRoot`] unless the root is an existing directory.
    pub fn validate_root(&self) -> Result<(), DircatError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(DircatError::InvalidRoot(self.root.clone()))
        }
    }

    /// Whether `path` carries an allowlisted extension (case-insensitive).
    pub fn is_allowed(&self, path: &Path) -> bool {
        let Some(dotted) = dotted_extension(path) else {
            return false;
        };
        self.extensions.iter().any(|allowed| *allowed == dotted)
    }
}

/// Lower-cased extension with its leading dot. Leading dots of the file name
/// never start an extension, so `.txt` and `..txt` have none.
pub fn dotted_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let stem = name.trim_start_matches('.');
    let dot = stem.rfind('.')?;
    Some(stem[dot..].to_lowercase())
}

fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    extensions
        .into_iter()
        .map(|ext| {
            let ext = ext.trim().to_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct DircatBuilder {
    options: DircatOptions,
}
impl DircatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DircatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Starts from already loaded options, e.g. a config file.
    pub fn from_options(options: DircatOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    /// Replaces the allowlist. Entries may be given with or without the leading dot.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions =
            normalize_extensions(extensions.into_iter().map(Into::into).collect());
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.options.decode_policy = policy;
        self
    }
    pub fn preview_chars(mut self, limit: Option<usize>) -> Self {
        self.options.preview_chars = limit;
        self
    }
    /// `None` disables transcoding on output.
    pub fn console_encoding(mut self, label: Option<String>) -> Self {
        self.options.console_encoding = label;
        self
    }
    pub fn replacement(mut self, replacement: char) -> Self {
        self.options.replacement = replacement;
        self
    }
    /// Translate `\r\n` and lone `\r` to `\n` in extracted content.
    pub fn universal_newlines(mut self, yes: bool) -> Self {
        self.options.universal_newlines = yes;
        self
    }
    pub fn build(self) -> DircatOptions {
        self.options
    }
}
