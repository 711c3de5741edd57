use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DircatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error("Unknown console encoding: {0}")]
    UnknownEncoding(String),
    #[error("Transcoding failed: {0}")]
    Transcode(String),
    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
impl DircatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DircatError::Io {
            path: path.into(),
            source,
        }
    }
}
