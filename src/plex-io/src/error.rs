use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlexIoError {
    #[error("{path}: {source}")]
    FileNotFound { path: PathBuf, #[source] source: std::io::Error },

    #[error("malformed row in {path}: '{line}' ({reason})")]
    MalformedRow { path: PathBuf, line: String, reason: String },

    #[error("truncated or corrupt gzip stream: {path}")]
    TruncatedGzip { path: PathBuf, #[source] source: std::io::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
