use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for sigscan operations
pub type Result<T> = std::result::Result<T, SigScanError>;

/// Errors that can occur while scanning or rewriting resolver files
#[derive(Error, Debug)]
pub enum SigScanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Path does not exist: {path}")]
    PathNotFound { path: String },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to persist temp file over {path}: {message}")]
    Persist { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
