//! Error types for locale file handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading, writing, or configuring locale files.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// A locale or config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The file is not well-formed JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The config file is not valid TOML or has fields of the wrong type.
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Convenience alias for locale results.
pub type LocaleResult<T> = Result<T, LocaleError>;
