//! Error types for catalog and config loading.
//!
//! The indexing pipeline itself never fails; only reading authored content
//! or configuration from disk, and parsing labels, can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the loading boundary of the crate.
#[derive(Error, Debug)]
pub enum TopicsError {
    /// Reading a file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// YAML content could not be decoded.
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// File path or `<inline>` for string input.
        origin: String,
        /// Decoder message.
        message: String,
    },
    /// Difficulty label is not one of `beginner`, `intermediate`, `advanced`.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

impl TopicsError {
    pub(crate) fn parse(origin: impl Into<String>, err: &serde_yaml::Error) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: err.to_string(),
        }
    }
}
