//! Error type for reading word lists and writing records.

use std::path::PathBuf;

/// Errors raised outside the clique search itself.
///
/// Filtering, graph construction and enumeration never fail; everything here
/// comes from reading the word list or writing records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid word list: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("failed to write record: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid alphabet: {0}")]
    Alphabet(String),
}

pub type Result<T> = std::result::Result<T, Error>;
