//! Error type shared by the library and the CLI.

use std::io;

/// Errors raised while loading word lists, validating configuration or
/// normalizing entries. Generation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word list line {line}: {message}")]
    WordList { line: usize, message: String },

    #[error("entry \"{original}\" is empty after normalization")]
    EmptyWord { original: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
