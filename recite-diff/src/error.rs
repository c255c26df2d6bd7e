//! Error types for the fallible edges of recite-diff
//!
//! Diffing and scoring never fail; only configuration and record
//! (de)serialization do.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiffError>;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiffError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
