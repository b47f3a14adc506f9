//! Error types for areatree
//!
//! The selection core never fails on data: malformed input degrades and
//! broken tree links panic. These variants cover the edges around it
//! (files, JSON, config, ids supplied by a caller).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for areatree operations
pub type AreaTreeResult<T> = Result<T, AreaTreeError>;

/// Main error type for areatree operations
#[derive(Error, Debug)]
pub enum AreaTreeError {
    /// Caller asked for an area id the forest does not contain
    #[error("unknown area '{id}'")]
    UnknownArea { id: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
