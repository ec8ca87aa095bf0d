//! Error types for the file, config, and serialization layer.
//!
//! Parsing and rendering themselves never fail: unknown pitches fall back
//! to the middle line, stray characters are skipped, and degenerate arcs
//! draw nothing. Only the I/O wrappers around them return these errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StaveError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid stave config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[source] serde_json::Error),
}
