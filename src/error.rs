//! Crate error types.

use thiserror::Error;

/// Errors surfaced by network construction, rendering setup, and snapshots.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
