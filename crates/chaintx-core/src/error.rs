//! Error types for record ingestion.
//!
//! Classification itself is infallible; only turning external input
//! (JSON text, variant tags) into typed values can fail.

use thiserror::Error;

/// Errors that can occur while building a [`TxRecord`](crate::TxRecord) or
/// parsing a [`TxVariant`](crate::TxVariant).
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Transaction must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Unknown transaction variant: {tag}")]
    UnknownVariant { tag: String },
}
