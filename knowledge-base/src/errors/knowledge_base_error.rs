//! Unified error type for the knowledge-base crate.

use thiserror::Error;

/// Errors produced while loading the knowledge base document.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    /// Underlying I/O error (missing file, permissions).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON, or an entry misses `content`/`url`.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not a category → topic → entry mapping.
    #[error("invalid knowledge base shape: {0}")]
    InvalidShape(String),
}
