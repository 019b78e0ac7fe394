//! Errors raised while loading or writing ordered value trees.

use thiserror::Error;

/// Errors that can occur while converting between fixture text and trees.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The fixture text is not valid JSON, or uses a JSON form the tree
    /// cannot hold (numbers, `null`).
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The writer produced bytes that are not UTF-8.
    #[error("fixture writer produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result alias for tree loading and writing.
pub type TreeResult<T> = Result<T, TreeError>;
