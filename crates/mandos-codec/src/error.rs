//! Codec error types.

use thiserror::Error;

/// Errors that can occur while encoding integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The minimal encoding is longer than the requested width.
    #[error("value needs {needed} bytes, does not fit in {width}")]
    DoesNotFit { width: usize, needed: usize },
}

/// Codec result type alias.
pub type CodecResult<T> = Result<T, CodecError>;
