//! Error types for declaration generation.

use thiserror::Error;

/// Error type for declaration generation.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Request rejected by validation.
    #[error("request error: {0}")]
    Request(#[from] udesigner_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
