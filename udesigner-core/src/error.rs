//! Error types for declaration requests.

use crate::request::DeclarationKind;
use thiserror::Error;

/// Error type for declaration request handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field and type lists do not pair up for the requested kind.
    #[error("arity mismatch for {kind}: {fields} field(s) but {types} type(s)")]
    ArityMismatch {
        /// Declaration kind being generated.
        kind: DeclarationKind,
        /// Number of field identifiers supplied.
        fields: usize,
        /// Number of type identifiers supplied.
        types: usize,
    },

    /// Declaration kind name not recognised.
    #[error("unknown declaration kind '{value}' (expected struct, enum or function)")]
    UnknownKind {
        /// The unrecognised input.
        value: String,
    },
}

impl Error {
    /// Creates an unknown kind error.
    pub fn unknown_kind(value: impl Into<String>) -> Self {
        Self::UnknownKind {
            value: value.into(),
        }
    }
}

/// Result type alias for request operations.
pub type Result<T> = std::result::Result<T, Error>;
