//! # UDesigner Core
//!
//! Data model for Unreal-style declaration generation.
//!
//! This crate provides:
//! - The declaration request and kind types
//! - Comma-separated list splitting for form input
//! - Legacy checkbox selection with its fixed priority
//! - Field/type arity validation
//! - Error types for request handling

pub mod error;
pub mod parse;
pub mod request;
pub mod selection;
pub mod validation;

pub use error::{Error, Result};
pub use parse::{split_list, split_list_trimmed};
pub use request::{DeclarationKind, DeclarationRequest, Parameter, Property};
pub use selection::Toggles;
pub use validation::{ArityPolicy, validate_request};
