//! # UDesigner
//!
//! Generate Unreal reflection declarations from a name, a list of property
//! names and a list of property types.
//!
//! ## Features
//!
//! - **`USTRUCT`** - one `UPROPERTY(BlueprintReadWrite, EditAnywhere)` per field/type pair
//! - **`UENUM`** - `uint8` backed, display names taken from the identifiers
//! - **`UFUNCTION`** - `BlueprintCallable` signature, first type is the return type
//! - **Strict mode** - report mismatched field/type lists instead of truncating
//!
//! ## Quick Start
//!
//! ```
//! use udesigner::prelude::*;
//!
//! let request = DeclarationRequest::from_form("Color", "Red,Blue", "", DeclarationKind::Enum);
//! let text = udesigner::codegen::generate(&request);
//! assert!(text.starts_with("UENUM(BlueprintType)\n"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Request model, list splitting, selection and validation
//! - [`codegen`] - Declaration text generation
//! - [`form`] - Application state behind the form
//! - [`shell`] - Interactive line-based form
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod form;
pub mod prelude;
pub mod shell;

/// Request model, list splitting, selection and validation.
pub mod core {
    pub use udesigner_core::*;
}

/// Declaration text generation.
pub mod codegen {
    pub use udesigner_codegen::*;
}

pub use form::FormState;
pub use shell::Shell;
pub use udesigner_codegen::{CodegenError, Generator};
pub use udesigner_core::{ArityPolicy, DeclarationKind, DeclarationRequest, Toggles};
