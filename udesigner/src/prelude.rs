//! Prelude module for convenient imports.
//!
//! ```
//! use udesigner::prelude::*;
//! ```

// Request model
pub use udesigner_core::error::{Error as RequestError, Result as RequestResult};
pub use udesigner_core::{
    ArityPolicy, DeclarationKind, DeclarationRequest, Parameter, Property, Toggles,
};

// Generation
pub use udesigner_codegen::{
    CodegenError, EnumGenerator, FunctionGenerator, Generator, StructGenerator,
};

// Application state
pub use crate::form::FormState;
pub use crate::shell::Shell;
