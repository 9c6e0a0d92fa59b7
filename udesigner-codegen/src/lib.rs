//! # UDesigner Codegen
//!
//! Text generation for Unreal reflection declarations.
//!
//! This crate provides:
//! - `USTRUCT` generation with one `UPROPERTY` per field/type pair
//! - `UENUM` generation backed by `uint8`
//! - `UFUNCTION` signature generation
//! - A dispatching [`Generator`] with optional strict arity checking

pub mod error;
pub mod generator;
pub mod unreal;

pub use error::CodegenError;
pub use generator::Generator;
pub use udesigner_core::ArityPolicy;
pub use unreal::{EnumGenerator, FunctionGenerator, StructGenerator};

use std::path::Path;
use udesigner_core::DeclarationRequest;

/// Generates a `USTRUCT` declaration.
///
/// Fields and types are paired by position; surplus entries on either side
/// are dropped.
///
/// # Arguments
/// * `name` - Struct name
/// * `fields` - Property names, in declaration order
/// * `types` - Property types, paired with `fields` by position
///
/// # Returns
/// The struct declaration text.
#[must_use]
pub fn generate_struct<S: AsRef<str>>(name: &str, fields: &[S], types: &[S]) -> String {
    let pairs = fields
        .iter()
        .zip(types)
        .map(|(field, ty)| (field.as_ref(), ty.as_ref()));
    unreal::structs::render(name, pairs)
}

/// Generates a `UENUM` declaration with one entry per enumerator.
///
/// # Arguments
/// * `name` - Enum name
/// * `enumerators` - Entry identifiers, also used verbatim as display names
///
/// # Returns
/// The `uint8` backed enum declaration text.
#[must_use]
pub fn generate_enum<S: AsRef<str>>(name: &str, enumerators: &[S]) -> String {
    unreal::enums::render(name, enumerators.iter().map(AsRef::as_ref))
}

/// Generates a `UFUNCTION` declaration from pre-rendered parameters.
///
/// Each parameter is emitted as given, e.g. `"int32 A"`.
///
/// # Arguments
/// * `name` - Function name, also used as the category
/// * `return_type` - Return type
/// * `params` - Rendered parameters, joined with `", "`
///
/// # Returns
/// The function declaration text.
#[must_use]
pub fn generate_function<S: AsRef<str>>(name: &str, return_type: &str, params: &[S]) -> String {
    unreal::functions::render(name, return_type, params.iter().map(AsRef::as_ref))
}

/// Generates the declaration described by `request`, truncating mismatched
/// lists.
///
/// # Arguments
/// * `request` - Name, lists and kind to generate
///
/// # Returns
/// Generated declaration text.
#[must_use]
pub fn generate(request: &DeclarationRequest) -> String {
    Generator::new(request).render()
}

/// Generates the declaration described by `request` under the given policy.
///
/// # Arguments
/// * `request` - Name, lists and kind to generate
/// * `policy` - How to treat mismatched field/type lists
///
/// # Returns
/// Generated declaration text.
///
/// # Errors
/// Returns `CodegenError::Request` if the policy rejects the request.
pub fn generate_checked(
    request: &DeclarationRequest,
    policy: ArityPolicy,
) -> Result<String, CodegenError> {
    Generator::new(request).with_policy(policy).generate()
}

/// Generates a declaration and writes it to `path`.
///
/// # Arguments
/// * `request` - Name, lists and kind to generate
/// * `policy` - How to treat mismatched field/type lists
/// * `path` - Destination file, created or overwritten
///
/// # Errors
/// Returns `CodegenError` if the policy rejects the request or the file
/// cannot be written.
pub fn write_to_file(
    request: &DeclarationRequest,
    policy: ArityPolicy,
    path: &Path,
) -> Result<(), CodegenError> {
    let text = generate_checked(request, policy)?;
    std::fs::write(path, text)?;
    tracing::info!(path = %path.display(), kind = %request.kind, "wrote declaration");
    Ok(())
}
