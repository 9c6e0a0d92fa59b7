//! Field/type arity validation.
//!
//! By default field and type lists are paired positionally and surplus
//! entries are dropped. [`ArityPolicy::Strict`] turns a mismatch into an
//! [`Error::ArityMismatch`] instead.

use crate::error::{Error, Result};
use crate::request::{DeclarationKind, DeclarationRequest};

/// How to treat field/type lists whose lengths do not pair up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArityPolicy {
    /// Pair by position and silently drop unmatched entries.
    #[default]
    Truncate,
    /// Reject mismatched lists.
    Strict,
}

/// Validates that a request's lists pair up exactly.
///
/// Structs need one type per field. Functions need one return type plus one
/// type per field; an empty field box means no parameters. Enums ignore
/// types and always pass.
///
/// # Errors
/// Returns `Error::ArityMismatch` if the lists do not pair up.
pub fn validate_request(request: &DeclarationRequest) -> Result<()> {
    let fields = request.field_count();
    let expected_types = match request.kind {
        DeclarationKind::Struct => fields,
        DeclarationKind::Function => fields + 1,
        DeclarationKind::Enum => return Ok(()),
    };

    if request.types.len() != expected_types {
        tracing::debug!(
            kind = %request.kind,
            fields,
            types = request.types.len(),
            "rejecting request with mismatched arity"
        );
        return Err(Error::ArityMismatch {
            kind: request.kind,
            fields,
            types: request.types.len(),
        });
    }

    Ok(())
}

impl ArityPolicy {
    /// Applies this policy to a request.
    ///
    /// # Errors
    /// Returns `Error::ArityMismatch` under `Strict` when the lists do not
    /// pair up.
    pub fn check(self, request: &DeclarationRequest) -> Result<()> {
        match self {
            Self::Truncate => Ok(()),
            Self::Strict => validate_request(request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_matching_lists() {
        let req = DeclarationRequest::new("S", ["a", "b"], ["int", "bool"], DeclarationKind::Struct);
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_struct_mismatch() {
        let req = DeclarationRequest::new("S", ["a", "b", "c"], ["int"], DeclarationKind::Struct);
        assert_eq!(
            validate_request(&req),
            Err(Error::ArityMismatch {
                kind: DeclarationKind::Struct,
                fields: 3,
                types: 1,
            })
        );
    }

    #[test]
    fn test_function_needs_return_type() {
        let ok = DeclarationRequest::new("F", ["A"], ["void", "int32"], DeclarationKind::Function);
        assert!(validate_request(&ok).is_ok());

        let bad = DeclarationRequest::new("F", ["A"], ["int32"], DeclarationKind::Function);
        assert!(matches!(
            validate_request(&bad),
            Err(Error::ArityMismatch { fields: 1, types: 1, .. })
        ));
    }

    #[test]
    fn test_function_without_parameters() {
        let req = DeclarationRequest::from_form("Reset", "", "void", DeclarationKind::Function);
        assert!(validate_request(&req).is_ok());

        let extra = DeclarationRequest::from_form("Reset", "", "void,int32", DeclarationKind::Function);
        assert_eq!(
            validate_request(&extra),
            Err(Error::ArityMismatch {
                kind: DeclarationKind::Function,
                fields: 0,
                types: 2,
            })
        );
    }

    #[test]
    fn test_enum_ignores_types() {
        let req = DeclarationRequest::new("E", ["A", "B"], Vec::<String>::new(), DeclarationKind::Enum);
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_truncate_policy_accepts_mismatch() {
        let req = DeclarationRequest::new("S", ["a", "b"], ["int"], DeclarationKind::Struct);
        assert!(ArityPolicy::Truncate.check(&req).is_ok());
        assert!(ArityPolicy::Strict.check(&req).is_err());
        assert_eq!(ArityPolicy::default(), ArityPolicy::Truncate);
    }
}
