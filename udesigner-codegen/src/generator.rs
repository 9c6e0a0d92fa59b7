//! Main declaration generator.

use crate::error::CodegenError;
use crate::unreal::{EnumGenerator, FunctionGenerator, StructGenerator};
use udesigner_core::{ArityPolicy, DeclarationKind, DeclarationRequest};

/// Declaration generator that dispatches on the request kind.
pub struct Generator<'a> {
    request: &'a DeclarationRequest,
    policy: ArityPolicy,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the truncating policy.
    #[must_use]
    pub fn new(request: &'a DeclarationRequest) -> Self {
        Self {
            request,
            policy: ArityPolicy::default(),
        }
    }

    /// Sets the arity policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ArityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the arity policy in effect.
    #[must_use]
    pub fn policy(&self) -> ArityPolicy {
        self.policy
    }

    /// Generates the declaration, applying the arity policy first.
    ///
    /// # Errors
    /// Returns `CodegenError::Request` if the policy rejects the request.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.policy.check(self.request)?;
        Ok(self.render())
    }

    /// Generates the declaration without validation.
    #[must_use]
    pub fn render(&self) -> String {
        let request = self.request;

        let dropped = request.dropped_entries();
        if dropped > 0 {
            tracing::warn!(
                kind = %request.kind,
                name = %request.name,
                dropped,
                "field and type lists differ in length; unmatched entries dropped"
            );
        }

        let output = match request.kind {
            DeclarationKind::Struct => StructGenerator::new(request).generate(),
            DeclarationKind::Enum => EnumGenerator::new(request).generate(),
            DeclarationKind::Function => FunctionGenerator::new(request).generate(),
        };

        tracing::debug!(
            kind = %request.kind,
            name = %request.name,
            bytes = output.len(),
            "generated declaration"
        );

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_default_policy() {
        let request = DeclarationRequest::from_form("S", "a", "int", DeclarationKind::Struct);
        let generator = Generator::new(&request);
        assert_eq!(generator.policy(), ArityPolicy::Truncate);
    }

    #[test]
    fn test_generator_dispatches_on_kind() {
        let cases = [
            (DeclarationKind::Struct, "USTRUCT(BlueprintType)\n"),
            (DeclarationKind::Enum, "UENUM(BlueprintType)\n"),
            (DeclarationKind::Function, "UFUNCTION(BlueprintCallable"),
        ];

        for (kind, prefix) in cases {
            let request = DeclarationRequest::from_form("Thing", "A", "void,int32", kind);
            let output = Generator::new(&request).render();
            assert!(output.starts_with(prefix), "{kind}: {output}");
        }
    }

    #[test]
    fn test_generator_strict_accepts_matching() {
        let request =
            DeclarationRequest::from_form("DoThing", "A,B", "void,int32,bool", DeclarationKind::Function);
        let output = Generator::new(&request)
            .with_policy(ArityPolicy::Strict)
            .generate()
            .expect("Failed to generate");
        assert!(output.contains("void DoThing(int32 A, bool B);"));
    }

    #[test]
    fn test_generator_strict_rejects_mismatch() {
        let request = DeclarationRequest::from_form("S", "a,b", "int", DeclarationKind::Struct);
        let result = Generator::new(&request)
            .with_policy(ArityPolicy::Strict)
            .generate();
        assert!(result.is_err());
    }

    #[test]
    fn test_generator_truncate_matches_render() {
        let request = DeclarationRequest::from_form("S", "a,b,c", "int", DeclarationKind::Struct);
        let generator = Generator::new(&request);
        assert_eq!(generator.generate().expect("Failed to generate"), generator.render());
    }
}
