//! `UFUNCTION` code generation.

use udesigner_core::DeclarationRequest;

/// Generator for `UFUNCTION` declarations.
///
/// The first type is the return type; the remaining types pair with the
/// fields by position to form parameters.
pub struct FunctionGenerator<'a> {
    request: &'a DeclarationRequest,
}

impl<'a> FunctionGenerator<'a> {
    /// Creates a new function generator.
    #[must_use]
    pub fn new(request: &'a DeclarationRequest) -> Self {
        Self { request }
    }

    /// Generates the function declaration.
    #[must_use]
    pub fn generate(&self) -> String {
        let params: Vec<String> = self.request.parameters().map(|p| p.to_string()).collect();
        render(
            &self.request.name,
            self.request.return_type(),
            params.iter().map(String::as_str),
        )
    }
}

/// Renders a function signature from pre-rendered parameters.
pub(crate) fn render<'s>(
    name: &str,
    return_type: &str,
    params: impl Iterator<Item = &'s str>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "UFUNCTION(BlueprintCallable, Category = \"{}\")\n",
        name
    ));
    output.push_str(&format!("{} {}(", return_type, name));
    output.push_str(&params.collect::<Vec<_>>().join(", "));
    output.push_str(");\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use udesigner_core::DeclarationKind;

    #[test]
    fn test_generate_function_exact() {
        let request = DeclarationRequest::from_form(
            "DoThing",
            "A,B",
            "void,int32,bool",
            DeclarationKind::Function,
        );
        let output = FunctionGenerator::new(&request).generate();

        assert_eq!(
            output,
            "UFUNCTION(BlueprintCallable, Category = \"DoThing\")\n\
             void DoThing(int32 A, bool B);\n"
        );
    }

    #[test]
    fn test_generate_function_excess_fields_dropped() {
        let request =
            DeclarationRequest::from_form("Fire", "Target,Power", "bool,AActor*", DeclarationKind::Function);
        let output = FunctionGenerator::new(&request).generate();

        assert!(output.ends_with("bool Fire(AActor* Target);\n"));
    }

    #[test]
    fn test_generate_function_only_return_type() {
        let request = DeclarationRequest::from_form("Reset", "", "void", DeclarationKind::Function);
        let output = FunctionGenerator::new(&request).generate();

        assert!(output.ends_with("void Reset();\n"));
    }

    #[test]
    fn test_generate_function_no_types() {
        let request =
            DeclarationRequest::new("F", ["A"], Vec::<String>::new(), DeclarationKind::Function);
        let output = FunctionGenerator::new(&request).generate();

        assert!(output.ends_with(" F();\n"));
    }
}
