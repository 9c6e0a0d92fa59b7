//! `USTRUCT` code generation.

use udesigner_core::DeclarationRequest;

/// Generator for `USTRUCT` declarations.
pub struct StructGenerator<'a> {
    request: &'a DeclarationRequest,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(request: &'a DeclarationRequest) -> Self {
        Self { request }
    }

    /// Generates the struct declaration.
    #[must_use]
    pub fn generate(&self) -> String {
        render(
            &self.request.name,
            self.request.properties().map(|p| (p.name, p.ty)),
        )
    }
}

/// Renders a struct from `(field, type)` pairs.
pub(crate) fn render<'s>(name: &str, properties: impl Iterator<Item = (&'s str, &'s str)>) -> String {
    let mut output = String::new();

    output.push_str("USTRUCT(BlueprintType)\n");
    output.push_str(&format!("struct {}\n", name));
    output.push_str("{\n");
    output.push_str("\tGENERATED_BODY()\n\n");

    for (field, ty) in properties {
        output.push_str("\tUPROPERTY(BlueprintReadWrite, EditAnywhere)\n");
        output.push_str(&format!("\t{} {};\n", ty, field));
    }

    output.push_str("};\n");
    output
}
