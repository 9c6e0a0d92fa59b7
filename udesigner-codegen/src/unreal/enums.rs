//! `UENUM` code generation.

use udesigner_core::DeclarationRequest;

/// Generator for `UENUM` declarations.
///
/// The request's fields are the enumerators; its types are ignored.
pub struct EnumGenerator<'a> {
    request: &'a DeclarationRequest,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(request: &'a DeclarationRequest) -> Self {
        Self { request }
    }

    /// Generates the enum declaration.
    #[must_use]
    pub fn generate(&self) -> String {
        render(
            &self.request.name,
            self.request.fields.iter().map(String::as_str),
        )
    }
}

/// Renders a `uint8` backed enum. Display names are the identifiers verbatim.
pub(crate) fn render<'s>(name: &str, enumerators: impl Iterator<Item = &'s str>) -> String {
    let mut output = String::new();

    output.push_str("UENUM(BlueprintType)\n");
    output.push_str(&format!("enum class {} : uint8\n", name));
    output.push_str("{\n");

    for enumerator in enumerators {
        output.push_str(&format!(
            "\t{} UMETA(DisplayName = \"{}\"),\n",
            enumerator, enumerator
        ));
    }

    output.push_str("};\n");
    output
}
