//! Application state behind the form.
//!
//! [`FormState`] holds the three text inputs, the selected declaration kind
//! and the most recent output. Inputs are read only when
//! [`create`](FormState::create) runs.

use udesigner_codegen::{CodegenError, Generator};
use udesigner_core::{ArityPolicy, DeclarationKind, DeclarationRequest, Toggles};

/// Form inputs, options and the latest generated text.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    name: String,
    fields: String,
    types: String,
    kind: Option<DeclarationKind>,
    trim: bool,
    policy: ArityPolicy,
    output: Option<String>,
}

impl FormState {
    /// Creates an empty form with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declaration name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the comma-separated field list.
    pub fn set_fields(&mut self, fields: impl Into<String>) {
        self.fields = fields.into();
    }

    /// Sets the comma-separated type list.
    pub fn set_types(&mut self, types: impl Into<String>) {
        self.types = types.into();
    }

    /// Selects the kind of declaration to generate.
    pub fn select(&mut self, kind: DeclarationKind) {
        self.kind = Some(kind);
    }

    /// Selects from the legacy three toggles.
    ///
    /// When several toggles are set, enum wins over function and function
    /// over struct.
    pub fn select_toggles(&mut self, toggles: Toggles) {
        if toggles.is_ambiguous() {
            tracing::warn!(?toggles, "several declaration kinds selected; using priority order");
        }
        self.kind = toggles.selected();
    }

    /// Clears the selection. [`create`](Self::create) then produces nothing.
    pub fn clear_selection(&mut self) {
        self.kind = None;
    }

    /// Enables or disables trimming whitespace around list entries.
    pub fn set_trim(&mut self, trim: bool) {
        self.trim = trim;
    }

    /// Sets the arity policy.
    pub fn set_policy(&mut self, policy: ArityPolicy) {
        self.policy = policy;
    }

    /// Returns the declaration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw field list text.
    #[must_use]
    pub fn fields(&self) -> &str {
        &self.fields
    }

    /// Returns the raw type list text.
    #[must_use]
    pub fn types(&self) -> &str {
        &self.types
    }

    /// Returns the selected kind.
    #[must_use]
    pub fn kind(&self) -> Option<DeclarationKind> {
        self.kind
    }

    /// Returns whether list entries are trimmed.
    #[must_use]
    pub fn trim(&self) -> bool {
        self.trim
    }

    /// Returns the arity policy.
    #[must_use]
    pub fn policy(&self) -> ArityPolicy {
        self.policy
    }

    /// Returns the latest generated text, if any.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Builds a request from the current inputs, or `None` if no kind is
    /// selected.
    #[must_use]
    pub fn request(&self) -> Option<DeclarationRequest> {
        let kind = self.kind?;
        let request = if self.trim {
            DeclarationRequest::from_form_trimmed(&self.name, &self.fields, &self.types, kind)
        } else {
            DeclarationRequest::from_form(&self.name, &self.fields, &self.types, kind)
        };
        Some(request)
    }

    /// Generates a declaration from the current inputs.
    ///
    /// On success the previous output is replaced. With no kind selected
    /// nothing is generated and `Ok(None)` is returned; the previous output
    /// is kept.
    ///
    /// # Errors
    /// Returns `CodegenError` if the arity policy rejects the inputs. The
    /// previous output is kept.
    pub fn create(&mut self) -> Result<Option<&str>, CodegenError> {
        let Some(request) = self.request() else {
            tracing::debug!("create with no declaration kind selected");
            return Ok(None);
        };

        let text = Generator::new(&request).with_policy(self.policy).generate()?;
        self.output = Some(text);
        Ok(self.output.as_deref())
    }
}
