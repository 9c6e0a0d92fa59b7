//! Legacy three-checkbox selection.
//!
//! The form historically exposed three independent toggles. When more than
//! one is set, enum wins over function, and function wins over struct. New
//! code should pass a [`DeclarationKind`] directly.

use crate::request::DeclarationKind;

/// State of the three declaration toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggles {
    /// "Is Enum" toggle.
    pub is_enum: bool,
    /// "Is Function" toggle.
    pub is_function: bool,
    /// "Is Struct" toggle.
    pub is_struct: bool,
}

impl Toggles {
    /// Creates toggles with all three cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_enum: false,
            is_function: false,
            is_struct: false,
        }
    }

    /// Returns the kind that runs, or `None` when no toggle is set.
    #[must_use]
    pub const fn selected(&self) -> Option<DeclarationKind> {
        if self.is_enum {
            Some(DeclarationKind::Enum)
        } else if self.is_function {
            Some(DeclarationKind::Function)
        } else if self.is_struct {
            Some(DeclarationKind::Struct)
        } else {
            None
        }
    }

    /// Returns true if more than one toggle is set.
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        (self.is_enum as u8 + self.is_function as u8 + self.is_struct as u8) > 1
    }
}

impl From<DeclarationKind> for Toggles {
    fn from(kind: DeclarationKind) -> Self {
        Self {
            is_enum: kind == DeclarationKind::Enum,
            is_function: kind == DeclarationKind::Function,
            is_struct: kind == DeclarationKind::Struct,
        }
    }
}
