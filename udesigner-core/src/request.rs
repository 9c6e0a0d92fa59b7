//! Declaration request model.
//!
//! A request is the full input to one generation: the declaration name, the
//! field identifiers and the type identifiers as entered, plus the kind of
//! declaration to produce.

use crate::error::Error;
use crate::parse::{split_list, split_list_trimmed};
use std::fmt;
use std::str::FromStr;

/// Kind of declaration to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `USTRUCT` block with one `UPROPERTY` per field/type pair.
    Struct,
    /// `UENUM` backed by `uint8`, one entry per field.
    Enum,
    /// `UFUNCTION` signature; the first type is the return type.
    Function,
}

impl DeclarationKind {
    /// All kinds, in the order they are presented to the user.
    pub const ALL: [Self; 3] = [Self::Struct, Self::Enum, Self::Function];

    /// Returns the reflection macro emitted for this kind.
    #[must_use]
    pub const fn macro_name(self) -> &'static str {
        match self {
            Self::Struct => "USTRUCT",
            Self::Enum => "UENUM",
            Self::Function => "UFUNCTION",
        }
    }

    /// Returns the lowercase keyword accepted on input.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.macro_name())
    }
}

impl FromStr for DeclarationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                value.eq_ignore_ascii_case(kind.keyword())
                    || value.eq_ignore_ascii_case(kind.macro_name())
            })
            .ok_or_else(|| Error::unknown_kind(value))
    }
}

/// A struct property: one field identifier paired with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a> {
    /// Field identifier.
    pub name: &'a str,
    /// Type identifier.
    pub ty: &'a str,
}

/// A function parameter, rendered as `"<type> <field>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    /// Type identifier.
    pub ty: &'a str,
    /// Parameter identifier.
    pub name: &'a str,
}

impl fmt::Display for Parameter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Full input for a single declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationRequest {
    /// Declaration name.
    pub name: String,
    /// Field identifiers, in input order.
    pub fields: Vec<String>,
    /// Type identifiers, in input order.
    pub types: Vec<String>,
    /// Kind of declaration to produce.
    pub kind: DeclarationKind,
}

impl DeclarationRequest {
    /// Creates a request from already split lists.
    pub fn new<N, F, T>(name: N, fields: F, types: T, kind: DeclarationKind) -> Self
    where
        N: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            types: types.into_iter().map(Into::into).collect(),
            kind,
        }
    }

    /// Creates a request from raw form text, splitting both lists on commas.
    #[must_use]
    pub fn from_form(name: &str, fields: &str, types: &str, kind: DeclarationKind) -> Self {
        Self {
            name: name.to_owned(),
            fields: split_list(fields),
            types: split_list(types),
            kind,
        }
    }

    /// Like [`from_form`](Self::from_form) but trims whitespace around each
    /// list entry.
    #[must_use]
    pub fn from_form_trimmed(name: &str, fields: &str, types: &str, kind: DeclarationKind) -> Self {
        Self {
            name: name.to_owned(),
            fields: split_list_trimmed(fields),
            types: split_list_trimmed(types),
            kind,
        }
    }

    /// Returns the function return type: the first type, or `""` if none.
    #[must_use]
    pub fn return_type(&self) -> &str {
        self.types.first().map_or("", String::as_str)
    }

    /// Pairs fields with types by position, stopping at the shorter list.
    pub fn properties(&self) -> impl Iterator<Item = Property<'_>> {
        self.fields
            .iter()
            .zip(&self.types)
            .map(|(name, ty)| Property {
                name: name.as_str(),
                ty: ty.as_str(),
            })
    }

    /// Pairs the types after the return type with fields by position,
    /// stopping at the shorter list.
    pub fn parameters(&self) -> impl Iterator<Item = Parameter<'_>> {
        self.types
            .iter()
            .skip(1)
            .zip(&self.fields)
            .map(|(ty, name)| Parameter {
                ty: ty.as_str(),
                name: name.as_str(),
            })
    }

    /// Number of fields that take part in pairing.
    ///
    /// An empty field box splits to a single empty entry; for functions that
    /// means no parameters, so it counts as zero.
    #[must_use]
    pub fn field_count(&self) -> usize {
        match (self.kind, self.fields.as_slice()) {
            (DeclarationKind::Function, [only]) if only.is_empty() => 0,
            _ => self.fields.len(),
        }
    }

    /// Number of type identifiers that pair with fields for this kind.
    #[must_use]
    pub fn paired_types(&self) -> usize {
        match self.kind {
            DeclarationKind::Struct => self.types.len(),
            DeclarationKind::Function => self.types.len().saturating_sub(1),
            DeclarationKind::Enum => self.field_count(),
        }
    }

    /// Number of list entries that positional pairing drops.
    #[must_use]
    pub fn dropped_entries(&self) -> usize {
        self.field_count().abs_diff(self.paired_types())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("struct".parse::<DeclarationKind>(), Ok(DeclarationKind::Struct));
        assert_eq!("UENUM".parse::<DeclarationKind>(), Ok(DeclarationKind::Enum));
        assert_eq!(" Function ".parse::<DeclarationKind>(), Ok(DeclarationKind::Function));
        assert!("class".parse::<DeclarationKind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DeclarationKind::Function.to_string(), "UFUNCTION");
    }

    #[test]
    fn test_from_form_splits_lists() {
        let req = DeclarationRequest::from_form("S", "a,b", "int32,bool", DeclarationKind::Struct);
        assert_eq!(req.fields, vec!["a", "b"]);
        assert_eq!(req.types, vec!["int32", "bool"]);
    }

    #[test]
    fn test_properties_truncate() {
        let req = DeclarationRequest::new("S", ["a", "b", "c"], ["int"], DeclarationKind::Struct);
        let props: Vec<_> = req.properties().collect();
        assert_eq!(props, vec![Property { name: "a", ty: "int" }]);
        assert_eq!(req.dropped_entries(), 2);
    }

    #[test]
    fn test_parameters_skip_return_type() {
        let req = DeclarationRequest::new(
            "DoThing",
            ["A", "B"],
            ["void", "int32", "bool"],
            DeclarationKind::Function,
        );
        assert_eq!(req.return_type(), "void");
        let params: Vec<String> = req.parameters().map(|p| p.to_string()).collect();
        assert_eq!(params, vec!["int32 A", "bool B"]);
        assert_eq!(req.dropped_entries(), 0);
    }

    #[test]
    fn test_parameters_drop_excess_fields() {
        let req = DeclarationRequest::new("F", ["A", "B"], ["void", "int32"], DeclarationKind::Function);
        assert_eq!(req.parameters().count(), 1);
        assert_eq!(req.dropped_entries(), 1);
    }

    #[test]
    fn test_return_type_empty_types() {
        let req = DeclarationRequest::new("F", ["A"], Vec::<String>::new(), DeclarationKind::Function);
        assert_eq!(req.return_type(), "");
        assert_eq!(req.parameters().count(), 0);
    }

    #[test]
    fn test_function_without_fields_drops_nothing() {
        let req = DeclarationRequest::from_form("Reset", "", "void", DeclarationKind::Function);
        assert_eq!(req.field_count(), 0);
        assert_eq!(req.dropped_entries(), 0);
        assert_eq!(req.parameters().count(), 0);
    }

    #[test]
    fn test_empty_struct_field_still_counts() {
        let req = DeclarationRequest::from_form("S", "", "", DeclarationKind::Struct);
        assert_eq!(req.field_count(), 1);
        assert_eq!(req.dropped_entries(), 0);
    }

    #[test]
    fn test_enum_drops_nothing() {
        let req = DeclarationRequest::new("E", ["A", "B"], ["x"], DeclarationKind::Enum);
        assert_eq!(req.dropped_entries(), 0);
    }
}
