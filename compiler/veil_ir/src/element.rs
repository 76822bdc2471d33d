//! The element a rule pattern is evaluated against.

use std::fmt;

use crate::defs::{EventDef, FieldDef, MethodDef, PropertyDef, TypeDef};

/// One borrowed metadata definition.
///
/// The kind set is closed; patterns dispatch with an exhaustive `match`
/// so a kind that has no meaning for a modifier is visible at the match
/// site instead of falling through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Element<'a> {
    Type(&'a TypeDef),
    Method(&'a MethodDef),
    Field(&'a FieldDef),
    Property(&'a PropertyDef),
    Event(&'a EventDef),
}

/// Discriminant of [`Element`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Type,
    Method,
    Field,
    Property,
    Event,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Type,
        ElementKind::Method,
        ElementKind::Field,
        ElementKind::Property,
        ElementKind::Event,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::Type => "type",
            ElementKind::Method => "method",
            ElementKind::Field => "field",
            ElementKind::Property => "property",
            ElementKind::Event => "event",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> Element<'a> {
    pub fn kind(self) -> ElementKind {
        match self {
            Element::Type(_) => ElementKind::Type,
            Element::Method(_) => ElementKind::Method,
            Element::Field(_) => ElementKind::Field,
            Element::Property(_) => ElementKind::Property,
            Element::Event(_) => ElementKind::Event,
        }
    }

    pub fn name(self) -> &'a str {
        match self {
            Element::Type(ty) => ty.name(),
            Element::Method(method) => method.name(),
            Element::Field(field) => field.name(),
            Element::Property(property) => property.name(),
            Element::Event(event) => event.name(),
        }
    }

    /// The type that contains this element.
    ///
    /// For a type this is the type it is nested in; top-level types and
    /// members detached from any type have none.
    pub fn declaring_type(self) -> Option<&'a TypeDef> {
        match self {
            Element::Type(ty) => ty.declaring_type(),
            Element::Method(method) => method.declaring_type(),
            Element::Field(field) => field.declaring_type(),
            Element::Property(property) => property.declaring_type(),
            Element::Event(event) => event.declaring_type(),
        }
    }
}

impl<'a> From<&'a TypeDef> for Element<'a> {
    fn from(ty: &'a TypeDef) -> Self {
        Element::Type(ty)
    }
}

impl<'a> From<&'a MethodDef> for Element<'a> {
    fn from(method: &'a MethodDef) -> Self {
        Element::Method(method)
    }
}

impl<'a> From<&'a FieldDef> for Element<'a> {
    fn from(field: &'a FieldDef) -> Self {
        Element::Field(field)
    }
}

impl<'a> From<&'a PropertyDef> for Element<'a> {
    fn from(property: &'a PropertyDef) -> Self {
        Element::Property(property)
    }
}

impl<'a> From<&'a EventDef> for Element<'a> {
    fn from(event: &'a EventDef) -> Self {
        Element::Event(event)
    }
}
