//! Test helpers for pattern unit testing.
//!
//! Fixture builders for every element kind, plus fixtures that satisfy a
//! given modifier so table-driven tests can walk the whole vocabulary.

use std::sync::Arc;

use veil_ir::{
    EventDef, FieldAttributes, FieldDef, MemberAccess, MethodAttributes, MethodDef, PropertyDef,
    TypeAttributes, TypeDef, TypeVisibility,
};

use crate::{LiteralExpression, ModifierToken, PatternExpression};

/// Boxed literal argument, as a tree builder would hand it over.
pub fn literal(text: &str) -> Box<dyn PatternExpression> {
    Box::new(LiteralExpression::new(text))
}

pub fn type_def(visibility: TypeVisibility, flags: TypeAttributes) -> TypeDef {
    TypeDef::new("Acme", "Widget", flags.with_visibility(visibility))
}

/// A type shared as a declaring type.
pub fn owner(visibility: TypeVisibility, flags: TypeAttributes) -> Arc<TypeDef> {
    Arc::new(type_def(visibility, flags))
}

pub fn method(access: MemberAccess, flags: MethodAttributes) -> MethodDef {
    MethodDef::new("Run", flags.with_access(access))
}

pub fn field(access: MemberAccess, flags: FieldAttributes) -> FieldDef {
    FieldDef::new("count", flags.with_access(access))
}

pub fn property_with_getter(getter: MethodDef) -> PropertyDef {
    PropertyDef::new("Count").with_getter(getter)
}

pub fn event_with_adder(adder: MethodDef) -> EventDef {
    EventDef::new("Changed").with_adder(adder)
}

/// A type carrying `token`, or `None` when types never can.
pub fn type_with(token: ModifierToken) -> Option<TypeDef> {
    let (visibility, flags) = match token {
        ModifierToken::Public => (TypeVisibility::Public, TypeAttributes::empty()),
        ModifierToken::Private => (TypeVisibility::NestedPrivate, TypeAttributes::empty()),
        ModifierToken::Protected => (TypeVisibility::NestedFamily, TypeAttributes::empty()),
        ModifierToken::Internal => (TypeVisibility::NestedAssembly, TypeAttributes::empty()),
        ModifierToken::ProtectedInternal => (
            TypeVisibility::NestedFamilyOrAssembly,
            TypeAttributes::empty(),
        ),
        ModifierToken::PrivateProtected => (
            TypeVisibility::NestedFamilyAndAssembly,
            TypeAttributes::empty(),
        ),
        ModifierToken::Static => (
            TypeVisibility::NotPublic,
            TypeAttributes::ABSTRACT | TypeAttributes::SEALED,
        ),
        ModifierToken::Abstract => (TypeVisibility::NotPublic, TypeAttributes::ABSTRACT),
        ModifierToken::Sealed => (TypeVisibility::NotPublic, TypeAttributes::SEALED),
        ModifierToken::Virtual | ModifierToken::Override => return None,
    };
    Some(type_def(visibility, flags))
}

/// A method carrying `token`. Every token has a method reading.
pub fn method_with(token: ModifierToken) -> MethodDef {
    let (access, flags) = match token {
        ModifierToken::Public => (MemberAccess::Public, MethodAttributes::empty()),
        ModifierToken::Private => (MemberAccess::Private, MethodAttributes::empty()),
        ModifierToken::Protected => (MemberAccess::Family, MethodAttributes::empty()),
        ModifierToken::Internal => (MemberAccess::Assembly, MethodAttributes::empty()),
        ModifierToken::ProtectedInternal => {
            (MemberAccess::FamilyOrAssembly, MethodAttributes::empty())
        }
        ModifierToken::PrivateProtected => {
            (MemberAccess::FamilyAndAssembly, MethodAttributes::empty())
        }
        ModifierToken::Static => (MemberAccess::CompilerControlled, MethodAttributes::STATIC),
        ModifierToken::Virtual => (
            MemberAccess::CompilerControlled,
            MethodAttributes::VIRTUAL | MethodAttributes::NEW_SLOT,
        ),
        ModifierToken::Abstract => (
            MemberAccess::CompilerControlled,
            MethodAttributes::ABSTRACT | MethodAttributes::VIRTUAL | MethodAttributes::NEW_SLOT,
        ),
        ModifierToken::Sealed => (
            MemberAccess::CompilerControlled,
            MethodAttributes::VIRTUAL | MethodAttributes::FINAL,
        ),
        ModifierToken::Override => (MemberAccess::CompilerControlled, MethodAttributes::VIRTUAL),
    };
    method(access, flags)
}

/// A field carrying `token`, or `None` when fields never can.
pub fn field_with(token: ModifierToken) -> Option<FieldDef> {
    let (access, flags) = match token {
        ModifierToken::Public => (MemberAccess::Public, FieldAttributes::empty()),
        ModifierToken::Private => (MemberAccess::Private, FieldAttributes::empty()),
        ModifierToken::Protected => (MemberAccess::Family, FieldAttributes::empty()),
        ModifierToken::Internal => (MemberAccess::Assembly, FieldAttributes::empty()),
        ModifierToken::ProtectedInternal => {
            (MemberAccess::FamilyOrAssembly, FieldAttributes::empty())
        }
        ModifierToken::PrivateProtected => {
            (MemberAccess::FamilyAndAssembly, FieldAttributes::empty())
        }
        ModifierToken::Static => (MemberAccess::CompilerControlled, FieldAttributes::STATIC),
        ModifierToken::Virtual
        | ModifierToken::Abstract
        | ModifierToken::Sealed
        | ModifierToken::Override => return None,
    };
    Some(field(access, flags))
}

/// An accessor carrying `token`, or `None` when accessors never can.
pub fn accessor_with(token: ModifierToken) -> Option<MethodDef> {
    match token {
        ModifierToken::Sealed => None,
        _ => Some(method_with(token)),
    }
}

/// Every type flag set, nested public.
pub fn loaded_type() -> TypeDef {
    type_def(
        TypeVisibility::NestedPublic,
        TypeAttributes::ABSTRACT | TypeAttributes::SEALED | TypeAttributes::INTERFACE,
    )
}

/// Every behaviour flag set, public.
pub fn loaded_method() -> MethodDef {
    method(
        MemberAccess::Public,
        MethodAttributes::STATIC
            | MethodAttributes::FINAL
            | MethodAttributes::VIRTUAL
            | MethodAttributes::ABSTRACT,
    )
}

/// Every field flag set, public.
pub fn loaded_field() -> FieldDef {
    field(
        MemberAccess::Public,
        FieldAttributes::STATIC | FieldAttributes::INIT_ONLY | FieldAttributes::LITERAL,
    )
}
