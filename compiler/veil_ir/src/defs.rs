//! Definition snapshots: types, methods, fields, properties and events.
//!
//! These are the immutable views a module loader produces. Each definition
//! answers the accessibility questions rule patterns ask, in the same terms
//! the metadata tables use (family, assembly, nested visibility).
//!
//! Nested types and members point at their declaring type through a shared
//! `Arc<TypeDef>`, so one container can be referenced by many members
//! without copying.

use std::sync::Arc;

use crate::flags::{
    FieldAttributes, MemberAccess, MethodAttributes, TypeAttributes, TypeVisibility,
};

/// A type definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDef {
    namespace: String,
    name: String,
    attributes: TypeAttributes,
    declaring_type: Option<Arc<TypeDef>>,
}

impl TypeDef {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        attributes: TypeAttributes,
    ) -> Self {
        TypeDef {
            namespace: namespace.into(),
            name: name.into(),
            attributes,
            declaring_type: None,
        }
    }

    /// Nest this type inside `declaring_type`.
    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: Arc<TypeDef>) -> Self {
        self.declaring_type = Some(declaring_type);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace-qualified name, with `/` separating nested types.
    pub fn full_name(&self) -> String {
        match &self.declaring_type {
            Some(outer) => format!("{}/{}", outer.full_name(), self.name),
            None if self.namespace.is_empty() => self.name.clone(),
            None => format!("{}.{}", self.namespace, self.name),
        }
    }

    pub fn attributes(&self) -> TypeAttributes {
        self.attributes
    }

    /// The type this one is nested in, if any.
    pub fn declaring_type(&self) -> Option<&TypeDef> {
        self.declaring_type.as_deref()
    }

    #[inline]
    pub fn visibility(&self) -> TypeVisibility {
        self.attributes.visibility()
    }

    /// Top-level public.
    #[inline]
    pub fn is_public(&self) -> bool {
        self.visibility() == TypeVisibility::Public
    }

    #[inline]
    pub fn is_not_public(&self) -> bool {
        self.visibility() == TypeVisibility::NotPublic
    }

    #[inline]
    pub fn is_nested_public(&self) -> bool {
        self.visibility() == TypeVisibility::NestedPublic
    }

    #[inline]
    pub fn is_nested_private(&self) -> bool {
        self.visibility() == TypeVisibility::NestedPrivate
    }

    #[inline]
    pub fn is_nested_family(&self) -> bool {
        self.visibility() == TypeVisibility::NestedFamily
    }

    #[inline]
    pub fn is_nested_assembly(&self) -> bool {
        self.visibility() == TypeVisibility::NestedAssembly
    }

    #[inline]
    pub fn is_nested_family_or_assembly(&self) -> bool {
        self.visibility() == TypeVisibility::NestedFamilyOrAssembly
    }

    #[inline]
    pub fn is_nested_family_and_assembly(&self) -> bool {
        self.visibility() == TypeVisibility::NestedFamilyAndAssembly
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.attributes.contains(TypeAttributes::INTERFACE)
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.attributes.contains(TypeAttributes::ABSTRACT)
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.attributes.contains(TypeAttributes::SEALED)
    }
}

/// A method definition. Also used for property and event accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDef {
    name: String,
    attributes: MethodAttributes,
    declaring_type: Option<Arc<TypeDef>>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, attributes: MethodAttributes) -> Self {
        MethodDef {
            name: name.into(),
            attributes,
            declaring_type: None,
        }
    }

    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: Arc<TypeDef>) -> Self {
        self.declaring_type = Some(declaring_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> MethodAttributes {
        self.attributes
    }

    pub fn declaring_type(&self) -> Option<&TypeDef> {
        self.declaring_type.as_deref()
    }

    #[inline]
    pub fn access(&self) -> MemberAccess {
        self.attributes.access()
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        self.access() == MemberAccess::Public
    }

    #[inline]
    pub fn is_private(&self) -> bool {
        self.access() == MemberAccess::Private
    }

    #[inline]
    pub fn is_family(&self) -> bool {
        self.access() == MemberAccess::Family
    }

    #[inline]
    pub fn is_assembly(&self) -> bool {
        self.access() == MemberAccess::Assembly
    }

    #[inline]
    pub fn is_family_or_assembly(&self) -> bool {
        self.access() == MemberAccess::FamilyOrAssembly
    }

    #[inline]
    pub fn is_family_and_assembly(&self) -> bool {
        self.access() == MemberAccess::FamilyAndAssembly
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.attributes.contains(MethodAttributes::STATIC)
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.attributes.contains(MethodAttributes::VIRTUAL)
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.attributes.contains(MethodAttributes::ABSTRACT)
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.attributes.contains(MethodAttributes::FINAL)
    }

    /// The method occupies its parent's method-table slot.
    #[inline]
    pub fn is_reuse_slot(&self) -> bool {
        !self.attributes.contains(MethodAttributes::NEW_SLOT)
    }

    #[inline]
    pub fn is_new_slot(&self) -> bool {
        self.attributes.contains(MethodAttributes::NEW_SLOT)
    }
}

/// A field definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    attributes: FieldAttributes,
    declaring_type: Option<Arc<TypeDef>>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, attributes: FieldAttributes) -> Self {
        FieldDef {
            name: name.into(),
            attributes,
            declaring_type: None,
        }
    }

    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: Arc<TypeDef>) -> Self {
        self.declaring_type = Some(declaring_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> FieldAttributes {
        self.attributes
    }

    pub fn declaring_type(&self) -> Option<&TypeDef> {
        self.declaring_type.as_deref()
    }

    #[inline]
    pub fn access(&self) -> MemberAccess {
        self.attributes.access()
    }

    #[inline]
    pub fn is_public(&self) -> bool {
        self.access() == MemberAccess::Public
    }

    #[inline]
    pub fn is_private(&self) -> bool {
        self.access() == MemberAccess::Private
    }

    #[inline]
    pub fn is_family(&self) -> bool {
        self.access() == MemberAccess::Family
    }

    #[inline]
    pub fn is_assembly(&self) -> bool {
        self.access() == MemberAccess::Assembly
    }

    #[inline]
    pub fn is_family_or_assembly(&self) -> bool {
        self.access() == MemberAccess::FamilyOrAssembly
    }

    #[inline]
    pub fn is_family_and_assembly(&self) -> bool {
        self.access() == MemberAccess::FamilyAndAssembly
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.attributes.contains(FieldAttributes::STATIC)
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        self.attributes.contains(FieldAttributes::LITERAL)
    }

    #[inline]
    pub fn is_init_only(&self) -> bool {
        self.attributes.contains(FieldAttributes::INIT_ONLY)
    }
}

/// A property definition and its accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDef {
    name: String,
    getter: Option<MethodDef>,
    setter: Option<MethodDef>,
    declaring_type: Option<Arc<TypeDef>>,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>) -> Self {
        PropertyDef {
            name: name.into(),
            getter: None,
            setter: None,
            declaring_type: None,
        }
    }

    #[must_use]
    pub fn with_getter(mut self, getter: MethodDef) -> Self {
        self.getter = Some(getter);
        self
    }

    #[must_use]
    pub fn with_setter(mut self, setter: MethodDef) -> Self {
        self.setter = Some(setter);
        self
    }

    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: Arc<TypeDef>) -> Self {
        self.declaring_type = Some(declaring_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_method(&self) -> Option<&MethodDef> {
        self.getter.as_ref()
    }

    pub fn set_method(&self) -> Option<&MethodDef> {
        self.setter.as_ref()
    }

    /// Every accessor that is present, getter first.
    pub fn accessors(&self) -> impl Iterator<Item = &MethodDef> {
        self.getter.iter().chain(self.setter.iter())
    }

    pub fn declaring_type(&self) -> Option<&TypeDef> {
        self.declaring_type.as_deref()
    }
}

/// An event definition and its accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDef {
    name: String,
    adder: Option<MethodDef>,
    remover: Option<MethodDef>,
    invoker: Option<MethodDef>,
    declaring_type: Option<Arc<TypeDef>>,
}

impl EventDef {
    pub fn new(name: impl Into<String>) -> Self {
        EventDef {
            name: name.into(),
            adder: None,
            remover: None,
            invoker: None,
            declaring_type: None,
        }
    }

    #[must_use]
    pub fn with_adder(mut self, adder: MethodDef) -> Self {
        self.adder = Some(adder);
        self
    }

    #[must_use]
    pub fn with_remover(mut self, remover: MethodDef) -> Self {
        self.remover = Some(remover);
        self
    }

    #[must_use]
    pub fn with_invoker(mut self, invoker: MethodDef) -> Self {
        self.invoker = Some(invoker);
        self
    }

    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: Arc<TypeDef>) -> Self {
        self.declaring_type = Some(declaring_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_method(&self) -> Option<&MethodDef> {
        self.adder.as_ref()
    }

    pub fn remove_method(&self) -> Option<&MethodDef> {
        self.remover.as_ref()
    }

    pub fn invoke_method(&self) -> Option<&MethodDef> {
        self.invoker.as_ref()
    }

    /// Every accessor that is present, adder first.
    pub fn accessors(&self) -> impl Iterator<Item = &MethodDef> {
        self.adder
            .iter()
            .chain(self.remover.iter())
            .chain(self.invoker.iter())
    }

    pub fn declaring_type(&self) -> Option<&TypeDef> {
        self.declaring_type.as_deref()
    }
}
