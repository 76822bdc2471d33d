//! Attribute flag words for metadata definitions.
//!
//! The layouts follow the ECMA-335 `TypeAttributes`, `MethodAttributes` and
//! `FieldAttributes` tables, which is what module loaders hand us.
//!
//! # Design
//!
//! Accessibility occupies the low three bits of each word and is an
//! enumerated value, not a set of independent bits. `bitflags` only models
//! the single-bit flags plus the mask; the enumerated part is decoded into
//! [`TypeVisibility`] or [`MemberAccess`] so callers never compare raw bits.

use bitflags::bitflags;

bitflags! {
    /// Type definition attributes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeAttributes: u32 {
        /// Visibility field, decoded by [`TypeAttributes::visibility`].
        const VISIBILITY_MASK = 0x0000_0007;

        /// Type is an interface.
        const INTERFACE = 0x0000_0020;
        /// Type cannot be instantiated.
        const ABSTRACT = 0x0000_0080;
        /// Type cannot be derived from.
        const SEALED = 0x0000_0100;
        /// Name carries special meaning to tools.
        const SPECIAL_NAME = 0x0000_0400;
        /// Type is imported.
        const IMPORT = 0x0000_1000;
        /// Type is serializable.
        const SERIALIZABLE = 0x0000_2000;
        /// Static initializer may run before first static field access.
        const BEFORE_FIELD_INIT = 0x0010_0000;
    }
}

bitflags! {
    /// Method definition attributes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct MethodAttributes: u32 {
        /// Member access field, decoded by [`MethodAttributes::access`].
        const MEMBER_ACCESS_MASK = 0x0000_0007;

        /// Defined on the type rather than per instance.
        const STATIC = 0x0000_0010;
        /// Cannot be overridden.
        const FINAL = 0x0000_0020;
        /// Dispatched through the method table.
        const VIRTUAL = 0x0000_0040;
        /// Hidden by name and signature, not just name.
        const HIDE_BY_SIG = 0x0000_0080;
        /// Always gets a fresh method-table slot. Clear means the method
        /// reuses its parent's slot.
        const NEW_SLOT = 0x0000_0100;
        /// Overridable only where the method is accessible.
        const CHECK_ACCESS_ON_OVERRIDE = 0x0000_0200;
        /// No implementation provided.
        const ABSTRACT = 0x0000_0400;
        /// Name carries special meaning to tools (accessors, operators).
        const SPECIAL_NAME = 0x0000_0800;
        /// Name carries special meaning to the runtime.
        const RT_SPECIAL_NAME = 0x0000_1000;
        /// Implementation forwarded through platform invoke.
        const PINVOKE_IMPL = 0x0000_2000;
    }
}

bitflags! {
    /// Field definition attributes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct FieldAttributes: u32 {
        /// Member access field, decoded by [`FieldAttributes::access`].
        const FIELD_ACCESS_MASK = 0x0000_0007;

        /// Defined on the type rather than per instance.
        const STATIC = 0x0000_0010;
        /// Assignable only during initialization.
        const INIT_ONLY = 0x0000_0020;
        /// Compile-time constant.
        const LITERAL = 0x0000_0040;
        /// Skipped when the type is remoted.
        const NOT_SERIALIZED = 0x0000_0080;
        /// Has an RVA-backed initial value.
        const HAS_FIELD_RVA = 0x0000_0100;
        /// Name carries special meaning to tools.
        const SPECIAL_NAME = 0x0000_0200;
        /// Name carries special meaning to the runtime.
        const RT_SPECIAL_NAME = 0x0000_0400;
    }
}

/// Decoded visibility of a type.
///
/// Only top-level types use `NotPublic`/`Public`; every `Nested*` value
/// implies the type has a declaring type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeVisibility {
    NotPublic,
    Public,
    NestedPublic,
    NestedPrivate,
    NestedFamily,
    NestedAssembly,
    NestedFamilyAndAssembly,
    NestedFamilyOrAssembly,
}

impl TypeVisibility {
    /// Decode the low three bits of a `TypeAttributes` word.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & TypeAttributes::VISIBILITY_MASK.bits() {
            0 => TypeVisibility::NotPublic,
            1 => TypeVisibility::Public,
            2 => TypeVisibility::NestedPublic,
            3 => TypeVisibility::NestedPrivate,
            4 => TypeVisibility::NestedFamily,
            5 => TypeVisibility::NestedAssembly,
            6 => TypeVisibility::NestedFamilyAndAssembly,
            _ => TypeVisibility::NestedFamilyOrAssembly,
        }
    }

    /// Encoded value for the visibility field.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            TypeVisibility::NotPublic => 0,
            TypeVisibility::Public => 1,
            TypeVisibility::NestedPublic => 2,
            TypeVisibility::NestedPrivate => 3,
            TypeVisibility::NestedFamily => 4,
            TypeVisibility::NestedAssembly => 5,
            TypeVisibility::NestedFamilyAndAssembly => 6,
            TypeVisibility::NestedFamilyOrAssembly => 7,
        }
    }

    /// Check if this is one of the nested visibilities.
    #[inline]
    pub const fn is_nested(self) -> bool {
        !matches!(self, TypeVisibility::NotPublic | TypeVisibility::Public)
    }
}

/// Decoded member access of a method or field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemberAccess {
    /// Not referenceable; also used for the reserved encoding 7.
    CompilerControlled,
    Private,
    FamilyAndAssembly,
    Assembly,
    Family,
    FamilyOrAssembly,
    Public,
}

impl MemberAccess {
    /// Decode the low three bits of a method or field attribute word.
    ///
    /// The reserved value 7 decodes to `CompilerControlled`, which grants no
    /// accessibility.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0x7 {
            1 => MemberAccess::Private,
            2 => MemberAccess::FamilyAndAssembly,
            3 => MemberAccess::Assembly,
            4 => MemberAccess::Family,
            5 => MemberAccess::FamilyOrAssembly,
            6 => MemberAccess::Public,
            _ => MemberAccess::CompilerControlled,
        }
    }

    /// Encoded value for the access field.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            MemberAccess::CompilerControlled => 0,
            MemberAccess::Private => 1,
            MemberAccess::FamilyAndAssembly => 2,
            MemberAccess::Assembly => 3,
            MemberAccess::Family => 4,
            MemberAccess::FamilyOrAssembly => 5,
            MemberAccess::Public => 6,
        }
    }
}

impl TypeAttributes {
    /// Decode the visibility field.
    #[inline]
    pub const fn visibility(self) -> TypeVisibility {
        TypeVisibility::from_bits(self.bits())
    }

    /// Replace the visibility field, keeping every other flag.
    #[inline]
    #[must_use]
    pub const fn with_visibility(self, visibility: TypeVisibility) -> Self {
        Self::from_bits_retain(
            (self.bits() & !Self::VISIBILITY_MASK.bits()) | visibility.bits(),
        )
    }
}

impl MethodAttributes {
    /// Decode the member access field.
    #[inline]
    pub const fn access(self) -> MemberAccess {
        MemberAccess::from_bits(self.bits())
    }

    /// Replace the member access field, keeping every other flag.
    #[inline]
    #[must_use]
    pub const fn with_access(self, access: MemberAccess) -> Self {
        Self::from_bits_retain((self.bits() & !Self::MEMBER_ACCESS_MASK.bits()) | access.bits())
    }
}

impl FieldAttributes {
    /// Decode the member access field.
    #[inline]
    pub const fn access(self) -> MemberAccess {
        MemberAccess::from_bits(self.bits())
    }

    /// Replace the member access field, keeping every other flag.
    #[inline]
    #[must_use]
    pub const fn with_access(self, access: MemberAccess) -> Self {
        Self::from_bits_retain((self.bits() & !Self::FIELD_ACCESS_MASK.bits()) | access.bits())
    }
}

impl Default for TypeAttributes {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MethodAttributes {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for FieldAttributes {
    fn default() -> Self {
        Self::empty()
    }
}
