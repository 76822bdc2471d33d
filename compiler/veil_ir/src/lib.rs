//! Veil IR - metadata element model.
//!
//! This crate contains the definitions rule patterns inspect:
//! - Attribute flag words (`TypeAttributes`, `MethodAttributes`, `FieldAttributes`)
//! - Decoded accessibility (`TypeVisibility`, `MemberAccess`)
//! - Definition snapshots (`TypeDef`, `MethodDef`, `FieldDef`, `PropertyDef`, `EventDef`)
//! - The `Element` sum type handed to pattern evaluation
//!
//! Definitions are immutable once built. Loaders construct them with the
//! `with_*` builders and share declaring types through `Arc`, so elements
//! are `Send + Sync` and can be evaluated from any thread.

mod defs;
mod element;
mod flags;

pub use defs::{EventDef, FieldDef, MethodDef, PropertyDef, TypeDef};
pub use element::{Element, ElementKind};
pub use flags::{
    FieldAttributes, MemberAccess, MethodAttributes, TypeAttributes, TypeVisibility,
};
