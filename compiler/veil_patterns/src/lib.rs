//! Veil Patterns - pattern functions for Veil rules.
//!
//! This crate provides:
//! - Runtime value type (`Value`) produced by pattern expressions
//! - The pattern contracts (`PatternExpression`, `PatternFunction`)
//! - The modifier vocabulary shared by the modifier predicates
//! - Built-in predicates (`has-modifier`, `type-has-modifier`)
//! - Function registry and construction errors
//!
//! # Architecture
//!
//! Rule text is parsed elsewhere into a tree of named functions whose
//! arguments are themselves expressions. This crate supplies the leaves of
//! that tree that answer modifier questions:
//! - New functions are added by implementing `PatternFunction`
//! - `PatternRegistry` maps a function name to its kind and builds it,
//!   checking arity once at construction
//! - Evaluation is total: a function never fails once built
//!
//! Both predicates read the same `ModifierVocabulary` table, so the
//! element-level and enclosing-type-level answers cannot drift apart.

mod errors;
mod has_modifier;
mod literal;
mod modifiers;
mod registry;
mod type_has_modifier;
mod value;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

use veil_ir::Element;

pub use errors::PatternError;
pub use has_modifier::HasModifierFunction;
pub use literal::LiteralExpression;
pub use modifiers::{ModifierExpression, ModifierRule, ModifierToken, ModifierVocabulary};
pub use registry::{FunctionKind, PatternRegistry};
pub use type_has_modifier::TypeHasModifierFunction;
pub use value::Value;

/// A node of a pattern tree that can be evaluated against an element.
///
/// Implementations hold no per-call state; one tree is evaluated against
/// many elements, possibly from several threads at once.
pub trait PatternExpression: Send + Sync {
    /// Evaluate this node for `element`.
    fn evaluate(&self, element: Element<'_>) -> Value;
}

/// A named function node with a fixed number of argument nodes.
///
/// # Open/Closed Principle
/// Adding a new function requires:
/// 1. Create a new module implementing `PatternFunction`
/// 2. Add a `FunctionKind` variant
/// 3. Build it in `PatternRegistry::instantiate`
pub trait PatternFunction: PatternExpression {
    /// The function's name in rule text (e.g., "has-modifier").
    fn name(&self) -> &'static str;

    /// Number of arguments the function takes.
    fn argument_count(&self) -> usize;

    /// Argument nodes, in call order.
    fn arguments(&self) -> &[Box<dyn PatternExpression>];
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=veil_patterns=debug` or `RUST_LOG=veil_patterns=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
