//! `type-has-modifier` pattern implementation.

use veil_ir::Element;

use crate::{
    ModifierExpression, ModifierVocabulary, PatternExpression, PatternFunction, Value,
};

/// Whether the type enclosing the element carries any of the listed modifiers.
///
/// Syntax: `type-has-modifier("public|sealed")`
///
/// Only type-level modifiers apply (`virtual` and `override` never match).
/// Unlike `has-modifier`, each piece is trimmed and lowercased before
/// lookup, so `" PUBLIC "` matches a public type. Elements without a
/// declaring type, including top-level types, never match and the argument
/// is not evaluated for them.
pub struct TypeHasModifierFunction {
    arguments: [Box<dyn PatternExpression>; 1],
}

impl TypeHasModifierFunction {
    pub const NAME: &'static str = "type-has-modifier";

    pub fn new(modifiers: Box<dyn PatternExpression>) -> Self {
        TypeHasModifierFunction {
            arguments: [modifiers],
        }
    }

    /// Resolve the declaring type of `element` and test each listed modifier on it.
    pub fn test(&self, element: Element<'_>) -> bool {
        let Some(declaring_type) = element.declaring_type() else {
            tracing::trace!(
                function = Self::NAME,
                kind = %element.kind(),
                element = element.name(),
                "no enclosing type"
            );
            return false;
        };

        let [modifiers] = &self.arguments;
        let text = modifiers.evaluate(element);
        let expression = ModifierExpression::parse_normalized(&text.display_value());

        let vocabulary = ModifierVocabulary::standard();
        let matched =
            expression.matches_any(|token| vocabulary.matches_type(token, declaring_type));

        tracing::trace!(
            function = Self::NAME,
            kind = %element.kind(),
            element = element.name(),
            enclosing = declaring_type.name(),
            matched,
            "evaluated"
        );
        matched
    }
}

impl PatternExpression for TypeHasModifierFunction {
    fn evaluate(&self, element: Element<'_>) -> Value {
        Value::Bool(self.test(element))
    }
}

impl PatternFunction for TypeHasModifierFunction {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn argument_count(&self) -> usize {
        1
    }

    fn arguments(&self) -> &[Box<dyn PatternExpression>] {
        &self.arguments
    }
}

#[cfg(test)]
mod tests;
