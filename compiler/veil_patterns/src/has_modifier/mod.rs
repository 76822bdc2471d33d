//! `has-modifier` pattern implementation.

use veil_ir::Element;

use crate::{
    ModifierExpression, ModifierVocabulary, PatternExpression, PatternFunction, Value,
};

/// Whether the element itself carries any of the listed modifiers.
///
/// Syntax: `has-modifier("public|internal")`
///
/// Pieces are compared with the canonical spellings exactly: no trimming,
/// no case folding, so `" public"` never matches.
pub struct HasModifierFunction {
    arguments: [Box<dyn PatternExpression>; 1],
}

impl HasModifierFunction {
    pub const NAME: &'static str = "has-modifier";

    pub fn new(modifiers: Box<dyn PatternExpression>) -> Self {
        HasModifierFunction {
            arguments: [modifiers],
        }
    }

    /// Evaluate the argument for `element` and test each listed modifier.
    pub fn test(&self, element: Element<'_>) -> bool {
        let [modifiers] = &self.arguments;
        let text = modifiers.evaluate(element);
        let expression = ModifierExpression::parse_exact(&text.display_value());

        let vocabulary = ModifierVocabulary::standard();
        let matched = expression.matches_any(|token| vocabulary.matches(token, element));

        tracing::trace!(
            function = Self::NAME,
            kind = %element.kind(),
            element = element.name(),
            matched,
            "evaluated"
        );
        matched
    }
}

impl PatternExpression for HasModifierFunction {
    fn evaluate(&self, element: Element<'_>) -> Value {
        Value::Bool(self.test(element))
    }
}

impl PatternFunction for HasModifierFunction {
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
