//! Literal argument nodes.

use veil_ir::Element;

use crate::{PatternExpression, Value};

/// A node that evaluates to the same value for every element.
///
/// Syntax: `"public|static"` as a function argument.
pub struct LiteralExpression {
    value: Value,
}

impl LiteralExpression {
    pub fn new(value: impl Into<Value>) -> Self {
        LiteralExpression {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl PatternExpression for LiteralExpression {
    fn evaluate(&self, _element: Element<'_>) -> Value {
        self.value.clone()
    }
}
