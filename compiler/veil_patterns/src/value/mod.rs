//! Runtime values produced by pattern expressions.
//!
//! The host evaluator is untyped at function boundaries, so every node
//! yields a `Value`. Only the shapes modifier patterns need exist here:
//! booleans for predicate results and strings for arguments.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A value flowing through a pattern tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    /// Shared so cloning an argument literal per evaluation stays cheap.
    Str(Arc<str>),
}

impl Value {
    /// Create a string value.
    pub fn string(text: impl Into<Arc<str>>) -> Self {
        Value::Str(text.into())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(&**s),
            Value::Bool(_) => None,
        }
    }

    /// Whether a rule treating this value as a condition would select.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
        }
    }

    /// Text of the value without quoting.
    ///
    /// This is what a function sees when it reads an argument as a string.
    pub fn display_value(&self) -> Cow<'_, str> {
        match self {
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Str(s) => Cow::Borrowed(&**s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::string(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::string(text)
    }
}
