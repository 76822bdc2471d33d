//! Errors raised while building a pattern tree.
//!
//! Evaluation itself never fails; the only defects this crate reports are
//! the ones a tree builder makes when it asks for a function.

/// A pattern function could not be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("unknown pattern function `{name}`")]
    UnknownFunction { name: String },

    #[error("pattern function `{name}` expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
}

impl PatternError {
    /// Name of the function the builder asked for.
    pub fn function_name(&self) -> &str {
        match self {
            PatternError::UnknownFunction { name } => name.as_str(),
            PatternError::ArityMismatch { name, .. } => *name,
        }
    }
}
