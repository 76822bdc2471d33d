//! Pattern registry for looking up and building functions by name.

use crate::{
    HasModifierFunction, PatternError, PatternExpression, PatternFunction,
    TypeHasModifierFunction,
};

/// The functions this crate provides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    HasModifier,
    TypeHasModifier,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 2] = [FunctionKind::HasModifier, FunctionKind::TypeHasModifier];

    /// Name in rule text.
    pub const fn name(self) -> &'static str {
        match self {
            FunctionKind::HasModifier => HasModifierFunction::NAME,
            FunctionKind::TypeHasModifier => TypeHasModifierFunction::NAME,
        }
    }

    /// Number of argument nodes the function takes.
    pub const fn arity(self) -> usize {
        match self {
            FunctionKind::HasModifier | FunctionKind::TypeHasModifier => 1,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Registry mapping function names to buildable functions.
///
/// Uses direct enum dispatch instead of `HashMap` lookup; the set of
/// functions is fixed at compile time.
pub struct PatternRegistry {
    // Marker field to prevent external construction
    _private: (),
}

impl PatternRegistry {
    /// Create a new registry with all modifier functions registered.
    pub fn new() -> Self {
        PatternRegistry { _private: () }
    }

    pub fn lookup(&self, name: &str) -> Option<FunctionKind> {
        FunctionKind::from_name(name)
    }

    /// Get all registered function kinds.
    pub fn kinds(&self) -> impl Iterator<Item = FunctionKind> {
        FunctionKind::ALL.into_iter()
    }

    /// Get the number of registered functions.
    pub fn len(&self) -> usize {
        FunctionKind::ALL.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Build the function registered under `name`.
    ///
    /// This is where a malformed tree is caught: an unknown name or a wrong
    /// argument count fails here, never during evaluation.
    pub fn build(
        &self,
        name: &str,
        arguments: Vec<Box<dyn PatternExpression>>,
    ) -> Result<Box<dyn PatternFunction>, PatternError> {
        let Some(kind) = self.lookup(name) else {
            return Err(PatternError::UnknownFunction {
                name: name.to_owned(),
            });
        };
        self.instantiate(kind, arguments)
    }

    /// Build a function of a known kind.
    pub fn instantiate(
        &self,
        kind: FunctionKind,
        arguments: Vec<Box<dyn PatternExpression>>,
    ) -> Result<Box<dyn PatternFunction>, PatternError> {
        let got = arguments.len();
        let arity_mismatch = || PatternError::ArityMismatch {
            name: kind.name(),
            expected: kind.arity(),
            got,
        };
        if got != kind.arity() {
            return Err(arity_mismatch());
        }

        let [modifiers]: [Box<dyn PatternExpression>; 1] =
            arguments.try_into().map_err(|_| arity_mismatch())?;
        let function: Box<dyn PatternFunction> = match kind {
            FunctionKind::HasModifier => Box::new(HasModifierFunction::new(modifiers)),
            FunctionKind::TypeHasModifier => Box::new(TypeHasModifierFunction::new(modifiers)),
        };

        tracing::debug!(function = kind.name(), arguments = got, "built pattern function");
        Ok(function)
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
