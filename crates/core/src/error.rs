//! Build-time error model.

use thiserror::Error;

/// Result type used by builders.
pub type BuildResult<T> = Result<T, BuildError>;

/// Error produced by a builder's terminal `build` step.
///
/// Keep this focused on construction failures. Constraint violations found
/// after construction belong to the validation layer, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A required field was never set before `build` was called.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl BuildError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}
