//! Single-field constraint: a named predicate with a violation message.

use serde::{Deserialize, Serialize};

/// One violated constraint, reported against a field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Path of the offending field (for flat value objects, the field name).
    pub field_path: String,
    /// Human-readable message, e.g. `"must not be blank"`.
    pub message: String,
}

/// Declarative constraint on one field of `T`.
///
/// The predicate answers "is this constraint satisfied?"; the field name and
/// message are carried alongside so a violation can be reported without any
/// reflection over `T`.
pub struct Constraint<T> {
    field: &'static str,
    message: &'static str,
    satisfied: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Constraint<T> {
    pub fn new(
        field: &'static str,
        message: &'static str,
        satisfied: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            message,
            satisfied: Box::new(satisfied),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Evaluate against a value, reporting a violation when unsatisfied.
    pub fn check(&self, value: &T) -> Option<ConstraintViolation> {
        if (self.satisfied)(value) {
            None
        } else {
            Some(ConstraintViolation {
                field_path: self.field.to_string(),
                message: self.message.to_string(),
            })
        }
    }
}

impl<T> core::fmt::Debug for Constraint<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Constraint")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
