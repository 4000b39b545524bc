//! Validator: evaluates a rule set and reports every violation.

use thiserror::Error;

use crate::constraint::{Constraint, ConstraintViolation};

/// Error form of a failed validation, carrying the full violation set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed with {} constraint violation(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<ConstraintViolation>,
}

/// Validator for one value-object type.
///
/// A validator is a locally constructed, explicitly passed value. There is no
/// process-wide registry: whoever wants to validate builds (or receives) the
/// validator and calls it.
#[derive(Debug)]
pub struct Validator<T> {
    constraints: Vec<Constraint<T>>,
}

impl<T> Validator<T> {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Append one rule (fluent, for declaration-site rule lists).
    pub fn rule(mut self, constraint: Constraint<T>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Evaluate every rule against an already-constructed instance.
    ///
    /// Returns the **full** set of violations, in rule-declaration order, so
    /// a caller can report all problems at once. An empty set means the
    /// instance is valid.
    pub fn validate(&self, value: &T) -> Vec<ConstraintViolation> {
        let violations: Vec<ConstraintViolation> = self
            .constraints
            .iter()
            .filter_map(|constraint| constraint.check(value))
            .collect();

        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "constraint violations found");
        }

        violations
    }

    /// Like [`validate`](Self::validate), but folds a non-empty violation set
    /// into a [`ValidationError`] for callers on a `Result` path.
    pub fn check(&self, value: &T) -> Result<(), ValidationError> {
        let violations = self.validate(value);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}
