//! `valuekit-validate` — declarative per-field constraints.
//!
//! Constraints are plain data: an explicit list of `(field, predicate,
//! message)` rules held by a [`Validator`], evaluated in one pass against an
//! already-constructed value. Validation is always a separate, explicit step;
//! construction never runs it implicitly.

pub mod constraint;
pub mod rules;
pub mod validator;

pub use constraint::{Constraint, ConstraintViolation};
pub use validator::{ValidationError, Validator};
