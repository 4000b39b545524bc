//! Rule constructors for common constraints.
//!
//! Each rule pairs a field name with an accessor into the target type, so the
//! constraint can be declared next to the type it guards.

use crate::constraint::Constraint;

/// The field must be present and non-empty after trimming whitespace.
pub fn not_blank<T: 'static>(field: &'static str, accessor: fn(&T) -> Option<&str>) -> Constraint<T> {
    Constraint::new(field, "must not be blank", move |value| {
        accessor(value).is_some_and(|s| !s.trim().is_empty())
    })
}

/// The field must be zero or greater.
pub fn non_negative<T: 'static>(field: &'static str, accessor: fn(&T) -> i64) -> Constraint<T> {
    Constraint::new(field, "must not be negative", move |value| {
        accessor(value) >= 0
    })
}
