//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same field values are equal, and there is no identity beyond the
/// values themselves. Once constructed (by a constructor or a builder) an
/// instance never changes, so its structural equality and hash are fixed for
/// its whole lifetime and it can be shared freely across readers.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are copied, not referenced.
/// - **PartialEq**: comparison is field-wise over all declared fields. For
///   extended types (a base value embedded in a richer one) the comparison
///   must fold in the base value's equality, never the extension fields
///   alone.
/// - **Debug**: values show up in logs and test failures.
///
/// Matching `Hash` implementations are expected wherever a type is `Eq`:
/// equal values must hash equally.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Profile {
///     username: String,
///     surname: String,
/// }
///
/// impl ValueObject for Profile {}
///
/// let p1 = Profile { username: "js".into(), surname: "smith".into() };
/// let p2 = Profile { username: "js".into(), surname: "smith".into() };
/// assert_eq!(p1, p2);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
