//! Builder trait for multi-path value-object construction.

use crate::error::BuildResult;

/// Builder contract: a transient accumulator bound to exactly one target type.
///
/// This is intentionally small so value-object modules can decide how they
/// accumulate fields (direct passthrough, derivation from a composite source,
/// rebuild from an existing instance) without bringing in any shared state.
///
/// Conventions for implementors:
/// - Field setters are fluent: they take `self` and return `Self`.
/// - Unset fields are held as `Option` and default to absent.
/// - `build` borrows rather than consumes, so a fully-populated builder may
///   build repeatedly; every build of the same builder state must yield
///   structurally equal instances.
/// - When a target type exposes more than one builder variant, each variant
///   gets its own factory name and its own builder type. Variants are never
///   disambiguated by signature.
pub trait Builder {
    /// The value-object type this builder constructs.
    type Output;

    /// Validate that all required fields are present and construct the target.
    ///
    /// Fails with [`BuildError::MissingField`](crate::BuildError::MissingField)
    /// naming the first absent required field. Must be pure and deterministic
    /// given the builder's current state.
    fn build(&self) -> BuildResult<Self::Output>;
}
