//! `valuekit-codec` — the JSON boundary for value objects.
//!
//! The only boundary this workspace has: `(text payload) ⇄ (value-object
//! instance)`. Decoding matches payload keys to a type's declared field names
//! and applies a configurable unknown-field policy; encoding emits every
//! declared field in declaration order with explicit nulls.

pub mod error;
pub mod fields;
pub mod json;

pub use error::CodecError;
pub use fields::Fields;
pub use json::JsonCodec;
