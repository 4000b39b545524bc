//! Declared-field listing for payload-to-field matching.

/// Canonical field names of a value-object type.
///
/// The codec matches payload keys against this list by name; anything not
/// listed is an unknown field. The list must name every declared field, in
/// declaration order, using the same names the type's `Serialize`/
/// `Deserialize` forms use.
pub trait Fields {
    const FIELDS: &'static [&'static str];
}
