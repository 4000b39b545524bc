//! JSON codec with an explicit unknown-field policy.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CodecError;
use crate::fields::Fields;

/// JSON ⇄ value-object mapper.
///
/// One codec instance carries one configuration; callers construct it locally
/// and pass it where needed. By default unknown payload keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    ignore_unknown_fields: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self {
            ignore_unknown_fields: false,
        }
    }

    /// Configure the unknown-field policy: `true` drops unknown payload keys,
    /// `false` (the default) rejects them.
    pub fn ignore_unknown_fields(mut self, ignore: bool) -> Self {
        self.ignore_unknown_fields = ignore;
        self
    }

    /// Decode a JSON object payload into a value object.
    ///
    /// Payload keys are matched to `T`'s declared fields by name. Fields
    /// missing from the payload take the field type's zero/absent value
    /// (targets opt in via `#[serde(default)]`); a missing field is never a
    /// decode error. Whether an instance is acceptable with absent fields is
    /// the validation layer's question, not the codec's.
    pub fn decode<T>(&self, payload: &str) -> Result<T, CodecError>
    where
        T: DeserializeOwned + Fields,
    {
        let object: Map<String, Value> = serde_json::from_str(payload)?;

        let mut known = Map::new();
        for (key, value) in object {
            if T::FIELDS.contains(&key.as_str()) {
                known.insert(key, value);
            } else if self.ignore_unknown_fields {
                tracing::debug!(field = %key, "dropping unknown payload field");
            } else {
                return Err(CodecError::unknown_field(key));
            }
        }

        Ok(serde_json::from_value(Value::Object(known))?)
    }

    /// Encode a value object as a JSON object payload.
    ///
    /// Every declared field is emitted in declaration order under its
    /// canonical name; absent optional fields are emitted as explicit `null`,
    /// never omitted.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(value)?)
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}
