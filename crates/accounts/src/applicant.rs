use serde::{Deserialize, Serialize};

use valuekit_codec::Fields;
use valuekit_core::ValueObject;
use valuekit_validate::{Validator, rules};

/// Serialization and validation target: an applicant record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Applicant {
    name: Option<String>,
    surname: Option<String>,
    age: i64,
}

impl Applicant {
    pub fn new(name: Option<String>, surname: Option<String>, age: i64) -> Self {
        Self { name, surname, age }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// Constraint set for applicant records.
    ///
    /// Returns a freshly constructed validator; callers hold and pass it
    /// explicitly, there is no shared registry.
    pub fn validator() -> Validator<Applicant> {
        Validator::new()
            .rule(rules::not_blank("name", Self::name))
            .rule(rules::not_blank("surname", Self::surname))
            .rule(rules::non_negative("age", Self::age))
    }
}

impl ValueObject for Applicant {}

impl Fields for Applicant {
    const FIELDS: &'static [&'static str] = &["name", "surname", "age"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuekit_codec::JsonCodec;

    #[test]
    fn encodes_every_field_in_declaration_order_with_explicit_nulls() {
        let codec = JsonCodec::new();
        let applicant = Applicant::new(Some("John".to_string()), None, 77);

        let payload = codec.encode(&applicant).unwrap();

        assert_eq!(payload, r#"{"name":"John","surname":null,"age":77}"#);
    }

    #[test]
    fn absent_fields_round_trip_as_explicit_nulls() {
        let codec = JsonCodec::new();

        let applicant: Applicant = codec.decode(r#"{"name":"John","age":77}"#).unwrap();
        let encoded = codec.encode(&applicant).unwrap();

        assert_eq!(encoded, r#"{"name":"John","surname":null,"age":77}"#);
    }

    #[test]
    fn every_blank_field_reports_its_own_violation() {
        let applicant = Applicant::new(None, None, 77);

        let violations = Applicant::validator().validate(&applicant);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field_path, "name");
        assert_eq!(violations[0].message, "must not be blank");
        assert_eq!(violations[1].field_path, "surname");
        assert_eq!(violations[1].message, "must not be blank");
    }

    #[test]
    fn decoded_instance_validates_against_the_same_rules() {
        let codec = JsonCodec::new();
        let validator = Applicant::validator();

        // `surname` is absent from the payload, so it decodes to None.
        let applicant: Applicant = codec.decode(r#"{"name":"johnsmith","age":77}"#).unwrap();
        let violations = validator.validate(&applicant);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field_path, "surname");
        assert_eq!(violations[0].message, "must not be blank");
    }

    #[test]
    fn fully_populated_applicant_is_valid() {
        let applicant = Applicant::new(Some("John".to_string()), Some("Smith".to_string()), 77);

        assert!(Applicant::validator().validate(&applicant).is_empty());
        assert!(Applicant::validator().check(&applicant).is_ok());
    }

    #[test]
    fn negative_age_is_a_violation() {
        let applicant = Applicant::new(Some("John".to_string()), Some("Smith".to_string()), -1);

        let violations = Applicant::validator().validate(&applicant);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field_path, "age");
        assert_eq!(violations[0].message, "must not be negative");
    }
}
