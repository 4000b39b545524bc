use serde::{Deserialize, Serialize};

use valuekit_core::{BuildError, BuildResult, Builder, ValueObject};

/// Base value object: a person known by given name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    given_name: String,
}

impl Person {
    pub fn new(given_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
        }
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }
}

impl ValueObject for Person {}

/// Extended value object: a person plus employment fields.
///
/// Extension is modeled by embedding the base value directly. Equality and
/// hash fold the embedded [`Person`] together with the extension fields; two
/// employees are equal iff the base values AND the extension fields match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    person: Person,
    badge: String,
}

impl Employee {
    pub fn new(person: Person, badge: impl Into<String>) -> Self {
        Self {
            person,
            badge: badge.into(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn given_name(&self) -> &str {
        self.person.given_name()
    }

    pub fn badge(&self) -> &str {
        &self.badge
    }

    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        // The base value participates in every comparison; extension fields
        // alone must never decide equality.
        self.person == other.person && self.badge == other.badge
    }
}

impl Eq for Employee {}

impl core::hash::Hash for Employee {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.person.hash(state);
        self.badge.hash(state);
    }
}

impl ValueObject for Employee {}

/// Builder for [`Employee`]: sets the base field and the extension field.
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    given_name: Option<String>,
    badge: Option<String>,
}

impl EmployeeBuilder {
    pub fn given_name(mut self, given_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

impl Builder for EmployeeBuilder {
    type Output = Employee;

    fn build(&self) -> BuildResult<Employee> {
        let given_name = self
            .given_name
            .clone()
            .ok_or_else(|| BuildError::missing_field("given_name"))?;
        let badge = self
            .badge
            .clone()
            .ok_or_else(|| BuildError::missing_field("badge"))?;

        Ok(Employee {
            person: Person::new(given_name),
            badge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_base_and_extension_mean_equal_employees() {
        let e1 = Employee::new(Person::new("John"), "B-100");
        let e2 = Employee::new(Person::new("John"), "B-100");

        assert_eq!(e1, e2);
        assert_eq!(hash_of(&e1), hash_of(&e2));
    }

    #[test]
    fn differing_base_breaks_equality_even_with_equal_extension() {
        let e1 = Employee::new(Person::new("John"), "B-100");
        let e2 = Employee::new(Person::new("Jane"), "B-100");

        assert_ne!(e1, e2);
    }

    #[test]
    fn differing_extension_breaks_equality_even_with_equal_base() {
        let e1 = Employee::new(Person::new("John"), "B-100");
        let e2 = Employee::new(Person::new("John"), "B-200");

        assert_ne!(e1, e2);
    }

    #[test]
    fn base_values_compare_structurally_on_their_own() {
        assert_eq!(Person::new("John"), Person::new("John"));
        assert_ne!(Person::new("John"), Person::new("Jane"));
    }

    #[test]
    fn builder_sets_base_and_extension_fields() {
        let employee = Employee::builder()
            .given_name("John")
            .badge("B-100")
            .build()
            .unwrap();

        assert_eq!(employee.given_name(), "John");
        assert_eq!(employee.person(), &Person::new("John"));
        assert_eq!(employee.badge(), "B-100");
    }

    #[test]
    fn builder_rejects_missing_base_field() {
        let err = Employee::builder().badge("B-100").build().unwrap_err();

        match err {
            BuildError::MissingField(field) => assert_eq!(field, "given_name"),
        }
    }

    #[test]
    fn builder_rejects_missing_extension_field() {
        let err = Employee::builder().given_name("John").build().unwrap_err();

        match err {
            BuildError::MissingField(field) => assert_eq!(field, "badge"),
        }
    }
}
