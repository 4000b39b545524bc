use serde::{Deserialize, Serialize};

use valuekit_codec::Fields;
use valuekit_core::ValueObject;

/// Deserialization target: a signup as it arrives on the wire.
///
/// Fields missing from a payload take their zero/absent value (`None`, `0`)
/// rather than failing the decode; required-ness is a validation concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Signup {
    login: Option<String>,
    age: i64,
}

impl Signup {
    pub fn new(login: Option<String>, age: i64) -> Self {
        Self { login, age }
    }

    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

impl ValueObject for Signup {}

impl Fields for Signup {
    const FIELDS: &'static [&'static str] = &["login", "age"];
}
