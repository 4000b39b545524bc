use serde::{Deserialize, Serialize};

use valuekit_core::{BuildError, BuildResult, Builder, ValueObject};

/// Composite source for profile construction: an account known by its email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    email: String,
}

impl Account {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl ValueObject for Account {}

/// Value object: a user profile.
///
/// Exposes two builder variants, disambiguated by name rather than signature:
/// [`Profile::builder`] sets both fields directly, while
/// [`Profile::builder_from_account`] derives the username from an [`Account`].
/// An existing instance can be rebuilt via [`Profile::to_builder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    username: String,
    surname: String,
}

impl Profile {
    pub fn new(username: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            surname: surname.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Direct-field builder: every field set by name.
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Alternate-source builder: the username is derived from an account.
    pub fn builder_from_account() -> FromAccountBuilder {
        FromAccountBuilder::default()
    }

    /// Rebuild path: a direct-field builder pre-populated with this
    /// instance's current values, for building a modified copy.
    pub fn to_builder(&self) -> ProfileBuilder {
        ProfileBuilder {
            username: Some(self.username.clone()),
            surname: Some(self.surname.clone()),
        }
    }
}

impl ValueObject for Profile {}

/// Direct-field builder for [`Profile`]. Both fields are required.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    username: Option<String>,
    surname: Option<String>,
}

impl ProfileBuilder {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }
}

impl Builder for ProfileBuilder {
    type Output = Profile;

    fn build(&self) -> BuildResult<Profile> {
        let username = self
            .username
            .clone()
            .ok_or_else(|| BuildError::missing_field("username"))?;
        let surname = self
            .surname
            .clone()
            .ok_or_else(|| BuildError::missing_field("surname"))?;

        Ok(Profile { username, surname })
    }
}

/// Alternate-source builder for [`Profile`].
///
/// Accepts a whole [`Account`] and derives `username` from its email at build
/// time; `surname` passes through unchanged. The derivation is pure and
/// deterministic given the account.
#[derive(Debug, Clone, Default)]
pub struct FromAccountBuilder {
    account: Option<Account>,
    surname: Option<String>,
}

impl FromAccountBuilder {
    pub fn account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }
}

impl Builder for FromAccountBuilder {
    type Output = Profile;

    fn build(&self) -> BuildResult<Profile> {
        let account = self
            .account
            .as_ref()
            .ok_or_else(|| BuildError::missing_field("account"))?;
        let surname = self
            .surname
            .clone()
            .ok_or_else(|| BuildError::missing_field("surname"))?;

        Ok(Profile {
            username: account.email().to_string(),
            surname,
        })
    }
}
