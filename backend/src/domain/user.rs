//! User entity and the validation rules guarding its fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Error;

/// Validation errors returned while building user fields.
///
/// Each variant names exactly one offending field so inbound adapters can
/// surface field-level detail without inspecting the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    MissingName,
    BlankName,
    MissingEmail,
    BlankEmail,
    MalformedEmail,
    MissingPassword,
    BlankPassword,
}

impl UserValidationError {
    /// Wire name of the field the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName | Self::BlankName => "name",
            Self::MissingEmail | Self::BlankEmail | Self::MalformedEmail => "email",
            Self::MissingPassword | Self::BlankPassword => "password",
        }
    }

    /// Stable machine-readable failure code.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingName | Self::MissingEmail | Self::MissingPassword => "missing_field",
            Self::BlankName | Self::BlankEmail | Self::BlankPassword => "blank_field",
            Self::MalformedEmail => "malformed_email",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "missing required field: name"),
            Self::BlankName => write!(f, "name must not be blank"),
            Self::MissingEmail => write!(f, "missing required field: email"),
            Self::BlankEmail => write!(f, "email must not be blank"),
            Self::MalformedEmail => {
                write!(f, "email must contain an @ with a domain segment")
            }
            Self::MissingPassword => write!(f, "missing required field: password"),
            Self::BlankPassword => write!(f, "password must not be blank"),
        }
    }
}

impl std::error::Error for UserValidationError {}

impl From<UserValidationError> for Error {
    fn from(value: UserValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

/// Stable user identifier assigned by the persistence adapter at insert time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Name shown for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(value.into())
    }

    fn from_owned(value: String) -> Result<Self, UserValidationError> {
        if value.trim().is_empty() {
            return Err(UserValidationError::BlankName);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Contact address for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(value.into())
    }

    fn from_owned(value: String) -> Result<Self, UserValidationError> {
        if value.trim().is_empty() {
            return Err(UserValidationError::BlankEmail);
        }
        // Syntactic baseline only: an @ separating a non-empty local part
        // from a non-empty domain segment.
        let Some((local, domain)) = value.split_once('@') else {
            return Err(UserValidationError::MalformedEmail);
        };
        if local.is_empty() || domain.is_empty() {
            return Err(UserValidationError::MalformedEmail);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Credential stored verbatim; hashing is out of scope for this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    /// Validate and construct a [`Password`] from owned input.
    ///
    /// Non-blank is the baseline policy; callers may layer stricter rules.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(value.into())
    }

    fn from_owned(value: String) -> Result<Self, UserValidationError> {
        if value.trim().is_empty() {
            return Err(UserValidationError::BlankPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Password> for String {
    fn from(value: Password) -> Self {
        value.0
    }
}

impl TryFrom<String> for Password {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Raw inbound field trio prior to validation.
///
/// Create and update both arrive in this shape. Full-replace semantics apply:
/// an absent or blank value fails validation rather than meaning "leave
/// unchanged".
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserDraft {
    /// Validate the draft into a [`UserProfile`].
    ///
    /// Pure; performs no I/O. Fails on the first offending field.
    pub fn validate(self) -> Result<UserProfile, UserValidationError> {
        let name = self.name.ok_or(UserValidationError::MissingName)?;
        let email = self.email.ok_or(UserValidationError::MissingEmail)?;
        let password = self.password.ok_or(UserValidationError::MissingPassword)?;

        Ok(UserProfile {
            name: UserName::new(name)?,
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }
}

/// Validated mutable field set shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    name: UserName,
    email: EmailAddress,
    password: Password,
}

impl UserProfile {
    /// Assemble a profile from validated components.
    pub fn new(name: UserName, email: EmailAddress, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }

    /// Name carried by the profile.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address carried by the profile.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password carried by the profile.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Persisted user account.
///
/// ## Invariants
/// - `id` is assigned once by the persistence adapter and never changes.
/// - `name`, `email`, and `password` are validated, non-blank values.
///
/// Equality is by identifier: two snapshots of the same user compare equal
/// even when their mutable fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    password: Password,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl User {
    /// Assemble a user from an assigned identifier and a validated profile.
    pub fn from_profile(id: UserId, profile: UserProfile) -> Self {
        let UserProfile {
            name,
            email,
            password,
        } = profile;
        Self {
            id,
            name,
            email,
            password,
        }
    }

    /// Produce the next state from a validated update.
    ///
    /// The profile is destructured exhaustively so every mutable field has an
    /// explicit mapping; the identifier is the only carried-over value. A new
    /// mutable field cannot be dropped or stale-retained without this failing
    /// to compile.
    pub fn merge(&self, profile: UserProfile) -> Self {
        let UserProfile {
            name,
            email,
            password,
        } = profile;
        Self {
            id: self.id,
            name,
            email,
            password,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name shown for the user.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Contact address for the user.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored credential.
    pub fn password(&self) -> &Password {
        &self.password
    }
}
