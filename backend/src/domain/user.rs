//! User record value object.

use std::fmt;

/// Username/password pair as handled by the user store.
///
/// The password is plaintext when a caller builds a record for creation and a
/// bcrypt hash once the record has been read back from storage.
///
/// ## Invariants
/// - A record is empty iff both fields are the empty string.
/// - Empty records are sentinels meaning "no such user" and are never
///   persisted.
/// - Construction performs no format validation.
///
/// # Examples
/// ```
/// use authgate::domain::UserRecord;
///
/// assert!(UserRecord::empty().is_empty());
/// assert!(!UserRecord::new("alice", "").is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    username: String,
    password: String,
}

impl UserRecord {
    /// Build a record from raw parts.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Sentinel record used as the value of failed lookups.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this record is the sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    /// Login name, matched exactly.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Plaintext on creation, hash at rest.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
