//! Tagged result envelope returned by every user store operation.
//!
//! Each operation yields exactly one of:
//! - `Ok(Envelope { value, message })` on the success channel, or
//! - `Err(StoreFailure { kind, value, message })` on the failure channel.
//!
//! Expected outcomes such as "user not found" travel on the failure channel.
//! Callers branch on [`FailureKind`] rather than on message text.

use std::fmt;

/// Failure categories raised by the user store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The lookup key was blank once trimmed.
    EmptyInput,
    /// No record matches the lookup key.
    NotFound,
    /// The backing store or the hash comparison failed.
    DatabaseError,
    /// A sentinel record was passed to `create`.
    EmptyUser,
    /// A record with the same username already exists.
    AlreadyExists,
    /// Hashing or writing the new record failed.
    PersistenceError,
    /// Username or password was blank once trimmed.
    IncompleteCredentials,
    /// The password does not match the stored hash.
    InvalidCredentials,
}

impl FailureKind {
    /// Stable snake-case label used in structured logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::NotFound => "not_found",
            Self::DatabaseError => "database_error",
            Self::EmptyUser => "empty_user",
            Self::AlreadyExists => "already_exists",
            Self::PersistenceError => "persistence_error",
            Self::IncompleteCredentials => "incomplete_credentials",
            Self::InvalidCredentials => "invalid_credentials",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Success payload: the value plus a human-readable confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    value: T,
    message: String,
}

impl<T> Envelope<T> {
    /// Wrap a successful value with its confirmation message.
    pub fn new(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }

    /// Borrow the payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Confirmation shown to callers.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Consume the envelope, keeping only the payload.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Failure payload: the sentinel value, a kind tag and a message.
///
/// # Examples
/// ```
/// use authgate::domain::{FailureKind, StoreFailure, UserRecord};
///
/// let failure = StoreFailure::new(FailureKind::NotFound, UserRecord::empty(), "gone");
/// assert_eq!(failure.kind(), FailureKind::NotFound);
/// assert!(failure.value().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFailure<T> {
    kind: FailureKind,
    value: T,
    message: String,
}

impl<T> StoreFailure<T> {
    /// Tag a sentinel value with a failure kind and message.
    pub fn new(kind: FailureKind, value: T, message: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Sentinel carried alongside the failure.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Human-readable reason, safe to show to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Re-tag the failure with a new kind and value, keeping the message.
    pub fn recast<U>(self, kind: FailureKind, value: U) -> StoreFailure<U> {
        StoreFailure {
            kind,
            value,
            message: self.message,
        }
    }
}

impl<T> fmt::Display for StoreFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl<T: fmt::Debug> std::error::Error for StoreFailure<T> {}

/// Result alias used by every store operation.
pub type StoreResult<T> = Result<Envelope<T>, StoreFailure<T>>;
