//! User store service: lookup, existence check, creation and login
//! validation composed over the [`UserRepository`] and [`PasswordHasher`]
//! ports.
//!
//! Every operation returns a [`StoreResult`]. Absence travels on the failure
//! channel as [`FailureKind::NotFound`]; technical failures carry their own
//! kinds so callers never mistake a broken store for a missing user.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{LoginService, PasswordHasher, UserPersistenceError, UserRepository};
use crate::domain::{Envelope, FailureKind, StoreFailure, StoreResult, UserRecord};

const NO_NAME_GIVEN: &str = "No name given!";
const USER_FOUND: &str = "User found!";
const USER_ABSENT: &str = "User could not be found!";
const USER_EXISTS: &str = "User exists!";
const EMPTY_USER: &str = "Empty users cannot be created!";
const USERNAME_TAKEN: &str = "Username is already taken!";
const USER_CREATED: &str = "User created successfully!";
const INCOMPLETE_CREDENTIALS: &str = "Incomplete login data!";
const INVALID_CREDENTIALS: &str = "Could not log in. Invalid credentials!";
const LOGIN_SUCCEEDED: &str = "Login successful!";

fn not_found_message(username: &str) -> String {
    format!("No user found under the name '{username}'!")
}

fn database_message(error: impl std::fmt::Display) -> String {
    format!("Database - {error}!")
}

fn creation_failed_message(error: impl std::fmt::Display) -> String {
    format!("An error occurred while creating the user!\n{error}")
}

fn record_failure(kind: FailureKind, message: impl Into<String>) -> StoreFailure<UserRecord> {
    StoreFailure::new(kind, UserRecord::empty(), message)
}

fn flag_failure(kind: FailureKind, message: impl Into<String>) -> StoreFailure<bool> {
    StoreFailure::new(kind, false, message)
}

/// User store backed by a repository and a password hasher.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use authgate::domain::{UserRecord, UserStore};
/// use authgate::outbound::hashing::BcryptPasswordHasher;
/// use authgate::outbound::memory::InMemoryUserRepository;
///
/// # async fn run() {
/// let store = UserStore::new(
///     Arc::new(InMemoryUserRepository::default()),
///     Arc::new(BcryptPasswordHasher::default()),
/// );
/// let created = store.create(&UserRecord::new("alice", "p")).await;
/// assert!(created.is_ok());
/// assert!(store.validate_login("alice", "p").await.is_ok());
/// # }
/// ```
#[derive(Clone)]
pub struct UserStore {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserStore {
    /// Build a store over the given ports.
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Look up a record by exact username.
    pub async fn find_by_name(&self, username: &str) -> StoreResult<UserRecord> {
        if username.trim().is_empty() {
            return Err(record_failure(FailureKind::EmptyInput, NO_NAME_GIVEN));
        }

        match self.repository.find_one(username).await {
            Ok(Some(record)) => {
                debug!(username, "user found");
                Ok(Envelope::new(record, USER_FOUND))
            }
            Ok(None) => {
                debug!(username, "user not found");
                Err(record_failure(
                    FailureKind::NotFound,
                    not_found_message(username),
                ))
            }
            Err(error) => {
                warn!(username, %error, "user lookup failed");
                Err(record_failure(
                    FailureKind::DatabaseError,
                    database_message(error),
                ))
            }
        }
    }

    /// Report whether a record exists for `username`.
    ///
    /// Presence is the success channel (`true`); absence, blank input and
    /// store errors are failures (`false`) told apart by their kind.
    pub async fn exists_by_name(&self, username: &str) -> StoreResult<bool> {
        if username.trim().is_empty() {
            return Err(flag_failure(FailureKind::EmptyInput, NO_NAME_GIVEN));
        }

        match self.repository.count(username).await {
            Ok(0) => Err(flag_failure(FailureKind::NotFound, USER_ABSENT)),
            Ok(_) => Ok(Envelope::new(true, USER_EXISTS)),
            Err(error) => {
                warn!(username, %error, "user count failed");
                Err(flag_failure(
                    FailureKind::DatabaseError,
                    database_message(error),
                ))
            }
        }
    }

    /// Persist a new record, hashing its password first.
    ///
    /// Writes exactly one record on success and none on any failure.
    pub async fn create(&self, user: &UserRecord) -> StoreResult<UserRecord> {
        if user.is_empty() {
            return Err(record_failure(FailureKind::EmptyUser, EMPTY_USER));
        }

        match self.exists_by_name(user.username()).await {
            Ok(_) => {
                return Err(record_failure(FailureKind::AlreadyExists, USERNAME_TAKEN));
            }
            Err(failure) => match failure.kind() {
                FailureKind::NotFound => {}
                FailureKind::EmptyInput => {
                    return Err(record_failure(FailureKind::EmptyUser, EMPTY_USER));
                }
                _ => {
                    return Err(failure.recast(FailureKind::PersistenceError, UserRecord::empty()));
                }
            },
        }

        let hashed = match self.hasher.hash(user.password()).await {
            Ok(hashed) => hashed,
            Err(error) => {
                warn!(username = user.username(), %error, "password hashing failed");
                return Err(record_failure(
                    FailureKind::PersistenceError,
                    creation_failed_message(error),
                ));
            }
        };

        let pending = UserRecord::new(user.username(), hashed);
        match self.repository.insert(&pending).await {
            Ok(stored) => {
                info!(username = stored.username(), "user created");
                Ok(Envelope::new(stored, USER_CREATED))
            }
            Err(UserPersistenceError::Duplicate { .. }) => {
                // Lost a concurrent create between the count and the write.
                Err(record_failure(FailureKind::AlreadyExists, USERNAME_TAKEN))
            }
            Err(error) => {
                warn!(username = user.username(), %error, "user insert failed");
                Err(record_failure(
                    FailureKind::PersistenceError,
                    creation_failed_message(error),
                ))
            }
        }
    }

    /// Check a username/password pair against the stored hash.
    pub async fn validate_login(&self, username: &str, password: &str) -> StoreResult<UserRecord> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(record_failure(
                FailureKind::IncompleteCredentials,
                INCOMPLETE_CREDENTIALS,
            ));
        }

        let found = self.find_by_name(username).await?;

        match self.hasher.verify(password, found.value().password()).await {
            Ok(true) => {
                info!(username, "login succeeded");
                Ok(Envelope::new(found.into_value(), LOGIN_SUCCEEDED))
            }
            Ok(false) => {
                info!(username, "login rejected");
                Err(record_failure(
                    FailureKind::InvalidCredentials,
                    INVALID_CREDENTIALS,
                ))
            }
            Err(error) => {
                warn!(username, %error, "password comparison failed");
                Err(record_failure(
                    FailureKind::DatabaseError,
                    format!("Password check failed - {error}!"),
                ))
            }
        }
    }
}

#[async_trait]
impl LoginService for UserStore {
    async fn validate_login(&self, username: &str, password: &str) -> StoreResult<UserRecord> {
        UserStore::validate_login(self, username, password).await
    }
}

#[cfg(test)]
mod tests;
