//! Driven port for the user record store and its errors.
use async_trait::async_trait;

use crate::domain::UserRecord;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The storage-level uniqueness constraint on usernames rejected a write.
        Duplicate { username: String } => "username '{username}' is already stored",
    }
}

/// Storage operations the user store composes.
///
/// Records returned by adapters carry the stored hash in the password field.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the record whose username matches exactly.
    async fn find_one(&self, username: &str) -> Result<Option<UserRecord>, UserPersistenceError>;

    /// Count records whose username matches exactly.
    async fn count(&self, username: &str) -> Result<u64, UserPersistenceError>;

    /// Persist a record whose password field already holds the hash.
    ///
    /// Adapters must reject a second record for the same username with
    /// [`UserPersistenceError::Duplicate`] and return the stored record.
    async fn insert(&self, record: &UserRecord) -> Result<UserRecord, UserPersistenceError>;
}
