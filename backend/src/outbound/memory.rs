//! In-process `UserRepository` used when no database is configured and in
//! tests.
//!
//! Uniqueness is enforced under the same lock as the insert, mirroring the
//! `UNIQUE` constraint of the PostgreSQL schema.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::domain::ports::{UserPersistenceError, UserRepository};

/// Vector-backed user records guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, UserPersistenceError> {
        self.records
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_one(&self, username: &str) -> Result<Option<UserRecord>, UserPersistenceError> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .find(|record| record.username() == username)
            .cloned())
    }

    async fn count(&self, username: &str) -> Result<u64, UserPersistenceError> {
        let records = self.lock()?;
        let matches = records
            .iter()
            .filter(|record| record.username() == username)
            .count();
        u64::try_from(matches).map_err(|err| UserPersistenceError::query(err.to_string()))
    }

    async fn insert(&self, record: &UserRecord) -> Result<UserRecord, UserPersistenceError> {
        let mut records = self.lock()?;
        if records
            .iter()
            .any(|existing| existing.username() == record.username())
        {
            return Err(UserPersistenceError::duplicate(record.username()));
        }
        records.push(record.clone());
        Ok(record.clone())
    }
}
