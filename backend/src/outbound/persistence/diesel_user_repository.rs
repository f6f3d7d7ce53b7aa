//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Lookups and counts match the username exactly. Uniqueness is enforced by
//! the `users_username_key` constraint, so a create that loses a race surfaces
//! as [`UserPersistenceError::Duplicate`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::UserRecord;
use crate::domain::ports::{UserPersistenceError, UserRepository};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to user persistence errors.
///
/// `username` names the record being written so unique violations can report
/// which name collided.
fn map_diesel_error(error: diesel::result::Error, username: &str) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(kind, info) => match kind {
            DatabaseErrorKind::UniqueViolation => UserPersistenceError::duplicate(username),
            DatabaseErrorKind::ClosedConnection => {
                UserPersistenceError::connection("database connection error")
            }
            _ => UserPersistenceError::query(info.message().to_owned()),
        },
        _ => UserPersistenceError::query("database error"),
    }
}

fn row_to_record(row: UserRow) -> UserRecord {
    UserRecord::new(row.username, row.password_hash)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_one(&self, username: &str) -> Result<Option<UserRecord>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, username))?;

        Ok(row.map(row_to_record))
    }

    async fn count(&self, username: &str) -> Result<u64, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = users::table
            .filter(users::username.eq(username))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, username))?;

        u64::try_from(total)
            .map_err(|err| UserPersistenceError::query(format!("invalid row count: {err}")))
    }

    async fn insert(&self, record: &UserRecord) -> Result<UserRecord, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: Uuid::new_v4(),
            username: record.username(),
            password_hash: record.password(),
        };

        let stored: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, record.username()))?;

        debug!(id = %stored.id, created_at = %stored.created_at, "user row written");
        Ok(row_to_record(stored))
    }
}
