//! Embedded Diesel migrations applied at startup.
//!
//! Migrations run over a synchronous `PgConnection` on Tokio's blocking pool
//! because `diesel_migrations` has no async harness.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tokio::task;
use tracing::info;

use super::pool::PoolError;

/// Migrations from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply every pending migration to the database at `database_url`.
///
/// # Errors
///
/// Returns [`PoolError::Build`] when the connection cannot be established or
/// a migration fails.
pub async fn run_migrations(database_url: &str) -> Result<(), PoolError> {
    let url = database_url.to_owned();
    task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)
            .map_err(|err| PoolError::build(format!("migration connection: {err}")))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| PoolError::build(format!("migration: {err}")))?;
        info!(count = applied.len(), "database migrations applied");
        Ok(())
    })
    .await
    .map_err(|err| PoolError::build(format!("migration task: {err}")))?
}
