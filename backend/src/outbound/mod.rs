//! Outbound adapters implementing the domain ports.
//!
//! - **persistence**: PostgreSQL-backed `UserRepository` using Diesel ORM
//! - **memory**: process-local `UserRepository` for database-less runs
//! - **hashing**: bcrypt-backed `PasswordHasher`
//!
//! Adapters translate between domain types and infrastructure representations
//! and contain no business logic.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::UserRepository;

pub mod hashing;
pub mod memory;
pub mod persistence;

use memory::InMemoryUserRepository;
use persistence::{DbPool, DieselUserRepository, PoolConfig, PoolError, run_migrations};

/// Select the user repository for the configured database.
///
/// With a URL, pending migrations are applied and a pooled Diesel repository
/// is returned. Without one, records live in process memory and vanish on
/// exit.
///
/// # Errors
///
/// Returns [`PoolError`] when migrations fail or the pool cannot be built.
pub async fn connect_user_repository(
    database_url: Option<&str>,
) -> Result<Arc<dyn UserRepository>, PoolError> {
    match database_url {
        Some(url) => {
            run_migrations(url).await?;
            let pool = DbPool::new(PoolConfig::new(url)).await?;
            Ok(Arc::new(DieselUserRepository::new(pool)))
        }
        None => {
            warn!("no database configured; users are kept in memory and lost on exit");
            Ok(Arc::new(InMemoryUserRepository::default()))
        }
    }
}
