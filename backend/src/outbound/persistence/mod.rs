//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! records. Connections come from a `bb8` pool through `diesel-async`, and
//! every database error is mapped to [`crate::domain::ports::UserPersistenceError`].
//!
//! # Example
//!
//! ```ignore
//! use authgate::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/authgate");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
