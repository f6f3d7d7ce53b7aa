//! bcrypt-backed `PasswordHasher` adapter.
//!
//! bcrypt is CPU-bound by design, so both operations run on Tokio's blocking
//! pool instead of the async worker threads.

use async_trait::async_trait;
use tokio::task;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::TraceId;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor applied to every stored hash.
pub const DEFAULT_COST: u32 = 10;

/// Salted bcrypt hashing with a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Build a hasher with an explicit cost.
    ///
    /// Costs outside bcrypt's accepted range (4 to 31) surface as
    /// [`PasswordHashError::Hash`] when hashing.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor applied to new hashes.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::with_cost(DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError> {
        let secret = Zeroizing::new(plaintext.to_owned());
        let cost = self.cost;
        let trace_id = TraceId::current();
        task::spawn_blocking(move || {
            debug!(trace_id = ?trace_id, cost, "hashing password");
            bcrypt::hash(secret.as_bytes(), cost)
        })
        .await
        .map_err(|err| PasswordHashError::hash(err.to_string()))?
        .map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, PasswordHashError> {
        let secret = Zeroizing::new(plaintext.to_owned());
        let hashed = hashed.to_owned();
        task::spawn_blocking(move || bcrypt::verify(secret.as_bytes(), &hashed))
            .await
            .map_err(|err| PasswordHashError::verify(err.to_string()))?
            .map_err(|err| PasswordHashError::verify(err.to_string()))
    }
}
