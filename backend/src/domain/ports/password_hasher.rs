//! Driven port for one-way salted password hashing.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Producing a hash failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// Comparing a plaintext with a stored hash failed, e.g. a malformed hash.
        Verify { message: String } => "password verification failed: {message}",
    }
}

/// Hash and compare primitive.
///
/// Implementations are salted and cost-parameterised; `verify` must not
/// short-circuit on partial matches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a storable hash for `plaintext`.
    async fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError>;

    /// Check `plaintext` against a hash produced by [`PasswordHasher::hash`].
    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, PasswordHashError>;
}
