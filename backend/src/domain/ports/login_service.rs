//! Driving port for login validation.
//!
//! Inbound adapters call this port to check credentials without knowing the
//! backing store, which keeps HTTP handler tests free of persistence.

use async_trait::async_trait;

use crate::domain::{StoreResult, UserRecord};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate a username/password pair.
    ///
    /// Succeeds with the stored record; fails with the store's tagged failure.
    async fn validate_login(&self, username: &str, password: &str) -> StoreResult<UserRecord>;
}
