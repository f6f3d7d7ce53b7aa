//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see domain
//! ports, so they stay testable with mocks.

use std::sync::Arc;

use crate::domain::ports::LoginService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check behind `GET /auth`.
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Construct state around a login service.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use authgate::domain::UserStore;
    /// use authgate::inbound::http::state::HttpState;
    /// use authgate::outbound::hashing::BcryptPasswordHasher;
    /// use authgate::outbound::memory::InMemoryUserRepository;
    ///
    /// let store = UserStore::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(BcryptPasswordHasher::default()),
    /// );
    /// let state = HttpState::new(Arc::new(store));
    /// let _login = state.login.clone();
    /// ```
    pub fn new(login: Arc<dyn LoginService>) -> Self {
        Self { login }
    }
}
