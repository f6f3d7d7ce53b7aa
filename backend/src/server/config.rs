//! HTTP server configuration object.

use std::sync::Arc;

use authgate::domain::ports::LoginService;

/// Everything `create_server` needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) login: Arc<dyn LoginService>,
}

impl ServerConfig {
    /// Bundle the listen address with the login service.
    #[must_use]
    pub fn new(bind_addr: (String, u16), login: Arc<dyn LoginService>) -> Self {
        Self { bind_addr, login }
    }
}
