//! Server settings loaded via OrthoConfig.
//!
//! Values come from `AUTHGATE_*` environment variables, CLI flags and
//! configuration files, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 3030;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime settings shared by the server and the `create-user` tool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AUTHGATE")]
pub struct ServerSettings {
    /// TCP port the HTTP listener binds to.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Interface the HTTP listener binds to.
    #[ortho_config(default = DEFAULT_HOST.to_owned())]
    pub host: String,
    /// PostgreSQL connection string. Without it users live in memory.
    pub database_url: Option<String>,
}

impl ServerSettings {
    /// Address pair accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// Return the database URL when one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
