//! OpenAPI documentation for the HTTP surface.
//!
//! Registers the login endpoint, the root redirect and the health probes. The
//! document is served by Swagger UI at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{DomainError, ErrorCode};
use crate::inbound::http::auth::AuthMessage;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "authgate API",
        description = "Query-string login endpoint backed by a salted-hash user store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::authenticate,
        crate::inbound::http::auth::index,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(AuthMessage, DomainError, ErrorCode)),
    tags(
        (name = "auth", description = "Credential validation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
