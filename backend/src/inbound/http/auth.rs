//! Login endpoint and root redirect.
//!
//! ```text
//! GET /auth?username=alice&password=p
//! GET /            -> 302 Location: /auth
//! ```
//!
//! Every login outcome answers `200`. A failure carries `{"msg": "..."}`;
//! success has an empty body.

use std::fmt;

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use zeroize::Zeroizing;

use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /auth`. Absent parameters read as empty.
#[derive(Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthQuery {
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Plaintext password; never logged.
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for AuthQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthQuery")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Failure body returned by `GET /auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthMessage {
    /// Failure reason.
    #[schema(example = "Could not log in. Invalid credentials!")]
    pub msg: String,
}

/// Validate a username/password pair.
#[utoipa::path(
    get,
    path = "/auth",
    params(AuthQuery),
    responses(
        (
            status = 200,
            description = "Empty body when the login succeeds, a message otherwise",
            body = AuthMessage
        ),
        (status = 400, description = "Malformed query string", body = crate::domain::DomainError)
    ),
    tags = ["auth"],
    operation_id = "authenticate"
)]
#[get("/auth")]
pub async fn authenticate(
    state: web::Data<HttpState>,
    query: web::Query<AuthQuery>,
) -> HttpResponse {
    let AuthQuery { username, password } = query.into_inner();
    let password = Zeroizing::new(password);

    match state.login.validate_login(&username, &password).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(failure) => {
            info!(username = %username, kind = failure.kind().as_str(), "login refused");
            HttpResponse::Ok().json(AuthMessage {
                msg: failure.message().to_owned(),
            })
        }
    }
}

/// Send visitors of `/` to the login endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 302, description = "Redirect to /auth")),
    tags = ["auth"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/auth"))
        .finish()
}
