//! HTTP adapter mapping for domain errors.
//!
//! Login outcomes never pass through here; they are rendered by the auth
//! handler. This covers request-level failures such as unparsable query
//! strings.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::QueryPayloadError, http::StatusCode};
use tracing::warn;

use crate::domain::{DomainError, ErrorCode, TRACE_ID_HEADER};

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(self)
    }
}

/// Render query-string extraction failures as `invalid_request` payloads.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = req.path(), "rejected malformed query string");
    DomainError::invalid_request("malformed query string").into()
}

#[cfg(test)]
mod tests;
