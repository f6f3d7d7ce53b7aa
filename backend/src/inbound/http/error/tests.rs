//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn response_payload(error: &DomainError) -> (StatusCode, Option<String>, DomainError) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("header is ascii").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload =
        serde_json::from_slice(&bytes).expect("DomainError JSON deserialisation succeeds");
    (status, header, payload)
}

#[rstest]
#[actix_web::test]
async fn invalid_requests_keep_their_payload() {
    let error = DomainError::invalid_request("bad");

    let (status, header, payload) = response_payload(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(payload, error);
}

#[actix_web::test]
async fn scoped_trace_id_is_echoed_as_header() {
    let trace_id = TRACE_ID.parse().expect("valid UUID");
    let error =
        crate::domain::TraceId::scope(trace_id, async { DomainError::invalid_request("bad") })
            .await;

    let (_, header, payload) = response_payload(&error).await;

    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
}

#[actix_web::test]
async fn malformed_query_strings_become_invalid_requests() {
    let req = TestRequest::get().uri("/auth").to_http_request();
    let err = query_error_handler(
        QueryPayloadError::Deserialize(serde::de::Error::custom("invalid percent encoding")),
        &req,
    );

    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let payload: DomainError = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "malformed query string");
}
