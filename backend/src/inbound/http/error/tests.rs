//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case::client(
    UpstreamError::client_error("movieInfo.year must be a Positive value", 400_u16),
    StatusCode::BAD_REQUEST,
    "movieInfo.year must be a Positive value"
)]
#[case::client_conflict(
    UpstreamError::client_error("duplicate", 409_u16),
    StatusCode::CONFLICT,
    "duplicate"
)]
#[case::not_found(
    UpstreamError::not_found("abc"),
    StatusCode::NOT_FOUND,
    "There is no MovieInfo available for the ID : abc"
)]
#[case::server(
    UpstreamError::server_error("Server exception in MoviesInfoServiceService Unavailable"),
    StatusCode::INTERNAL_SERVER_ERROR,
    "Server exception in MoviesInfoServiceService Unavailable"
)]
#[case::transport(
    UpstreamError::transport_failure("connection refused"),
    StatusCode::INTERNAL_SERVER_ERROR,
    "Internal server error"
)]
fn upstream_errors_map_to_external_responses(
    #[case] error: UpstreamError,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let response = to_external_response(&error);
    assert_eq!(response.status, status);
    assert_eq!(response.message, message);
}

#[test]
fn invalid_client_status_falls_back_to_internal_error() {
    let response = to_external_response(&UpstreamError::client_error("odd", 1_000_u16));
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.message, "odd");
}

async fn body_text(response: HttpResponse) -> String {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[actix_web::test]
async fn error_response_is_plain_text_with_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = ApiError::from(UpstreamError::not_found("7"));

    let response = TraceId::scope(trace_id, async { error.error_response() }).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("Trace-Id header is set by error_response")
        .to_str()
        .expect("Trace-Id is valid UTF-8");
    assert_eq!(header, TRACE_ID);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type is set")
        .to_str()
        .expect("content type is valid UTF-8");
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(
        body_text(response).await,
        "There is no MovieInfo available for the ID : 7"
    );
}

#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = ApiError::from(UpstreamError::server_error("Server exception in ReviewsServiceboom"));

    let response = error.error_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    assert_eq!(
        body_text(response).await,
        "Server exception in ReviewsServiceboom"
    );
}

#[actix_web::test]
async fn invalid_movie_id_is_a_bad_request() {
    let error = ApiError::from(MovieValidationError::EmptyMovieId);

    assert_eq!(ResponseError::status_code(&error), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(error.error_response()).await,
        "movie id must not be empty"
    );
}
