//! Reqwest-backed movie-info source adapter.
//!
//! This adapter owns transport details only: URL building, timeout and HTTP
//! status mapping, and JSON decoding into domain `MovieInfo` records.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::MovieInfoDto;
use crate::domain::ports::{MovieInfoSource, UpstreamError};
use crate::domain::{MovieId, MovieInfo, RetryPolicy, RetrySleeper};
use crate::outbound::upstream_http::{
    UpstreamClientError, UpstreamHttpOptions, build_client, classify_failure_status, ensure_base,
    send_for_text,
};

const UPSTREAM_NAME: &str = "movies-info";
const SERVER_ERROR_PREFIX: &str = "Server exception in MoviesInfoService";

/// Movie-info adapter issuing `GET {base_url}/{movie_id}`.
pub struct MoviesInfoHttpSource {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
    sleeper: Arc<dyn RetrySleeper>,
}

impl MoviesInfoHttpSource {
    /// Build an adapter against `base_url`.
    /// ```rust,ignore
    /// let source = MoviesInfoHttpSource::new(base_url, UpstreamHttpOptions::default())?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or the
    /// URL cannot carry path segments.
    pub fn new(base_url: Url, options: UpstreamHttpOptions) -> Result<Self, UpstreamClientError> {
        Ok(Self {
            client: build_client(options.timeout)?,
            base_url: ensure_base(base_url)?,
            retry: options.retry,
            sleeper: options.sleeper,
        })
    }

    fn movie_url(&self, movie_id: &MovieId) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UpstreamError::transport_failure(format!(
                    "movie-info base URL cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(movie_id.as_ref());
        Ok(url)
    }

    async fn fetch_once(&self, movie_id: &MovieId) -> Result<MovieInfo, UpstreamError> {
        let url = self.movie_url(movie_id)?;
        debug!(upstream = UPSTREAM_NAME, %url, "calling upstream");
        let (status, body) = send_for_text(self.client.get(url)).await?;
        classify_response(status, body, movie_id).inspect_err(|error| {
            warn!(upstream = UPSTREAM_NAME, movie_id = %movie_id, %error, "upstream call failed");
        })
    }
}

#[async_trait]
impl MovieInfoSource for MoviesInfoHttpSource {
    async fn fetch_info(&self, movie_id: &MovieId) -> Result<MovieInfo, UpstreamError> {
        self.retry
            .run(self.sleeper.as_ref(), UPSTREAM_NAME, || self.fetch_once(movie_id))
            .await
    }
}

fn classify_response(
    status: StatusCode,
    body: String,
    movie_id: &MovieId,
) -> Result<MovieInfo, UpstreamError> {
    if status.is_success() {
        return parse_movie_info(&body);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(UpstreamError::not_found(movie_id.as_ref()));
    }
    Err(classify_failure_status(status, body, SERVER_ERROR_PREFIX))
}

fn parse_movie_info(body: &str) -> Result<MovieInfo, UpstreamError> {
    let decoded: MovieInfoDto = serde_json::from_str(body).map_err(|error| {
        UpstreamError::transport_failure(format!("invalid movie-info JSON payload: {error}"))
    })?;
    decoded.into_domain().map_err(|error| {
        UpstreamError::transport_failure(format!("movie-info payload rejected: {error}"))
    })
}

#[cfg(test)]
mod tests {
    //! Adapter coverage against a stub movie-info upstream.

    use std::time::Duration;

    use httpmock::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::TokioSleeper;

    fn options(max_attempts: u32) -> UpstreamHttpOptions {
        UpstreamHttpOptions {
            timeout: Duration::from_secs(2),
            retry: RetryPolicy::new(max_attempts, Duration::ZERO, 2, Duration::ZERO),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    fn source(server: &MockServer, max_attempts: u32) -> MoviesInfoHttpSource {
        let base_url = Url::parse(&server.url("/v1/moviesinfo")).expect("valid base url");
        MoviesInfoHttpSource::new(base_url, options(max_attempts)).expect("adapter builds")
    }

    fn movie_id(id: &str) -> MovieId {
        MovieId::new(id).expect("valid id")
    }

    #[tokio::test]
    async fn decodes_movie_info_on_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/moviesinfo/1");
                then.status(200).json_body(json!({
                    "movieInfoId": "1",
                    "name": "Batman Begins",
                    "year": 2005,
                    "cast": ["Christian Bale", "Michael Cane"],
                    "release_date": "2005-06-15"
                }));
            })
            .await;

        let info = source(&server, 3)
            .fetch_info(&movie_id("1"))
            .await
            .expect("info decodes");

        mock.assert_calls_async(1).await;
        assert_eq!(info.name(), "Batman Begins");
        assert_eq!(info.year(), 2005);
        assert_eq!(info.cast(), ["Christian Bale", "Michael Cane"]);
        assert_eq!(info.movie_info_id(), Some("1"));
    }

    #[tokio::test]
    async fn not_found_is_terminal() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/moviesinfo/abc");
                then.status(404);
            })
            .await;

        let outcome = source(&server, 3).fetch_info(&movie_id("abc")).await;

        mock.assert_calls_async(1).await;
        assert_eq!(outcome, Err(UpstreamError::not_found("abc")));
    }

    #[rstest]
    #[case(400_u16)]
    #[case(422_u16)]
    #[tokio::test]
    async fn other_client_errors_keep_body_and_status(#[case] status: u16) {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/moviesinfo/1");
                then.status(status).body("movieInfo.year must be a Positive value");
            })
            .await;

        let outcome = source(&server, 3).fetch_info(&movie_id("1")).await;

        mock.assert_calls_async(1).await;
        assert_eq!(
            outcome,
            Err(UpstreamError::client_error(
                "movieInfo.year must be a Positive value",
                status
            ))
        );
    }

    #[tokio::test]
    async fn server_errors_are_retried_then_surface_prefixed_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/moviesinfo/1");
                then.status(503).body("Service Unavailable");
            })
            .await;

        let outcome = source(&server, 3).fetch_info(&movie_id("1")).await;

        mock.assert_calls_async(3).await;
        assert_eq!(
            outcome,
            Err(UpstreamError::server_error(
                "Server exception in MoviesInfoServiceService Unavailable"
            ))
        );
    }

    #[tokio::test]
    async fn slow_upstream_times_out_and_is_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/moviesinfo/1");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!({ "name": "Batman Begins", "year": 2005, "cast": [] }));
            })
            .await;
        let base_url = Url::parse(&server.url("/v1/moviesinfo")).expect("valid base url");
        let options = UpstreamHttpOptions {
            timeout: Duration::from_millis(50),
            ..options(3)
        };
        let source = MoviesInfoHttpSource::new(base_url, options).expect("adapter builds");

        let outcome = source.fetch_info(&movie_id("1")).await;

        mock.assert_calls_async(3).await;
        assert!(matches!(
            outcome,
            Err(UpstreamError::TransportFailure { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_payload_is_a_transport_failure() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/moviesinfo/1");
                then.status(200)
                    .json_body(json!({ "name": "", "year": 2005, "cast": [] }));
            })
            .await;

        let outcome = source(&server, 1).fetch_info(&movie_id("1")).await;

        mock.assert_calls_async(1).await;
        assert!(matches!(
            outcome,
            Err(UpstreamError::TransportFailure { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_transport_failure() {
        let base_url = Url::parse("http://127.0.0.1:9/v1/moviesinfo").expect("valid url");
        let source = MoviesInfoHttpSource::new(base_url, options(1)).expect("adapter builds");

        let outcome = source.fetch_info(&movie_id("1")).await;

        assert!(matches!(
            outcome,
            Err(UpstreamError::TransportFailure { .. })
        ));
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let base_url = Url::parse("http://localhost:8080/v1/moviesinfo/").expect("valid url");
        let source = MoviesInfoHttpSource::new(base_url, options(1)).expect("adapter builds");

        let url = source.movie_url(&movie_id("7")).expect("url builds");

        assert_eq!(url.as_str(), "http://localhost:8080/v1/moviesinfo/7");
    }

    #[test]
    fn identifiers_are_percent_encoded_as_one_segment() {
        let base_url = Url::parse("http://localhost:8080/v1/moviesinfo").expect("valid url");
        let source = MoviesInfoHttpSource::new(base_url, options(1)).expect("adapter builds");

        let url = source.movie_url(&movie_id("a/b c")).expect("url builds");

        assert_eq!(url.as_str(), "http://localhost:8080/v1/moviesinfo/a%2Fb%20c");
    }
}
