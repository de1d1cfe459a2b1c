//! Reqwest-backed reviews source adapter.
//!
//! Reviews are optional enrichment: a `404` from the upstream means "no
//! reviews yet" and maps to an empty list rather than an error.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::ReviewDto;
use crate::domain::ports::{MovieReviewsSource, UpstreamError};
use crate::domain::{MovieId, RetryPolicy, RetrySleeper, Review};
use crate::outbound::upstream_http::{
    UpstreamClientError, UpstreamHttpOptions, build_client, classify_failure_status, ensure_base,
    send_for_text,
};

const UPSTREAM_NAME: &str = "reviews";
const SERVER_ERROR_PREFIX: &str = "Server exception in ReviewsService";
const MOVIE_ID_QUERY_PARAM: &str = "movieInfoId";

/// Reviews adapter issuing `GET {base_url}?movieInfoId={movie_id}`.
pub struct ReviewsHttpSource {
    client: Client,
    base_url: Url,
    retry: RetryPolicy,
    sleeper: Arc<dyn RetrySleeper>,
}

impl ReviewsHttpSource {
    /// Build an adapter against `base_url`.
    /// ```rust,ignore
    /// let source = ReviewsHttpSource::new(base_url, UpstreamHttpOptions::default())?;
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

    fn reviews_url(&self, movie_id: &MovieId) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(MOVIE_ID_QUERY_PARAM, movie_id.as_ref());
        url
    }

    async fn fetch_once(&self, movie_id: &MovieId) -> Result<Vec<Review>, UpstreamError> {
        let url = self.reviews_url(movie_id);
        debug!(upstream = UPSTREAM_NAME, %url, "calling upstream");
        let (status, body) = send_for_text(self.client.get(url)).await?;
        classify_response(status, body).inspect_err(|error| {
            warn!(upstream = UPSTREAM_NAME, movie_id = %movie_id, %error, "upstream call failed");
        })
    }
}

#[async_trait]
impl MovieReviewsSource for ReviewsHttpSource {
    async fn fetch_reviews(&self, movie_id: &MovieId) -> Result<Vec<Review>, UpstreamError> {
        self.retry
            .run(self.sleeper.as_ref(), UPSTREAM_NAME, || self.fetch_once(movie_id))
            .await
    }
}

fn classify_response(status: StatusCode, body: String) -> Result<Vec<Review>, UpstreamError> {
    if status.is_success() {
        return parse_reviews(&body);
    }
    if status == StatusCode::NOT_FOUND {
        return Ok(Vec::new());
    }
    Err(classify_failure_status(status, body, SERVER_ERROR_PREFIX))
}

fn parse_reviews(body: &str) -> Result<Vec<Review>, UpstreamError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let decoded: Vec<ReviewDto> = serde_json::from_str(body).map_err(|error| {
        UpstreamError::transport_failure(format!("invalid reviews JSON payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(Review::from).collect())
}
