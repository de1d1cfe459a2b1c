//! Shared reqwest plumbing for the upstream adapters.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};

use crate::domain::ports::UpstreamError;
use crate::domain::{RetryPolicy, RetrySleeper, TRACE_ID_HEADER, TokioSleeper, TraceId};

const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = "movies-gateway/0.1";

/// Errors raised while constructing an upstream adapter.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamClientError {
    /// The reqwest client could not be built.
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The base URL cannot carry path segments (for example `mailto:`).
    #[error("upstream base URL cannot be used as a base: {0}")]
    InvalidBaseUrl(Url),
}

/// Timeout, retry, and sleeping strategy shared by both upstream adapters.
#[derive(Clone)]
pub struct UpstreamHttpOptions {
    /// Per-attempt request timeout; expiry is a transport failure.
    pub timeout: Duration,
    /// Retry budget applied to transient failures.
    pub retry: RetryPolicy,
    /// Sleeper used between retries.
    pub sleeper: Arc<dyn RetrySleeper>,
}

impl Default for UpstreamHttpOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
            retry: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }
}

pub(super) fn build_client(timeout: Duration) -> Result<Client, UpstreamClientError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

pub(super) fn ensure_base(url: Url) -> Result<Url, UpstreamClientError> {
    if url.cannot_be_a_base() {
        return Err(UpstreamClientError::InvalidBaseUrl(url));
    }
    Ok(url)
}

/// Attach the in-scope trace identifier so upstream logs can be correlated.
pub(super) fn with_trace_header(request: RequestBuilder) -> RequestBuilder {
    match TraceId::current() {
        Some(trace_id) => request.header(TRACE_ID_HEADER, trace_id.to_string()),
        None => request,
    }
}

/// Send `request` and read the whole body as text.
pub(super) async fn send_for_text(
    request: RequestBuilder,
) -> Result<(StatusCode, String), UpstreamError> {
    let response: Response = with_trace_header(request)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(map_transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(map_transport_error)?;
    Ok((status, body))
}

pub(super) fn map_transport_error(error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::transport_failure(format!("upstream call timed out: {error}"))
    } else {
        UpstreamError::transport_failure(error.to_string())
    }
}

/// Shared 4xx/5xx classification; `404` is left to each adapter.
///
/// 5xx bodies are prefixed with `server_prefix` without a separator.
pub(super) fn classify_failure_status(
    status: StatusCode,
    body: String,
    server_prefix: &str,
) -> UpstreamError {
    if status.is_server_error() {
        UpstreamError::server_error(format!("{server_prefix}{body}"))
    } else if status.is_client_error() {
        UpstreamError::client_error(body, status.as_u16())
    } else {
        UpstreamError::transport_failure(format!(
            "unexpected upstream status {}",
            status.as_u16()
        ))
    }
}
