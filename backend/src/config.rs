//! Gateway configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MOVIES_GATEWAY_*` environment variables, or a
//! configuration file; anything unset falls back to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::RetryPolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8082";
const DEFAULT_MOVIES_INFO_URL: &str = "http://localhost:8080/v1/moviesinfo";
const DEFAULT_MOVIE_REVIEWS_URL: &str = "http://localhost:8081/v1/reviews";
const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 200;
const DEFAULT_RETRY_MULTIPLIER: u32 = 2;
const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 5_000;

/// Invalid configuration values detected after loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// An upstream URL could not be parsed.
    #[error("invalid {key} {value:?}: {source}")]
    Url {
        key: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration values for the gateway listener and its upstreams.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOVIES_GATEWAY")]
pub struct GatewaySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the movie-info upstream; the movie id is appended as a path segment.
    pub movies_info_url: Option<String>,
    /// Base URL of the reviews upstream; the movie id is sent as `movieInfoId`.
    pub movie_reviews_url: Option<String>,
    /// Per-attempt upstream timeout in milliseconds.
    #[ortho_config(default = 5_000)]
    pub upstream_timeout_ms: u64,
    /// Total attempts per upstream call, including the first.
    pub retry_max_attempts: Option<u32>,
    /// Delay before the first retry in milliseconds.
    pub retry_base_delay_ms: Option<u64>,
    /// Growth factor applied to the delay after each failed attempt.
    pub retry_multiplier: Option<u32>,
    /// Upper bound on any single retry delay in milliseconds.
    pub retry_max_delay_ms: Option<u64>,
}

impl GatewaySettings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the movie-info base URL, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Url`] when the value does not parse.
    pub fn movies_info_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "movies_info_url",
            self.movies_info_url
                .as_deref()
                .unwrap_or(DEFAULT_MOVIES_INFO_URL),
        )
    }

    /// Return the reviews base URL, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Url`] when the value does not parse.
    pub fn movie_reviews_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "movie_reviews_url",
            self.movie_reviews_url
                .as_deref()
                .unwrap_or(DEFAULT_MOVIE_REVIEWS_URL),
        )
    }

    /// Return the per-attempt upstream timeout.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    /// Build the retry policy shared by both upstream adapters.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts
                .unwrap_or(DEFAULT_RETRY_MAX_ATTEMPTS),
            Duration::from_millis(
                self.retry_base_delay_ms
                    .unwrap_or(DEFAULT_RETRY_BASE_DELAY_MS),
            ),
            self.retry_multiplier.unwrap_or(DEFAULT_RETRY_MULTIPLIER),
            Duration::from_millis(
                self.retry_max_delay_ms
                    .unwrap_or(DEFAULT_RETRY_MAX_DELAY_MS),
            ),
        )
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, SettingsError> {
    Url::parse(value).map_err(|source| SettingsError::Url {
        key,
        value: value.to_owned(),
        source,
    })
}
