//! Builders wiring the upstream adapters into handler state.

use std::io;
use std::sync::Arc;

use actix_web::web;

use movies_gateway::config::GatewaySettings;
use movies_gateway::domain::TokioSleeper;
use movies_gateway::inbound::http::state::HttpState;
use movies_gateway::outbound::UpstreamHttpOptions;
use movies_gateway::outbound::movies_info::MoviesInfoHttpSource;
use movies_gateway::outbound::reviews::ReviewsHttpSource;

/// Build the HTTP state from loaded settings.
///
/// Both adapters share one timeout and retry policy; each owns its own
/// pooled reqwest client.
///
/// # Errors
/// Returns [`io::Error`] when a URL is malformed or a client cannot be built.
pub(crate) fn build_http_state(settings: &GatewaySettings) -> io::Result<web::Data<HttpState>> {
    let options = UpstreamHttpOptions {
        timeout: settings.upstream_timeout(),
        retry: settings.retry_policy(),
        sleeper: Arc::new(TokioSleeper),
    };
    let info_url = settings.movies_info_url().map_err(io::Error::other)?;
    let reviews_url = settings.movie_reviews_url().map_err(io::Error::other)?;

    let info =
        MoviesInfoHttpSource::new(info_url, options.clone()).map_err(io::Error::other)?;
    let reviews = ReviewsHttpSource::new(reviews_url, options).map_err(io::Error::other)?;

    Ok(web::Data::new(HttpState::from_sources(
        Arc::new(info),
        Arc::new(reviews),
    )))
}
