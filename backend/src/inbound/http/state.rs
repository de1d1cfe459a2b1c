//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service and remain testable without I/O.

use std::sync::Arc;

use crate::domain::MovieService;
use crate::domain::ports::{MovieInfoSource, MovieReviewsSource};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub movies: Arc<MovieService>,
}

impl HttpState {
    /// Wrap an already-built aggregation service.
    pub fn new(movies: Arc<MovieService>) -> Self {
        Self { movies }
    }

    /// Build the state straight from the two upstream ports.
    ///
    /// ```rust,ignore
    /// let state = HttpState::from_sources(Arc::new(info), Arc::new(reviews));
    /// ```
    pub fn from_sources(
        info: Arc<dyn MovieInfoSource>,
        reviews: Arc<dyn MovieReviewsSource>,
    ) -> Self {
        Self::new(Arc::new(MovieService::new(info, reviews)))
    }
}
