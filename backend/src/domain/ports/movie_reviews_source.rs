//! Driven port for querying the reviews associated with a movie.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::{MovieId, Review};

/// Port for fetching every review associated with a movie.
///
/// "No reviews" is a successful, empty result and never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieReviewsSource: Send + Sync {
    /// Fetch reviews for `movie_id` in upstream order.
    async fn fetch_reviews(&self, movie_id: &MovieId) -> Result<Vec<Review>, UpstreamError>;
}

/// Fixture implementation returning no reviews.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureMovieReviewsSource;

#[async_trait]
impl MovieReviewsSource for FixtureMovieReviewsSource {
    async fn fetch_reviews(&self, _movie_id: &MovieId) -> Result<Vec<Review>, UpstreamError> {
        Ok(Vec::new())
    }
}
