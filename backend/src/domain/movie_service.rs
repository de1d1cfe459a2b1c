//! Aggregation service composing a [`Movie`] from the info and reviews ports.
//!
//! Both lookups start together and are polled concurrently on the calling
//! task. Merge priority:
//! 1. an info failure wins, whatever the reviews outcome;
//! 2. otherwise a reviews failure fails the request;
//! 3. otherwise the movie is composed (possibly with no reviews).
//!
//! When info fails first, the still-pending reviews lookup is dropped.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{MovieInfoSource, MovieReviewsSource, UpstreamError};
use crate::domain::{Movie, MovieId, Review};

/// Domain service answering "give me the movie with its reviews".
#[derive(Clone)]
pub struct MovieService {
    info: Arc<dyn MovieInfoSource>,
    reviews: Arc<dyn MovieReviewsSource>,
}

impl MovieService {
    /// Build the service from its two upstream ports.
    ///
    /// ```rust,ignore
    /// let service = MovieService::new(Arc::new(info_source), Arc::new(reviews_source));
    /// ```
    pub fn new(info: Arc<dyn MovieInfoSource>, reviews: Arc<dyn MovieReviewsSource>) -> Self {
        Self { info, reviews }
    }

    /// Fetch info and reviews concurrently and merge them.
    ///
    /// # Errors
    ///
    /// Returns the info error when the info lookup fails, otherwise the
    /// reviews error when the reviews lookup fails.
    pub async fn get_movie(&self, movie_id: &MovieId) -> Result<Movie, UpstreamError> {
        let info = self.info.fetch_info(movie_id);
        let reviews = self.reviews.fetch_reviews(movie_id);
        tokio::pin!(info, reviews);

        let mut early_reviews: Option<Result<Vec<Review>, UpstreamError>> = None;
        let info_outcome = loop {
            tokio::select! {
                outcome = &mut info => break outcome,
                outcome = &mut reviews, if early_reviews.is_none() => {
                    debug!(movie_id = %movie_id, "reviews settled before info");
                    early_reviews = Some(outcome);
                }
            }
        };

        let movie_info = info_outcome?;
        let reviews = match early_reviews {
            Some(outcome) => outcome?,
            None => reviews.await?,
        };

        debug!(
            movie_id = %movie_id,
            review_count = reviews.len(),
            "movie aggregated"
        );
        Ok(Movie::new(movie_info, reviews))
    }
}
