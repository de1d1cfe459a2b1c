//! Driven port for looking up one movie's info record.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::{MovieId, MovieInfo};

/// Port for fetching a [`MovieInfo`] by movie identifier.
///
/// Implementations classify failures into [`UpstreamError`] and apply the
/// retry policy themselves; callers see only the final outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieInfoSource: Send + Sync {
    /// Fetch the info record for `movie_id`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use movies_gateway::domain::MovieId;
    /// use movies_gateway::domain::ports::{FixtureMovieInfoSource, MovieInfoSource};
    ///
    /// let source = FixtureMovieInfoSource;
    /// let info = source.fetch_info(&MovieId::new("1")?).await?;
    /// assert_eq!(info.name(), "Batman Begins");
    /// ```
    async fn fetch_info(&self, movie_id: &MovieId) -> Result<MovieInfo, UpstreamError>;
}

/// Fixture implementation returning a fixed record for any identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureMovieInfoSource;

#[async_trait]
impl MovieInfoSource for FixtureMovieInfoSource {
    async fn fetch_info(&self, movie_id: &MovieId) -> Result<MovieInfo, UpstreamError> {
        MovieInfo::try_new(
            Some(movie_id.to_string()),
            "Batman Begins",
            2005,
            vec!["Christian Bale".to_owned(), "Michael Cane".to_owned()],
            chrono::NaiveDate::from_ymd_opt(2005, 6, 15),
        )
        .map_err(|error| UpstreamError::transport_failure(error.to_string()))
    }
}
