//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod movie_info_source;
mod movie_reviews_source;
mod upstream_error;

#[cfg(test)]
pub use movie_info_source::MockMovieInfoSource;
pub use movie_info_source::{FixtureMovieInfoSource, MovieInfoSource};
#[cfg(test)]
pub use movie_reviews_source::MockMovieReviewsSource;
pub use movie_reviews_source::{FixtureMovieReviewsSource, MovieReviewsSource};
pub use upstream_error::UpstreamError;
