//! Reviews outbound adapter.
//!
//! Thin HTTP implementation of the `MovieReviewsSource` port.

mod dto;
mod http_source;

pub use http_source::ReviewsHttpSource;
