//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **movies_info**: reqwest client for the movie-info upstream
//! - **reviews**: reqwest client for the reviews upstream
//!
//! Adapters own transport details only: URL building, timeouts, status
//! classification, and JSON decoding. Retry budgeting is delegated to the
//! domain `RetryPolicy`.

pub mod movies_info;
pub mod reviews;
mod upstream_http;

pub use upstream_http::{UpstreamClientError, UpstreamHttpOptions};
