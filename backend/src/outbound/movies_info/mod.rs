//! Movie-info outbound adapter.
//!
//! Thin HTTP implementation of the `MovieInfoSource` port.

mod dto;
mod http_source;

pub use http_source::MoviesInfoHttpSource;
