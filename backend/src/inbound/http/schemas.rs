//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror the serialized shape of their domain counterparts
//! and live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::MovieInfo`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MovieInfo, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MovieInfoSchema {
    /// Identifier assigned by the movie-info service.
    #[schema(example = "1")]
    movie_info_id: Option<String>,
    /// Movie title.
    #[schema(example = "Batman Begins")]
    name: String,
    /// Release year; always positive.
    #[schema(example = 2005, minimum = 1)]
    year: i32,
    /// Cast members in billing order.
    #[schema(example = json!(["Christian Bale", "Michael Cane"]))]
    cast: Vec<String>,
    /// Release date as an ISO 8601 calendar date.
    #[schema(rename = "release_date", example = "2005-06-15")]
    release_date: Option<chrono::NaiveDate>,
}

/// OpenAPI schema for [`crate::domain::Review`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Review, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewSchema {
    #[schema(example = "65a1f2")]
    review_id: Option<String>,
    /// Identifier of the reviewed movie.
    #[schema(example = 1)]
    movie_info_id: i64,
    #[schema(example = "Awesome Movie")]
    comment: String,
    #[schema(example = 9.0)]
    rating: f64,
}

/// OpenAPI schema for [`crate::domain::Movie`].
///
/// Aggregated answer of `GET /v1/movies/{id}`.
#[derive(ToSchema)]
#[schema(as = crate::domain::Movie, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MovieSchema {
    movie_info: MovieInfoSchema,
    /// Reviews in upstream order; empty when the movie has none.
    review_list: Vec<ReviewSchema>,
}
