//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the movie aggregation endpoint, the health probes, and
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document is
//! served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{MovieInfoSchema, MovieSchema, ReviewSchema};
use utoipa::OpenApi;

/// OpenAPI document for the gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies gateway API",
        description = "Aggregates movie info and reviews from their upstream services."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::movies::get_movie,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(MovieSchema, MovieInfoSchema, ReviewSchema)),
    tags(
        (name = "movies", description = "Movie aggregation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const MOVIE_SCHEMA_NAME: &str = "crate.domain.Movie";
    const MOVIE_INFO_SCHEMA_NAME: &str = "crate.domain.MovieInfo";
    const REVIEW_SCHEMA_NAME: &str = "crate.domain.Review";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(MOVIE_SCHEMA_NAME, &["movieInfo", "reviewList"])]
    #[case(MOVIE_INFO_SCHEMA_NAME, &["movieInfoId", "name", "year", "cast", "release_date"])]
    #[case(REVIEW_SCHEMA_NAME, &["reviewId", "movieInfoId", "comment", "rating"])]
    fn schemas_use_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");

        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[test]
    fn movie_path_is_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/v1/movies/{id}"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
    }
}
