//! Movie aggregation endpoint.
//!
//! ```text
//! GET /v1/movies/{id}
//! ```

use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::MovieId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::MovieSchema;
use crate::inbound::http::state::HttpState;

/// Fetch a movie together with its reviews.
#[utoipa::path(
    get,
    path = "/v1/movies/{id}",
    description = "Compose the movie-info record and its reviews. Example request: GET /v1/movies/1",
    params(("id" = String, Path, description = "Movie identifier understood by both upstreams")),
    responses(
        (status = 200, description = "Movie with its reviews", body = MovieSchema),
        (status = 400, description = "Blank identifier or request rejected by an upstream", body = String, content_type = "text/plain"),
        (status = 404, description = "No movie info for the identifier", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream server or transport failure", body = String, content_type = "text/plain")
    ),
    tags = ["movies"],
    operation_id = "getMovieById"
)]
#[get("/movies/{id}")]
pub async fn get_movie(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let movie_id = MovieId::new(path.into_inner())?;
    debug!(movie_id = %movie_id, "aggregating movie");
    let movie = state.movies.get_movie(&movie_id).await?;
    Ok(HttpResponse::Ok().json(movie))
}
