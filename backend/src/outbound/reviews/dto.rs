//! DTOs for decoding review list responses.

use serde::Deserialize;

use crate::domain::Review;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReviewDto {
    #[serde(default)]
    pub(super) review_id: Option<String>,
    pub(super) movie_info_id: i64,
    #[serde(default)]
    pub(super) comment: String,
    pub(super) rating: f64,
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Self {
            review_id: dto.review_id,
            movie_info_id: dto.movie_info_id,
            comment: dto.comment,
            rating: dto.rating,
        }
    }
}
