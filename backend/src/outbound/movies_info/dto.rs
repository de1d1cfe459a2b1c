//! DTOs for decoding movie-info JSON responses.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{MovieInfo, MovieValidationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MovieInfoDto {
    #[serde(default)]
    pub(super) movie_info_id: Option<String>,
    pub(super) name: String,
    pub(super) year: i32,
    #[serde(default)]
    pub(super) cast: Vec<String>,
    #[serde(default, rename = "release_date", alias = "releaseDate")]
    pub(super) release_date: Option<NaiveDate>,
}

impl MovieInfoDto {
    pub(super) fn into_domain(self) -> Result<MovieInfo, MovieValidationError> {
        MovieInfo::try_new(
            self.movie_info_id,
            self.name,
            self.year,
            self.cast,
            self.release_date,
        )
    }
}
