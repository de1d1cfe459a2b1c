//! Movie aggregate and the upstream records it is composed from.
//!
//! `MovieInfo` and `Review` are owned by their upstream services; the gateway
//! validates them once on decode and treats them as immutable values.
//! `Movie` is the gateway-owned composite built fresh for every request.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Validation errors raised while constructing movie domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieValidationError {
    /// The movie identifier was empty once trimmed.
    EmptyMovieId,
    /// The movie name was empty once trimmed.
    EmptyName,
    /// The release year was zero or negative.
    NonPositiveYear { year: i32 },
    /// A cast entry was empty once trimmed.
    BlankCastMember { index: usize },
}

impl fmt::Display for MovieValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMovieId => write!(f, "movie id must not be empty"),
            Self::EmptyName => write!(f, "movieInfo.name cannot be empty"),
            Self::NonPositiveYear { year } => {
                write!(f, "movieInfo.year must be a Positive value (got {year})")
            }
            Self::BlankCastMember { index } => {
                write!(f, "movieInfo.cast cannot be blank (entry {index})")
            }
        }
    }
}

impl std::error::Error for MovieValidationError {}

/// Identifier of a movie as supplied by the caller.
///
/// ## Invariants
/// - Non-empty once trimmed; surrounding whitespace is removed.
///
/// # Examples
/// ```
/// use movies_gateway::domain::MovieId;
///
/// let id = MovieId::new(" 1 ").expect("valid id");
/// assert_eq!(id.as_ref(), "1");
/// assert!(MovieId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieId(String);

impl MovieId {
    /// Validate and construct a [`MovieId`].
    pub fn new(id: impl AsRef<str>) -> Result<Self, MovieValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MovieValidationError::EmptyMovieId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptive record for one movie, produced by the info upstream.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `year` is strictly positive.
/// - every `cast` entry is non-empty once trimmed; order is preserved.
///
/// # Examples
/// ```
/// use movies_gateway::domain::MovieInfo;
///
/// let info = MovieInfo::try_new(
///     Some("1".to_owned()),
///     "Batman Begins",
///     2005,
///     vec!["Christian Bale".to_owned(), "Michael Cane".to_owned()],
///     None,
/// )
/// .expect("valid movie info");
/// assert_eq!(info.name(), "Batman Begins");
/// assert_eq!(info.cast().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    movie_info_id: Option<String>,
    name: String,
    year: i32,
    cast: Vec<String>,
    #[serde(rename = "release_date", skip_serializing_if = "Option::is_none")]
    release_date: Option<NaiveDate>,
}

impl MovieInfo {
    /// Fallible constructor enforcing the record invariants.
    pub fn try_new(
        movie_info_id: Option<String>,
        name: impl Into<String>,
        year: i32,
        cast: Vec<String>,
        release_date: Option<NaiveDate>,
    ) -> Result<Self, MovieValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MovieValidationError::EmptyName);
        }
        if year <= 0 {
            return Err(MovieValidationError::NonPositiveYear { year });
        }
        if let Some(index) = cast.iter().position(|member| member.trim().is_empty()) {
            return Err(MovieValidationError::BlankCastMember { index });
        }

        Ok(Self {
            movie_info_id,
            name,
            year,
            cast,
            release_date,
        })
    }

    /// Identifier assigned by the info upstream, when persisted.
    pub fn movie_info_id(&self) -> Option<&str> {
        self.movie_info_id.as_deref()
    }

    /// Movie title.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Release year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Ordered cast list.
    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    /// Release date, when known.
    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }
}

/// One review of a movie, produced by the reviews upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Identifier assigned by the reviews upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_id: Option<String>,
    /// Identifier of the reviewed movie.
    pub movie_info_id: i64,
    /// Free-text comment.
    pub comment: String,
    /// Numeric rating.
    pub rating: f64,
}

/// Composite response value: one [`MovieInfo`] and its reviews.
///
/// A `Movie` cannot exist without its info record; an empty review list is a
/// valid state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    movie_info: MovieInfo,
    review_list: Vec<Review>,
}

impl Movie {
    /// Compose a movie from its info record and ordered reviews.
    pub fn new(movie_info: MovieInfo, review_list: Vec<Review>) -> Self {
        Self {
            movie_info,
            review_list,
        }
    }

    /// Info record of the movie.
    pub fn movie_info(&self) -> &MovieInfo {
        &self.movie_info
    }

    /// Reviews in upstream order.
    pub fn review_list(&self) -> &[Review] {
        &self.review_list
    }
}
