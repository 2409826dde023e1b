//! Movie record, view and input shapes.
//!
//! # Responsibility
//! - `MovieRecord` is the storage entity owned by `MovieStore`.
//! - `MovieView` is the read-only projection handed to callers.
//! - `MovieInput` is the create/update request body.
//!
//! # Invariants
//! - `MovieRecord::id` is assigned by the repository and never changes.
//! - `year` is free-form text; it is matched by substring, never parsed.
//! - `last_updated` is refreshed on every successful mutation.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::OffsetDateTime;
use uuid::Uuid;

/// Stable identifier of a stored movie.
pub type MovieId = String;

/// Generates a fresh globally-unique movie identifier.
pub fn new_movie_id() -> MovieId {
    Uuid::new_v4().to_string()
}

/// Storage shape of a movie, as held by the store and the seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(
        rename = "imdbId",
        alias = "imdbID",
        default,
        deserialize_with = "nullable_string"
    )]
    pub id: MovieId,
    #[serde(rename = "Title", default, deserialize_with = "nullable_string")]
    pub title: String,
    /// Free-form; seed data contains ranges such as `2011–2019`.
    #[serde(rename = "Year", default, deserialize_with = "nullable_string")]
    pub year: String,
    /// Comma separated, informal.
    #[serde(rename = "Actors", default, deserialize_with = "nullable_string")]
    pub actors: String,
    #[serde(rename = "imdbRating", default, deserialize_with = "nullable_string")]
    pub rating: String,
    #[serde(
        rename = "LastUpdated",
        with = "crate::model::timestamp",
        default = "crate::model::timestamp::epoch"
    )]
    pub last_updated: OffsetDateTime,
}

impl MovieRecord {
    /// Creates a record with a caller-provided ID.
    ///
    /// Used for seeding and tests; runtime creation goes through the
    /// repository, which always assigns its own ID.
    pub fn with_id(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            actors: String::new(),
            rating: String::new(),
            last_updated: OffsetDateTime::now_utc(),
        }
    }

    pub fn with_actors(mut self, actors: impl Into<String>) -> Self {
        self.actors = actors.into();
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }
}

/// Caller-facing projection of a `MovieRecord`.
///
/// `movie_title` is the only renamed field; everything else mirrors storage.
/// Keys are camelCase except `Rating`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    pub id: MovieId,
    pub movie_title: String,
    pub year: String,
    pub actors: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(with = "crate::model::timestamp")]
    pub last_updated: OffsetDateTime,
}

/// Request body for create and update.
///
/// Fields are optional on the wire so that missing values surface as
/// `MovieInputError` at the transport boundary instead of a decode failure.
/// Both PascalCase and camelCase keys are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInput {
    #[serde(
        rename = "MovieTitle",
        alias = "movieTitle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        rename = "Year",
        alias = "year",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        rename = "Actors",
        alias = "actors",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub actors: Option<String>,
    #[serde(
        rename = "ImdbRating",
        alias = "imdbRating",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<String>,
}

impl MovieInput {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        actors: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            year: Some(year.into()),
            actors: Some(actors.into()),
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Checks the fields the transport layer requires before calling the service.
    ///
    /// Blank (whitespace-only) values count as missing. `rating` is optional.
    pub fn validate(&self) -> Result<(), MovieInputError> {
        require("MovieTitle", self.title.as_deref())?;
        require("Year", self.year.as_deref())?;
        require("Actors", self.actors.as_deref())?;
        Ok(())
    }
}

/// Validation failure for `MovieInput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieInputError {
    MissingField(&'static str),
}

impl Display for MovieInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
        }
    }
}

impl Error for MovieInputError {}

fn require(field: &'static str, value: Option<&str>) -> Result<(), MovieInputError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(MovieInputError::MissingField(field)),
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
