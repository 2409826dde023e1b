//! Field mapping between storage records and caller-facing shapes.
//!
//! Pure functions; no validation. `title` <-> `movie_title` is the only
//! renamed field.

use crate::model::movie::{MovieInput, MovieRecord, MovieView};
use crate::model::timestamp::epoch;

/// Projects a stored record into its caller-facing view.
pub fn to_view(record: &MovieRecord) -> MovieView {
    MovieView {
        id: record.id.clone(),
        movie_title: record.title.clone(),
        year: record.year.clone(),
        actors: record.actors.clone(),
        rating: record.rating.clone(),
        last_updated: record.last_updated,
    }
}

/// Builds a storage record from request input.
///
/// `id` is left empty and `last_updated` at the epoch: both are assigned by
/// the repository. Missing input fields become empty strings.
pub fn to_record(input: &MovieInput) -> MovieRecord {
    MovieRecord {
        id: String::new(),
        title: input.title.clone().unwrap_or_default(),
        year: input.year.clone().unwrap_or_default(),
        actors: input.actors.clone().unwrap_or_default(),
        rating: input.rating.clone().unwrap_or_default(),
        last_updated: epoch(),
    }
}
