//! Movie repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Translate store primitives into the async contract used by services.
//! - Assign IDs and `last_updated` stamps on create; stamp updates.
//! - Emit one log event per operation.
//!
//! # Invariants
//! - `create` never overwrites an existing record; a collision yields `None`.
//! - `update` never changes the identifier or the rating.
//! - Log output has no effect on returned values.

use crate::model::movie::{new_movie_id, MovieId, MovieRecord};
use crate::store::MovieStore;
use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use time::OffsetDateTime;

/// Async data access contract for movie records.
///
/// Every operation completes against memory today; the async shape lets a
/// durable backend slot in without touching services.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Returns every record in insertion order.
    async fn get_all(&self) -> Vec<MovieRecord>;

    /// Exact-key lookup.
    async fn get_by_id(&self, id: &str) -> Option<MovieRecord>;

    /// Records whose year contains `year`; `None` when nothing matches.
    async fn get_by_year(&self, year: &str) -> Option<Vec<MovieRecord>>;

    /// Stores `movie` under a freshly generated ID.
    ///
    /// Any caller-supplied ID or timestamp is overwritten. Returns the stored
    /// record, or `None` when the generated ID collides.
    async fn create(&self, movie: MovieRecord) -> Option<MovieRecord>;

    /// Overwrites title, year and actors of `id` with values from `details`.
    ///
    /// Returns the updated record, or `None` when `id` is not stored.
    async fn update(&self, id: &str, details: &MovieRecord) -> Option<MovieRecord>;
}

#[async_trait]
impl<R: MovieRepository + ?Sized> MovieRepository for Arc<R> {
    async fn get_all(&self) -> Vec<MovieRecord> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: &str) -> Option<MovieRecord> {
        (**self).get_by_id(id).await
    }

    async fn get_by_year(&self, year: &str) -> Option<Vec<MovieRecord>> {
        (**self).get_by_year(year).await
    }

    async fn create(&self, movie: MovieRecord) -> Option<MovieRecord> {
        (**self).create(movie).await
    }

    async fn update(&self, id: &str, details: &MovieRecord) -> Option<MovieRecord> {
        (**self).update(id, details).await
    }
}

/// Repository backed by a shared `MovieStore`.
pub struct InMemoryMovieRepository {
    store: Arc<MovieStore>,
    next_id: fn() -> MovieId,
}

impl InMemoryMovieRepository {
    /// Creates a repository over `store` that assigns UUIDv4 identifiers.
    pub fn new(store: Arc<MovieStore>) -> Self {
        Self::with_id_generator(store, new_movie_id)
    }

    /// Creates a repository with a caller-provided ID generator.
    ///
    /// Used by tests to force collisions deterministically.
    pub fn with_id_generator(store: Arc<MovieStore>, next_id: fn() -> MovieId) -> Self {
        Self { store, next_id }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn get_all(&self) -> Vec<MovieRecord> {
        let movies = self.store.all();
        info!(
            "event=movie_get_all module=repo status=ok count={}",
            movies.len()
        );
        movies
    }

    async fn get_by_id(&self, id: &str) -> Option<MovieRecord> {
        let movie = self.store.get(id);
        match movie {
            Some(_) => info!("event=movie_get_by_id module=repo status=ok id={id}"),
            None => warn!("event=movie_get_by_id module=repo status=not_found id={id}"),
        }
        movie
    }

    async fn get_by_year(&self, year: &str) -> Option<Vec<MovieRecord>> {
        let movies = self.store.by_year(year);
        match &movies {
            Some(found) => info!(
                "event=movie_get_by_year module=repo status=ok year={year} count={}",
                found.len()
            ),
            None => warn!("event=movie_get_by_year module=repo status=not_found year={year}"),
        }
        movies
    }

    async fn create(&self, mut movie: MovieRecord) -> Option<MovieRecord> {
        movie.id = (self.next_id)();
        movie.last_updated = OffsetDateTime::now_utc();

        match self.store.insert(movie.clone()) {
            Ok(()) => {
                info!("event=movie_create module=repo status=ok id={}", movie.id);
                Some(movie)
            }
            Err(err) => {
                warn!("event=movie_create module=repo status=rejected error={err}");
                None
            }
        }
    }

    async fn update(&self, id: &str, details: &MovieRecord) -> Option<MovieRecord> {
        let updated = self.store.replace(id, details, OffsetDateTime::now_utc());
        match updated {
            Some(_) => info!("event=movie_update module=repo status=ok id={id}"),
            None => warn!("event=movie_update module=repo status=not_found id={id}"),
        }
        updated
    }
}
