//! Ordered, lock-guarded movie store.
//!
//! # Responsibility
//! - Keep records in a `Vec` for stable insertion-order snapshots.
//! - Keep an id -> position index for exact-key lookup and collision checks.
//!
//! # Invariants
//! - `index` and `records` always describe the same set of records.
//! - Records are never removed, so stored positions never shift.

use crate::model::movie::{MovieId, MovieRecord};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::OffsetDateTime;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level write failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `insert` was given an identifier that is already stored.
    Collision(MovieId),
    /// The seed sequence contained the same identifier twice.
    DuplicateSeedId(MovieId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collision(id) => write!(f, "movie id already exists: {id}"),
            Self::DuplicateSeedId(id) => write!(f, "duplicate movie id in seed data: {id}"),
        }
    }
}

impl Error for StoreError {}

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<MovieRecord>,
    index: HashMap<MovieId, usize>,
}

impl StoreInner {
    fn push(&mut self, record: MovieRecord) {
        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
    }
}

/// Process-wide movie storage, shared by reference (`Arc<MovieStore>`).
#[derive(Debug, Default)]
pub struct MovieStore {
    inner: RwLock<StoreInner>,
}

impl MovieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from a fully-loaded seed sequence.
    ///
    /// # Errors
    /// - `StoreError::DuplicateSeedId` when two seed records share an ID.
    pub fn from_records(records: impl IntoIterator<Item = MovieRecord>) -> StoreResult<Self> {
        let mut inner = StoreInner::default();
        for record in records {
            if inner.index.contains_key(&record.id) {
                return Err(StoreError::DuplicateSeedId(record.id));
            }
            inner.push(record);
        }

        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// Returns a snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<MovieRecord> {
        self.read().records.clone()
    }

    /// Exact-key lookup.
    pub fn get(&self, id: &str) -> Option<MovieRecord> {
        let inner = self.read();
        inner
            .index
            .get(id)
            .map(|position| inner.records[*position].clone())
    }

    /// Returns records whose `year` contains `fragment`, in insertion order.
    ///
    /// Zero matches yield `None`, never an empty vector.
    pub fn by_year(&self, fragment: &str) -> Option<Vec<MovieRecord>> {
        let matches = self
            .read()
            .records
            .iter()
            .filter(|record| record.year.contains(fragment))
            .cloned()
            .collect::<Vec<_>>();

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    /// Inserts a record if its identifier is free.
    ///
    /// # Errors
    /// - `StoreError::Collision` when the identifier is already stored; the
    ///   existing record is left untouched.
    pub fn insert(&self, record: MovieRecord) -> StoreResult<()> {
        let mut inner = self.write();
        if inner.index.contains_key(&record.id) {
            return Err(StoreError::Collision(record.id));
        }
        inner.push(record);
        Ok(())
    }

    /// Overwrites title, year and actors of an existing record in place.
    ///
    /// The identifier and rating are preserved and `last_updated` is set to
    /// `now`. Returns the updated record, or `None` when `id` is not stored.
    pub fn replace(
        &self,
        id: &str,
        fields: &MovieRecord,
        now: OffsetDateTime,
    ) -> Option<MovieRecord> {
        let mut inner = self.write();
        let position = *inner.index.get(id)?;
        let record = &mut inner.records[position];
        record.title = fields.title.clone();
        record.year = fields.year.clone();
        record.actors = fields.actors.clone();
        record.last_updated = now;
        Some(record.clone())
    }

    // Writers never leave a record half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{MovieStore, StoreError};
    use crate::model::movie::MovieRecord;

    #[test]
    fn new_store_is_empty() {
        let store = MovieStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.by_year("").is_none());
    }

    #[test]
    fn index_tracks_positions_after_inserts() {
        let store = MovieStore::from_records(vec![MovieRecord::with_id("a", "A", "2001")]).unwrap();
        store.insert(MovieRecord::with_id("b", "B", "2002")).unwrap();
        store.insert(MovieRecord::with_id("c", "C", "2003")).unwrap();

        assert_eq!(store.get("c").unwrap().title, "C");
        assert_eq!(store.get("a").unwrap().title, "A");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let err = MovieStore::from_records(vec![
            MovieRecord::with_id("dup", "First", "2001"),
            MovieRecord::with_id("dup", "Second", "2002"),
        ])
        .unwrap_err();
        assert_eq!(err, StoreError::DuplicateSeedId("dup".to_string()));
    }
}
