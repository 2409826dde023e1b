//! Movie use-case service.
//!
//! # Responsibility
//! - Provide find/create/update entry points for transport callers.
//! - Map between request/view shapes and storage records.
//! - Layer `NotFound` vs `Error` discrimination over repository absence.
//!
//! # Invariants
//! - Every operation calls the repository at most once per step and never
//!   retries.
//! - `update` checks existence before writing and does not write when the
//!   movie is missing. The check and the write are separate repository
//!   calls, so a concurrent writer can interleave between them.

use crate::model::movie::{MovieInput, MovieView};
use crate::repo::movie_repo::MovieRepository;
use crate::service::mapper::{to_record, to_view};
use crate::service::outcome::{CreateOutcome, UpdateOutcome};
use log::{error, info, warn};

/// Movie service facade over repository implementations.
pub struct MovieService<R: MovieRepository> {
    repo: R,
}

impl<R: MovieRepository> MovieService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists every movie in store order.
    pub async fn find_all(&self) -> Vec<MovieView> {
        let movies = self.repo.get_all().await;
        info!(
            "event=find_all module=service status=ok count={}",
            movies.len()
        );
        movies.iter().map(to_view).collect()
    }

    /// Lists movies whose year contains `year`.
    ///
    /// Returns `None` when nothing matches.
    pub async fn find_by_year(&self, year: &str) -> Option<Vec<MovieView>> {
        let movies = self.repo.get_by_year(year).await;
        info!(
            "event=find_by_year module=service status={} year={year}",
            if movies.is_some() { "ok" } else { "not_found" }
        );
        movies.map(|found| found.iter().map(to_view).collect())
    }

    /// Gets one movie by ID.
    pub async fn find_by_id(&self, id: &str) -> Option<MovieView> {
        let movie = self.repo.get_by_id(id).await;
        info!(
            "event=find_by_id module=service status={} id={id}",
            if movie.is_some() { "ok" } else { "not_found" }
        );
        movie.as_ref().map(to_view)
    }

    /// Creates a movie from request input.
    ///
    /// # Contract
    /// - The stored movie gets a server-assigned ID.
    /// - Repository refusal maps to `CreateOutcome::Error`.
    pub async fn create(&self, input: &MovieInput) -> CreateOutcome {
        let Some(created) = self.repo.create(to_record(input)).await else {
            error!("event=create module=service status=error reason=repository_returned_none");
            return CreateOutcome::Error;
        };

        info!("event=create module=service status=ok id={}", created.id);
        CreateOutcome::Created(to_view(&created))
    }

    /// Updates title, year and actors of an existing movie.
    ///
    /// # Contract
    /// - Missing movie maps to `UpdateOutcome::NotFound` and nothing is written.
    /// - Absence from the write after a successful existence check maps to
    ///   `UpdateOutcome::Error`.
    pub async fn update(&self, id: &str, input: &MovieInput) -> UpdateOutcome {
        if self.repo.get_by_id(id).await.is_none() {
            warn!("event=update module=service status=not_found id={id}");
            return UpdateOutcome::NotFound;
        }

        let Some(updated) = self.repo.update(id, &to_record(input)).await else {
            error!(
                "event=update module=service status=error id={id} reason=repository_returned_none"
            );
            return UpdateOutcome::Error;
        };

        info!("event=update module=service status=ok id={id}");
        UpdateOutcome::Updated(to_view(&updated))
    }
}
