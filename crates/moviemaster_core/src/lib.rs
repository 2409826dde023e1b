//! Core domain logic for MovieMaster.
//! This crate owns the movie store and every create/update/lookup invariant.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::movie::{
    new_movie_id, MovieId, MovieInput, MovieInputError, MovieRecord, MovieView,
};
pub use repo::movie_repo::{InMemoryMovieRepository, MovieRepository};
pub use seed::{load_seed_file, parse_seed, SeedError, SeedResult};
pub use service::movie_service::MovieService;
pub use service::outcome::{CreateOutcome, UpdateOutcome};
pub use store::{MovieStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
