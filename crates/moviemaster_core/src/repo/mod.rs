//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the async data access contract consumed by the service layer.
//! - Keep store details (locking, ordering, ID assignment) out of services.
//!
//! # Invariants
//! - Repositories signal only found vs absent; richer outcomes belong to
//!   the service layer.
//! - Repositories assign identifiers and timestamps; callers never do.

pub mod movie_repo;
