//! Movie domain model shared by store, repository and service layers.
//!
//! # Responsibility
//! - Define the storage record, the caller-facing view and the request input.
//! - Own the JSON wire names for each shape.
//!
//! # Invariants
//! - Every stored record is identified by a unique, immutable `MovieId`.
//! - Records are never deleted; only create and update mutate the store.

pub mod movie;
pub(crate) mod timestamp;
