//! In-memory record store.
//!
//! # Responsibility
//! - Own every `MovieRecord` for the lifetime of the process.
//! - Provide exclusive-create, lookup and in-place update primitives.
//!
//! # Invariants
//! - Identifiers are unique; `insert` never overwrites.
//! - Iteration order is insertion order (seed order, then creation order).
//! - `insert` and `replace` are each atomic under the store lock.

pub mod movie_store;

pub use movie_store::{MovieStore, StoreError, StoreResult};
