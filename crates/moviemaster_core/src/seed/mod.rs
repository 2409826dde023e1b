//! Seed data loading for the in-memory store.
//!
//! # Responsibility
//! - Read the JSON seed file once at startup.
//! - Decode it into `MovieRecord` values for `MovieStore::from_records`.
//!
//! # Invariants
//! - The seed is read exactly once; the store is never reloaded.
//! - Seed decoding does not validate field contents beyond JSON shape.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod load;

pub use load::{load_seed_file, parse_seed};

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed data: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
