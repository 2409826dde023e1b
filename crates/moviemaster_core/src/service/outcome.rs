//! Tagged results of mutating service calls.

use crate::model::movie::MovieView;

/// Result of `MovieService::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The movie was stored under a server-assigned ID.
    Created(MovieView),
    /// The repository refused the write.
    Error,
}

impl CreateOutcome {
    /// The created view, if any.
    pub fn movie(&self) -> Option<&MovieView> {
        match self {
            Self::Created(movie) => Some(movie),
            Self::Error => None,
        }
    }

    /// True for `Created`.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Result of `MovieService::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The movie was rewritten; carries the stored result.
    Updated(MovieView),
    /// No movie with the requested ID existed; nothing was written.
    NotFound,
    /// The movie existed at check time but the write did not land.
    Error,
}

impl UpdateOutcome {
    /// The updated view; `None` for `NotFound` and `Error`.
    pub fn movie(&self) -> Option<&MovieView> {
        match self {
            Self::Updated(movie) => Some(movie),
            Self::NotFound | Self::Error => None,
        }
    }

    /// True for `Updated`.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// True for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
