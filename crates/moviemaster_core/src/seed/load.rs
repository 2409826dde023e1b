//! Seed file readers.
//!
//! # Responsibility
//! - Read a JSON array of movie objects from disk or memory.
//! - Emit `seed_load` logging events with duration and status.

use super::{SeedError, SeedResult};
use crate::model::movie::MovieRecord;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Reads and decodes the seed file at `path`.
///
/// # Side effects
/// - Emits `seed_load` logging events with record count and duration.
pub fn load_seed_file(path: impl AsRef<Path>) -> SeedResult<Vec<MovieRecord>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=seed_load module=seed status=start path={}",
        path.display()
    );

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!(
                "event=seed_load module=seed status=error duration_ms={} error_code=seed_read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(SeedError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match parse_seed(&text) {
        Ok(movies) => {
            info!(
                "event=seed_load module=seed status=ok count={} duration_ms={}",
                movies.len(),
                started_at.elapsed().as_millis()
            );
            Ok(movies)
        }
        Err(err) => {
            error!(
                "event=seed_load module=seed status=error duration_ms={} error_code=seed_parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Decodes seed JSON (an array of movie objects).
///
/// Unknown keys are ignored; missing or null string fields become empty.
pub fn parse_seed(json: &str) -> SeedResult<Vec<MovieRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::parse_seed;
    use crate::seed::SeedError;

    #[test]
    fn parse_seed_ignores_unknown_keys() {
        let movies = parse_seed(
            r#"[{"imdbID":"tt1","Title":"Heat","Year":"1995","Genre":"Crime","Plot":"..."}]"#,
        )
        .unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, "tt1");
        assert_eq!(movies[0].title, "Heat");
    }

    #[test]
    fn parse_seed_rejects_non_array_documents() {
        let err = parse_seed(r#"{"imdbId":"tt1"}"#).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }
}
