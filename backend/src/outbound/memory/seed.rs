//! Seed file loading for the in-memory repository.
//!
//! A seed file is a JSON array of records shaped like the API output; `id`
//! (or `_id`) may be omitted and is then generated.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::info;

use crate::domain::CharacterPlod;

/// Errors raised while loading seed records.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Seed file is not a valid array of records.
    #[error("invalid seed records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of records.
///
/// # Examples
/// ```
/// use plod_backend::outbound::memory::parse_seed;
///
/// let records = parse_seed(r#"[{"name": "Hodor", "plod": 5}]"#).expect("valid seed");
/// assert_eq!(records[0].name(), "Hodor");
/// ```
pub fn parse_seed(contents: &str) -> Result<Vec<CharacterPlod>, SeedError> {
    Ok(serde_json::from_str(contents)?)
}

/// Read and parse a seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<CharacterPlod>, SeedError> {
    let read_error = |source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    let records = parse_seed(&contents)?;
    info!(path = %path.display(), count = records.len(), "loaded character PLOD seed");
    Ok(records)
}
