//! Catalog persistence: one JSON document, rewritten after every mutation.
//!
//! The whole four-section catalog is serialized to a single pretty-printed
//! JSON file keyed by section name. Writes go through a temp file and an
//! atomic rename so a crash mid-write cannot truncate the document.
//!
//! Loading is lenient: a missing or unparsable document means "no prior
//! state" and the built-in defaults are used. A document that carries only
//! some of the four sections replaces those wholesale and leaves the rest
//! at their defaults.

use std::path::{Path, PathBuf};

use thiserror::Error;

use miola_core::{Catalog, CatalogSnapshot};

/// Errors writing the persisted catalog document.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load the catalog from the persisted document.
///
/// Never fails: a missing, unreadable, or unparsable file means "no prior
/// state" and falls back to the default skeleton with a log line.
#[must_use]
pub fn load(path: &Path) -> Catalog {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No persisted catalog, using defaults");
            return Catalog::with_defaults();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read persisted catalog, using defaults");
            return Catalog::with_defaults();
        }
    };

    match serde_json::from_str::<CatalogSnapshot>(&raw) {
        Ok(snapshot) => {
            tracing::info!(path = %path.display(), "Catalog loaded from file");
            Catalog::from_snapshot(snapshot)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Persisted catalog is unparsable, using defaults");
            Catalog::with_defaults()
        }
    }
}

/// Write the full catalog document.
///
/// Writes to `{path}.tmp` first and renames over the target, so readers
/// never observe a half-written document.
///
/// # Errors
///
/// Returns `PersistError` if serialization or the filesystem write fails.
pub async fn save(path: &Path, catalog: &Catalog) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(catalog)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}
