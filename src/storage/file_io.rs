//! JSON files on disk
//!
//! Used for the settings file and for loading ledger snapshot fixtures.
//! Ledger entities themselves are never written to disk.

use std::fmt::Display;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

fn storage_error(action: &str, path: &Path, err: impl Display) -> TrackerError {
    TrackerError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read JSON from a file, falling back to `T::default()` when it is missing
pub fn read_json<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => parse(path, &contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(storage_error("read", path, e)),
    }
}

/// Read JSON from a file that must exist
pub fn read_json_required<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TrackerError::Storage(format!("File not found: {}", path.display())),
        _ => storage_error("read", path, e),
    })?;
    parse(path, &contents)
}

fn parse<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, TrackerError> {
    serde_json::from_str(contents).map_err(|e| storage_error("parse", path, e))
}

/// Write pretty JSON through a sibling temp file and a rename
///
/// Readers see either the old file or the new one, never a partial write.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json).map_err(|e| storage_error("write", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })
}
