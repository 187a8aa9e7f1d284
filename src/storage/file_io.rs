//! File I/O utilities with atomic writes
//!
//! Missing and empty files read as an empty collection. A file that exists
//! but does not decode is reported as a storage error, and the repository
//! that owns it refuses to save until it loads cleanly, so the unreadable
//! file is never replaced by an empty collection.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::RentalError;

/// Read JSON from a file, returning a default value if the file is absent or empty
pub fn read_json<T, P>(path: P) -> Result<T, RentalError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let mut contents = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|e| RentalError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    if contents.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(&contents).map_err(|e| {
        log::error!("Failed to parse {}: {}", path.display(), e);
        RentalError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Tracks whether a repository's file failed to load
#[derive(Debug, Default)]
pub struct LoadGuard {
    failed: AtomicBool,
}

impl LoadGuard {
    /// Remember the outcome of a load and pass it through
    pub fn record<T>(&self, result: Result<T, RentalError>) -> Result<T, RentalError> {
        self.failed.store(result.is_err(), Ordering::SeqCst);
        result
    }

    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    /// Error out if writing `path` would clobber a file that did not load
    pub fn check_writable(&self, path: &Path) -> Result<(), RentalError> {
        if self.is_failed() {
            return Err(RentalError::Storage(format!(
                "{} could not be loaded; changes to it are not saved",
                path.display()
            )));
        }
        Ok(())
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), RentalError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RentalError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| RentalError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| RentalError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| RentalError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| RentalError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        RentalError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}
