//! Path management for the car rental system
//!
//! ## Path Resolution Order
//!
//! 1. `CAR_RENTAL_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `car-rental`
//!    (`~/.config/car-rental` on Linux, `%APPDATA%\car-rental` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::RentalError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CAR_RENTAL_DATA_DIR";

/// Manages all paths used by the rental system
#[derive(Debug, Clone)]
pub struct RentalPaths {
    base_dir: PathBuf,
}

impl RentalPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, RentalError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the record files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn cars_file(&self) -> PathBuf {
        self.data_dir().join("cars.json")
    }

    /// Customer records, kept in users.json
    pub fn customers_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    pub fn admins_file(&self) -> PathBuf {
        self.data_dir().join("admins.json")
    }

    /// Global rental index keyed by username
    pub fn rentals_file(&self) -> PathBuf {
        self.data_dir().join("rentals.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RentalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RentalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RentalError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, RentalError> {
    ProjectDirs::from("", "", "car-rental")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RentalError::Config("Could not determine home directory".into()))
}
