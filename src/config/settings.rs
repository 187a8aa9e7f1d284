//! User settings for the car rental system
//!
//! Persisted as `config.json` in the base directory. Every field has a
//! default so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::RentalPaths;
use crate::error::RentalError;

/// Settings for the car rental system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Seed the sample fleet and default admin into empty stores
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Append every mutation to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            seed_sample_data: true,
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &RentalPaths) -> Result<Self, RentalError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| RentalError::Io(format!("Failed to read settings file: {}", e)))?;

        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_json::from_str(&contents)
            .map_err(|e| RentalError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RentalPaths) -> Result<(), RentalError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RentalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| RentalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
