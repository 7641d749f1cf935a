//! User settings for RideCare
//!
//! Manages preferences such as the look-ahead window for upcoming services
//! and the default page sizes for listings and exports.

use serde::{Deserialize, Serialize};

use super::paths::RideCarePaths;
use crate::error::RideCareError;

/// User settings for RideCare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Days ahead considered by `record upcoming` when `--days` is omitted
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: u32,

    /// Default page size for listings
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Maximum number of records written by a full CSV export
    #[serde(default = "default_export_limit")]
    pub export_limit: usize,

    /// Whether `init` creates the default service types
    #[serde(default = "default_true")]
    pub seed_default_service_types: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_upcoming_window_days() -> u32 {
    30
}

fn default_list_limit() -> usize {
    100
}

fn default_export_limit() -> usize {
    10_000
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_window_days: default_upcoming_window_days(),
            list_limit: default_list_limit(),
            export_limit: default_export_limit(),
            seed_default_service_types: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RideCarePaths) -> Result<Self, RideCareError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RideCareError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RideCareError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RideCarePaths) -> Result<(), RideCareError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RideCareError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            RideCareError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
