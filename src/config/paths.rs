//! Path management for RideCare
//!
//! Resolves where configuration, data files and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `RIDECARE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`$XDG_CONFIG_HOME/ridecare`,
//!    `~/Library/Application Support/ridecare`, `%APPDATA%\ridecare`)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::RideCareError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RIDECARE_DATA_DIR";

/// Manages all paths used by RideCare
#[derive(Debug, Clone)]
pub struct RideCarePaths {
    /// Base directory for all RideCare data
    base_dir: PathBuf,
}

impl RideCarePaths {
    /// Create a new RideCarePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, RideCareError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create RideCarePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to vehicles.json
    pub fn vehicles_file(&self) -> PathBuf {
        self.data_dir().join("vehicles.json")
    }

    /// Get the path to service_types.json
    pub fn service_types_file(&self) -> PathBuf {
        self.data_dir().join("service_types.json")
    }

    /// Get the path to service_records.json
    pub fn service_records_file(&self) -> PathBuf {
        self.data_dir().join("service_records.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RideCareError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RideCareError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RideCareError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if RideCare has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, RideCareError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| RideCareError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("ridecare"))
}
