//! Service type repository for JSON storage
//!
//! Manages loading and saving service types to service_types.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::RideCareError;
use crate::models::{ServiceType, ServiceTypeId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable service type data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct ServiceTypeData {
    pub service_types: Vec<ServiceType>,
}

/// Repository for service type persistence
pub struct ServiceTypeRepository {
    path: PathBuf,
    data: RwLock<HashMap<ServiceTypeId, ServiceType>>,
}

impl ServiceTypeRepository {
    /// Create a new service type repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load service types from disk
    pub fn load(&self) -> Result<(), RideCareError> {
        let file_data: ServiceTypeData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = file_data
            .service_types
            .into_iter()
            .map(|service_type| (service_type.id, service_type))
            .collect();

        debug!(count = data.len(), "loaded service types");
        Ok(())
    }

    /// Save service types to disk
    pub fn save(&self) -> Result<(), RideCareError> {
        let service_types = self.get_all()?;
        write_json_atomic(&self.path, &ServiceTypeData { service_types })
    }

    /// Get a service type by ID
    pub fn get(&self, id: ServiceTypeId) -> Result<Option<ServiceType>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all service types sorted by name
    pub fn get_all(&self) -> Result<Vec<ServiceType>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut service_types: Vec<_> = data.values().cloned().collect();
        service_types.sort_by_key(|t| t.name.to_lowercase());
        Ok(service_types)
    }

    /// Get a service type by exact name (case-insensitive)
    ///
    /// A handful of service types exist at most, so this scans.
    pub fn get_by_name(&self, name: &str) -> Result<Option<ServiceType>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|t| t.matches_name(name)).cloned())
    }

    /// Insert or update a service type
    pub fn upsert(&self, service_type: ServiceType) -> Result<(), RideCareError> {
        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(service_type.id, service_type);
        Ok(())
    }

    /// Count service types
    pub fn count(&self) -> Result<usize, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
