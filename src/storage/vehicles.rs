//! Vehicle repository for JSON storage
//!
//! Manages loading and saving vehicles to vehicles.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::RideCareError;
use crate::models::{Vehicle, VehicleId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable vehicle data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct VehicleData {
    vehicles: Vec<Vehicle>,
}

/// Repository for vehicle persistence
pub struct VehicleRepository {
    path: PathBuf,
    data: RwLock<HashMap<VehicleId, Vehicle>>,
    /// Index: normalized vehicle number -> vehicle_id
    by_number: RwLock<HashMap<String, VehicleId>>,
}

impl VehicleRepository {
    /// Create a new vehicle repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_number: RwLock::new(HashMap::new()),
        }
    }

    /// Load vehicles from disk
    pub fn load(&self) -> Result<(), RideCareError> {
        let file_data: VehicleData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_number = self.by_number.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_number.clear();

        for vehicle in file_data.vehicles {
            by_number.insert(Vehicle::normalize_number(&vehicle.vehicle_number), vehicle.id);
            data.insert(vehicle.id, vehicle);
        }

        debug!(count = data.len(), "loaded vehicles");
        Ok(())
    }

    /// Save vehicles to disk, oldest first
    pub fn save(&self) -> Result<(), RideCareError> {
        let vehicles = self.get_all()?;
        write_json_atomic(&self.path, &VehicleData { vehicles })
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: VehicleId) -> Result<Option<Vehicle>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all vehicles in registration order
    pub fn get_all(&self) -> Result<Vec<Vehicle>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut vehicles: Vec<_> = data.values().cloned().collect();
        vehicles.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.vehicle_number.cmp(&b.vehicle_number))
        });
        Ok(vehicles)
    }

    /// Get a vehicle by its number (case-insensitive)
    pub fn get_by_number(&self, number: &str) -> Result<Option<Vehicle>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_number = self.by_number.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(by_number
            .get(&Vehicle::normalize_number(number))
            .and_then(|id| data.get(id).cloned()))
    }

    /// Check if a vehicle number is taken, optionally ignoring one vehicle
    pub fn number_exists(
        &self,
        number: &str,
        exclude: Option<VehicleId>,
    ) -> Result<bool, RideCareError> {
        let by_number = self.by_number.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(match by_number.get(&Vehicle::normalize_number(number)) {
            Some(id) => Some(*id) != exclude,
            None => false,
        })
    }

    /// Insert or update a vehicle
    pub fn upsert(&self, vehicle: Vehicle) -> Result<(), RideCareError> {
        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_number = self.by_number.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(old) = data.get(&vehicle.id) {
            by_number.remove(&Vehicle::normalize_number(&old.vehicle_number));
        }
        by_number.insert(Vehicle::normalize_number(&vehicle.vehicle_number), vehicle.id);

        data.insert(vehicle.id, vehicle);
        Ok(())
    }

    /// Delete a vehicle, returning it if it existed
    pub fn delete(&self, id: VehicleId) -> Result<Option<Vehicle>, RideCareError> {
        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_number = self.by_number.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let removed = data.remove(&id);
        if let Some(vehicle) = &removed {
            by_number.remove(&Vehicle::normalize_number(&vehicle.vehicle_number));
        }
        Ok(removed)
    }

    /// Count vehicles
    pub fn count(&self) -> Result<usize, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
