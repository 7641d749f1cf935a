//! Vehicle service
//!
//! Registration, lookup and removal of vehicles. Removing a vehicle also
//! removes every service record that belongs to it.

use tracing::{info, warn};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{RideCareError, RideCareResult};
use crate::models::{Vehicle, VehicleId};
use crate::storage::Storage;

/// Outcome of deleting a vehicle
#[derive(Debug, Clone)]
pub struct VehicleDeletion {
    pub vehicle: Vehicle,
    pub removed_records: usize,
}

/// Service for vehicle management
pub struct VehicleService<'a> {
    storage: &'a Storage,
}

impl<'a> VehicleService<'a> {
    /// Create a new vehicle service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new vehicle
    pub fn create(&self, vehicle_number: &str, owner_name: &str, model: &str) -> RideCareResult<Vehicle> {
        let vehicle = Vehicle::new(vehicle_number.trim(), owner_name.trim(), model.trim());

        vehicle
            .validate()
            .map_err(|e| RideCareError::Validation(e.to_string()))?;

        if self
            .storage
            .vehicles
            .number_exists(&vehicle.vehicle_number, None)?
        {
            warn!(number = %vehicle.vehicle_number, "vehicle number already registered");
            return Err(RideCareError::Duplicate {
                entity_type: "Vehicle",
                identifier: vehicle.vehicle_number.clone(),
            });
        }

        self.storage.vehicles.upsert(vehicle.clone())?;
        self.storage.vehicles.save()?;

        self.storage.log_create(
            EntityType::Vehicle,
            vehicle.id.to_string(),
            Some(vehicle.vehicle_number.clone()),
            &vehicle,
        )?;

        info!(vehicle_id = %vehicle.id, number = %vehicle.vehicle_number, "registered vehicle");
        Ok(vehicle)
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: VehicleId) -> RideCareResult<Option<Vehicle>> {
        self.storage.vehicles.get(id)
    }

    /// Find a vehicle by number or ID
    pub fn find(&self, identifier: &str) -> RideCareResult<Option<Vehicle>> {
        if let Some(vehicle) = self.storage.vehicles.get_by_number(identifier)? {
            return Ok(Some(vehicle));
        }

        if let Ok(id) = identifier.trim().parse::<VehicleId>() {
            return self.storage.vehicles.get(id);
        }

        Ok(None)
    }

    /// Find a vehicle or fail with a not-found error
    pub fn require(&self, identifier: &str) -> RideCareResult<Vehicle> {
        self.find(identifier)?
            .ok_or_else(|| RideCareError::vehicle_not_found(identifier))
    }

    /// List vehicles in registration order
    pub fn list(&self, skip: usize, limit: usize) -> RideCareResult<Vec<Vehicle>> {
        Ok(self
            .storage
            .vehicles
            .get_all()?
            .into_iter()
            .skip(skip)
            .take(limit)
            .collect())
    }

    /// Delete a vehicle together with its service records
    pub fn delete(&self, id: VehicleId) -> RideCareResult<VehicleDeletion> {
        let vehicle = self
            .storage
            .vehicles
            .get(id)?
            .ok_or_else(|| RideCareError::vehicle_not_found(id.to_string()))?;

        let removed = self.storage.service_records.delete_by_vehicle(id)?;
        self.storage.vehicles.delete(id)?;

        self.storage.service_records.save()?;
        self.storage.vehicles.save()?;

        let cause = format!("vehicle {} deleted", vehicle.vehicle_number);
        let mut entries: Vec<AuditEntry> = removed
            .iter()
            .map(|record| {
                AuditEntry::delete(EntityType::ServiceRecord, record.id.to_string(), None, record)
                    .caused_by(cause.clone())
            })
            .collect();
        entries.push(AuditEntry::delete(
            EntityType::Vehicle,
            vehicle.id.to_string(),
            Some(vehicle.vehicle_number.clone()),
            &vehicle,
        ));
        self.storage.log_deletes(&entries)?;

        info!(
            vehicle_id = %vehicle.id,
            removed_records = removed.len(),
            "deleted vehicle"
        );

        Ok(VehicleDeletion {
            vehicle,
            removed_records: removed.len(),
        })
    }

    /// Count registered vehicles
    pub fn count(&self) -> RideCareResult<usize> {
        self.storage.vehicles.count()
    }
}
