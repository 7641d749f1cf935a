//! Service record repository for JSON storage
//!
//! Manages loading and saving service records to service_records.json and
//! keeps a per-vehicle index for history lookups.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::RideCareError;
use crate::models::{ServiceRecord, ServiceRecordId, VehicleId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable service record data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ServiceRecordData {
    service_records: Vec<ServiceRecord>,
}

/// Repository for service record persistence with a vehicle index
pub struct ServiceRecordRepository {
    path: PathBuf,
    data: RwLock<HashMap<ServiceRecordId, ServiceRecord>>,
    /// Index: vehicle_id -> service_record_ids
    by_vehicle: RwLock<HashMap<VehicleId, Vec<ServiceRecordId>>>,
}

/// Ascending by next-due date; creation time breaks ties
fn by_next_due(a: &ServiceRecord, b: &ServiceRecord) -> std::cmp::Ordering {
    a.next_service_date
        .cmp(&b.next_service_date)
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Most recent service first
fn by_service_date_desc(a: &ServiceRecord, b: &ServiceRecord) -> std::cmp::Ordering {
    b.service_date
        .cmp(&a.service_date)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

impl ServiceRecordRepository {
    /// Create a new service record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_vehicle: RwLock::new(HashMap::new()),
        }
    }

    /// Load service records from disk and build the vehicle index
    pub fn load(&self) -> Result<(), RideCareError> {
        let file_data: ServiceRecordData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_vehicle = self.by_vehicle.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_vehicle.clear();

        for record in file_data.service_records {
            by_vehicle.entry(record.vehicle_id).or_default().push(record.id);
            data.insert(record.id, record);
        }

        debug!(count = data.len(), "loaded service records");
        Ok(())
    }

    /// Save service records to disk
    pub fn save(&self) -> Result<(), RideCareError> {
        let service_records = self.get_all()?;
        write_json_atomic(&self.path, &ServiceRecordData { service_records })
    }

    /// Get a service record by ID
    pub fn get(&self, id: ServiceRecordId) -> Result<Option<ServiceRecord>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all service records ordered by next-due date ascending
    pub fn get_all(&self) -> Result<Vec<ServiceRecord>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(by_next_due);
        Ok(records)
    }

    /// One page of [`get_all`](Self::get_all)
    pub fn get_page(&self, skip: usize, limit: usize) -> Result<Vec<ServiceRecord>, RideCareError> {
        Ok(self.get_all()?.into_iter().skip(skip).take(limit).collect())
    }

    /// Get a vehicle's service records, most recent service first
    pub fn get_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<ServiceRecord>, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_vehicle = self.by_vehicle.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_vehicle.get(&vehicle_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut records: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        records.sort_by(by_service_date_desc);
        Ok(records)
    }

    /// Records whose next-due date is strictly before `now`
    pub fn get_overdue(&self, now: DateTime<Utc>) -> Result<Vec<ServiceRecord>, RideCareError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|r| r.next_service_date < now)
            .collect())
    }

    /// Records falling due between `now` and `now + days_ahead`, inclusive
    pub fn get_upcoming(
        &self,
        now: DateTime<Utc>,
        days_ahead: u32,
    ) -> Result<Vec<ServiceRecord>, RideCareError> {
        let until = now
            .checked_add_signed(Duration::days(i64::from(days_ahead)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Ok(self
            .get_all()?
            .into_iter()
            .filter(|r| r.next_service_date >= now && r.next_service_date <= until)
            .collect())
    }

    /// Insert or update a service record
    pub fn upsert(&self, record: ServiceRecord) -> Result<(), RideCareError> {
        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_vehicle = self.by_vehicle.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(old) = data.get(&record.id) {
            if let Some(ids) = by_vehicle.get_mut(&old.vehicle_id) {
                ids.retain(|&id| id != record.id);
            }
        }
        by_vehicle.entry(record.vehicle_id).or_default().push(record.id);

        data.insert(record.id, record);
        Ok(())
    }

    /// Delete every record of a vehicle, returning the removed records
    pub fn delete_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<ServiceRecord>, RideCareError> {
        let mut data = self.data.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_vehicle = self.by_vehicle.write().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let ids = by_vehicle.remove(&vehicle_id).unwrap_or_default();
        let mut removed: Vec<_> = ids.iter().filter_map(|id| data.remove(id)).collect();
        removed.sort_by(by_service_date_desc);
        Ok(removed)
    }

    /// Count service records
    pub fn count(&self) -> Result<usize, RideCareError> {
        let data = self.data.read().map_err(|e| {
            RideCareError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
