//! Storage layer for RideCare
//!
//! Provides JSON file storage with atomic writes, in-memory indexes and
//! automatic directory creation. A `Storage` is opened once per command and
//! dropped when the command finishes.

pub mod file_io;
pub mod init;
pub mod service_records;
pub mod service_types;
pub mod vehicles;

pub use file_io::{json_file_valid, read_json, write_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use service_records::ServiceRecordRepository;
pub use service_types::ServiceTypeRepository;
pub use vehicles::VehicleRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::RideCarePaths;
use crate::error::RideCareError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub vehicles: VehicleRepository,
    pub service_types: ServiceTypeRepository,
    pub service_records: ServiceRecordRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance (nothing is loaded yet)
    pub fn new(paths: RideCarePaths) -> Result<Self, RideCareError> {
        paths.ensure_directories()?;

        Ok(Self {
            vehicles: VehicleRepository::new(paths.vehicles_file()),
            service_types: ServiceTypeRepository::new(paths.service_types_file()),
            service_records: ServiceRecordRepository::new(paths.service_records_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Create a Storage and load every repository
    pub fn open(paths: RideCarePaths) -> Result<Self, RideCareError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), RideCareError> {
        self.vehicles.load()?;
        self.service_types.load()?;
        self.service_records.load()?;
        Ok(())
    }

    /// Record the creation of an entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), RideCareError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record deletions in the audit log
    pub fn log_deletes(&self, entries: &[AuditEntry]) -> Result<(), RideCareError> {
        self.audit.log_batch(entries)
    }
}
