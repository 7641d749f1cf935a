//! Service type service

use tracing::{info, warn};

use crate::audit::EntityType;
use crate::error::{RideCareError, RideCareResult};
use crate::models::{ServiceType, ServiceTypeId};
use crate::storage::Storage;

/// Service for managing the catalogue of maintenance kinds
pub struct ServiceTypeService<'a> {
    storage: &'a Storage,
}

impl<'a> ServiceTypeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a service type with a recurrence interval in days
    pub fn create(&self, name: &str, interval_days: i64) -> RideCareResult<ServiceType> {
        let service_type = ServiceType::new(name.trim(), interval_days);

        service_type
            .validate()
            .map_err(|e| RideCareError::Validation(e.to_string()))?;

        if self
            .storage
            .service_types
            .get_by_name(&service_type.name)?
            .is_some()
        {
            warn!(name = %service_type.name, "service type already exists");
            return Err(RideCareError::Duplicate {
                entity_type: "Service type",
                identifier: service_type.name.clone(),
            });
        }

        self.storage.service_types.upsert(service_type.clone())?;
        self.storage.service_types.save()?;

        self.storage.log_create(
            EntityType::ServiceType,
            service_type.id.to_string(),
            Some(service_type.name.clone()),
            &service_type,
        )?;

        info!(service_type_id = %service_type.id, name = %service_type.name, "created service type");
        Ok(service_type)
    }

    pub fn get(&self, id: ServiceTypeId) -> RideCareResult<Option<ServiceType>> {
        self.storage.service_types.get(id)
    }

    /// Find a service type by name or ID
    pub fn find(&self, identifier: &str) -> RideCareResult<Option<ServiceType>> {
        if let Some(service_type) = self.storage.service_types.get_by_name(identifier)? {
            return Ok(Some(service_type));
        }

        if let Ok(id) = identifier.trim().parse::<ServiceTypeId>() {
            return self.storage.service_types.get(id);
        }

        Ok(None)
    }

    /// Find a service type or fail with a not-found error
    pub fn require(&self, identifier: &str) -> RideCareResult<ServiceType> {
        self.find(identifier)?
            .ok_or_else(|| RideCareError::service_type_not_found(identifier))
    }

    /// All service types, sorted by name
    pub fn list(&self) -> RideCareResult<Vec<ServiceType>> {
        self.storage.service_types.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RideCarePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RideCarePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_find() {
        let (_temp, storage) = create_test_storage();
        let service = ServiceTypeService::new(&storage);

        let created = service.create(" Oil Change ", 90).unwrap();
        assert_eq!(created.name, "Oil Change");
        assert_eq!(created.interval_days, 90);

        assert_eq!(service.find("oil change").unwrap(), Some(created.clone()));
        assert_eq!(
            service.find(&created.id.as_uuid().to_string()).unwrap(),
            Some(created)
        );
    }

    #[test]
    fn test_rejects_bad_interval() {
        let (_temp, storage) = create_test_storage();
        let service = ServiceTypeService::new(&storage);

        assert!(service.create("Wash", 0).unwrap_err().is_validation());
        assert!(service.create("Wash", -5).unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let (_temp, storage) = create_test_storage();
        let service = ServiceTypeService::new(&storage);

        service.create("Tire Rotation", 180).unwrap();
        let err = service.create("TIRE ROTATION", 90).unwrap_err();
        assert!(matches!(err, RideCareError::Duplicate { .. }));
    }

    #[test]
    fn test_list_sorted_by_name() {
        let (_temp, storage) = create_test_storage();
        let service = ServiceTypeService::new(&storage);
        service.create("Tire Rotation", 180).unwrap();
        service.create("air filter", 365).unwrap();
        service.create("Brake Inspection", 365).unwrap();

        let names: Vec<_> = service.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["air filter", "Brake Inspection", "Tire Rotation"]);
    }

    #[test]
    fn test_require_missing() {
        let (_temp, storage) = create_test_storage();
        let service = ServiceTypeService::new(&storage);

        let err = service.require("Detailing").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Detailing"));
    }
}
