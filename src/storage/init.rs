//! Storage initialization
//!
//! First-run setup: directories and the default service types.

use tracing::info;

use crate::config::paths::RideCarePaths;
use crate::error::RideCareError;
use crate::models::ServiceType;

use super::file_io::write_json_atomic;
use super::service_types::ServiceTypeData;

/// Service types created by `init`, with their intervals in days
pub const DEFAULT_SERVICE_TYPES: &[(&str, i64)] = &[
    ("Oil Change", 90),
    ("Tire Rotation", 180),
    ("Brake Inspection", 365),
    ("Air Filter", 365),
];

/// Initialize storage for a fresh installation
///
/// Returns the number of service types seeded; existing data is never
/// overwritten.
pub fn initialize_storage(paths: &RideCarePaths, seed_service_types: bool) -> Result<usize, RideCareError> {
    paths.ensure_directories()?;

    if !seed_service_types || paths.service_types_file().exists() {
        return Ok(0);
    }

    let service_types: Vec<_> = DEFAULT_SERVICE_TYPES
        .iter()
        .map(|&(name, interval_days)| ServiceType::new(name, interval_days))
        .collect();
    let seeded = service_types.len();

    write_json_atomic(paths.service_types_file(), &ServiceTypeData { service_types })?;
    info!(seeded, "created default service types");

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::service_types::ServiceTypeRepository;
    use tempfile::TempDir;

    fn load_types(paths: &RideCarePaths) -> Vec<ServiceType> {
        let repo = ServiceTypeRepository::new(paths.service_types_file());
        repo.load().unwrap();
        repo.get_all().unwrap()
    }

    #[test]
    fn test_initialize_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RideCarePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(initialize_storage(&paths, true).unwrap(), 4);
        assert!(paths.data_dir().exists());

        let types = load_types(&paths);
        assert_eq!(types.len(), DEFAULT_SERVICE_TYPES.len());
        assert!(types.iter().all(|t| t.validate().is_ok()));
        assert!(types.iter().any(|t| t.name == "Oil Change" && t.interval_days == 90));
    }

    #[test]
    fn test_seeding_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RideCarePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(initialize_storage(&paths, false).unwrap(), 0);
        assert!(!paths.service_types_file().exists());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RideCarePaths::with_base_dir(temp_dir.path().to_path_buf());

        let custom = ServiceTypeData {
            service_types: vec![ServiceType::new("Chain Lube", 14)],
        };
        write_json_atomic(paths.service_types_file(), &custom).unwrap();

        assert_eq!(initialize_storage(&paths, true).unwrap(), 0);

        let types = load_types(&paths);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Chain Lube");
    }
}
