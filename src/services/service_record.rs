//! Service record service
//!
//! Records maintenance events and answers the questions asked of them:
//! what is overdue, what falls due soon, what a vehicle's history looks
//! like. Every status-bearing query takes `now` from the caller.

use std::io::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, info, warn};

use crate::audit::EntityType;
use crate::error::{RideCareError, RideCareResult};
use crate::export::csv::write_service_records_csv;
use crate::models::{ServiceRecord, ServiceRecordId, ServiceTypeId, VehicleId};
use crate::storage::Storage;

use super::detail::{build_history, detail_view, detail_views, ServiceHistory, ServiceRecordDetail};

/// Service for recording and querying maintenance events
pub struct ServiceRecordService<'a> {
    storage: &'a Storage,
}

impl<'a> ServiceRecordService<'a> {
    /// Create a new service record service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a service performed on a vehicle
    ///
    /// The next-due date is fixed here from the service type's current
    /// interval.
    pub fn create(
        &self,
        vehicle_id: VehicleId,
        service_type_id: ServiceTypeId,
        service_date: DateTime<Utc>,
        notes: Option<String>,
    ) -> RideCareResult<ServiceRecord> {
        let vehicle = self
            .storage
            .vehicles
            .get(vehicle_id)?
            .ok_or_else(|| RideCareError::vehicle_not_found(vehicle_id.to_string()))?;

        let service_type = self
            .storage
            .service_types
            .get(service_type_id)?
            .ok_or_else(|| RideCareError::service_type_not_found(service_type_id.to_string()))?;

        let record = ServiceRecord::new(vehicle.id, &service_type, service_date, notes)
            .map_err(|e| {
                warn!(vehicle = %vehicle.vehicle_number, error = %e, "rejected service record");
                RideCareError::Validation(e.to_string())
            })?;

        self.storage.service_records.upsert(record.clone())?;
        self.storage.service_records.save()?;

        self.storage.log_create(
            EntityType::ServiceRecord,
            record.id.to_string(),
            Some(format!("{} / {}", vehicle.vehicle_number, service_type.name)),
            &record,
        )?;

        info!(
            record_id = %record.id,
            vehicle = %vehicle.vehicle_number,
            service_type = %service_type.name,
            next_due = %record.next_service_date,
            "recorded service"
        );
        Ok(record)
    }

    /// Get a single record as a detail view
    pub fn get_detail(
        &self,
        id: ServiceRecordId,
        now: DateTime<Utc>,
    ) -> RideCareResult<ServiceRecordDetail> {
        let record = self
            .storage
            .service_records
            .get(id)?
            .ok_or_else(|| RideCareError::service_record_not_found(id.to_string()))?;

        detail_view(&record, self.storage, now)
    }

    /// All records ordered by next-due date, paginated, as detail views
    pub fn list_details(
        &self,
        skip: usize,
        limit: usize,
        now: DateTime<Utc>,
    ) -> RideCareResult<Vec<ServiceRecordDetail>> {
        let records = self.storage.service_records.get_page(skip, limit)?;
        debug!(skip, limit, count = records.len(), "listing service records");
        detail_views(&records, self.storage, now)
    }

    /// Records whose next-due date has passed
    pub fn overdue(&self, now: DateTime<Utc>) -> RideCareResult<Vec<ServiceRecordDetail>> {
        let records = self.storage.service_records.get_overdue(now)?;
        detail_views(&records, self.storage, now)
    }

    /// Records falling due within `days_ahead` days of `now`
    pub fn upcoming(
        &self,
        days_ahead: u32,
        now: DateTime<Utc>,
    ) -> RideCareResult<Vec<ServiceRecordDetail>> {
        let records = self.storage.service_records.get_upcoming(now, days_ahead)?;
        detail_views(&records, self.storage, now)
    }

    /// A vehicle's full service history, most recent service first
    pub fn history(
        &self,
        vehicle_id: VehicleId,
        now: DateTime<Utc>,
    ) -> RideCareResult<ServiceHistory> {
        let vehicle = self
            .storage
            .vehicles
            .get(vehicle_id)?
            .ok_or_else(|| RideCareError::vehicle_not_found(vehicle_id.to_string()))?;

        let records = self.storage.service_records.get_by_vehicle(vehicle_id)?;
        build_history(&vehicle, &records, self.storage, now)
    }

    /// Write up to `limit` records, soonest due first, as CSV
    ///
    /// Returns the number of data rows written.
    pub fn export_csv<W: Write>(
        &self,
        writer: W,
        limit: usize,
        now: DateTime<Utc>,
    ) -> RideCareResult<usize> {
        let details = self.list_details(0, limit, now)?;
        write_service_records_csv(writer, &details)?;
        info!(rows = details.len(), "exported service records");
        Ok(details.len())
    }

    /// Write one vehicle's history as CSV
    ///
    /// Returns the number of data rows written.
    pub fn export_vehicle_csv<W: Write>(
        &self,
        vehicle_id: VehicleId,
        writer: W,
        now: DateTime<Utc>,
    ) -> RideCareResult<usize> {
        let history = self.history(vehicle_id, now)?;
        write_service_records_csv(writer, &history.service_records)?;
        info!(
            vehicle = %history.vehicle.vehicle_number,
            rows = history.service_records.len(),
            "exported vehicle service history"
        );
        Ok(history.service_records.len())
    }
}

/// Parse a service date given on the command line
///
/// Accepts `YYYY-MM-DD` (midnight UTC), `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and full RFC 3339 timestamps.
pub fn parse_service_date(input: &str) -> RideCareResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            RideCareError::Validation(format!(
                "Invalid service date '{}'. Use YYYY-MM-DD or YYYY-MM-DD HH:MM:SS",
                input
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RideCarePaths;
    use crate::models::{ServiceStatus, ServiceType, Vehicle};
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        storage: Storage,
        vehicle: Vehicle,
        oil: ServiceType,
        tires: ServiceType,
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn setup() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let paths = RideCarePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        let vehicle = Vehicle::new("KA-01-1234", "Asha Rao", "Honda City");
        let oil = ServiceType::new("Oil Change", 90);
        let tires = ServiceType::new("Tire Rotation", 180);
        storage.vehicles.upsert(vehicle.clone()).unwrap();
        storage.service_types.upsert(oil.clone()).unwrap();
        storage.service_types.upsert(tires.clone()).unwrap();

        Fixture {
            _temp: temp_dir,
            storage,
            vehicle,
            oil,
            tires,
        }
    }

    #[test]
    fn test_create_computes_next_due() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);
        let date = now() - Duration::days(10);

        let record = service
            .create(f.vehicle.id, f.oil.id, date, Some("  synthetic  ".into()))
            .unwrap();

        assert_eq!(record.next_service_date, date + Duration::days(90));
        assert_eq!(record.notes.as_deref(), Some("synthetic"));
        assert_eq!(f.storage.service_records.count().unwrap(), 1);
    }

    #[test]
    fn test_create_blank_notes_stored_as_none() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);

        let record = service
            .create(f.vehicle.id, f.oil.id, now(), Some("   ".into()))
            .unwrap();
        assert!(record.notes.is_none());
    }

    #[test]
    fn test_create_missing_references() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);

        let err = service
            .create(VehicleId::new(), f.oil.id, now(), None)
            .unwrap_err();
        assert!(err.is_not_found());

        let err = service
            .create(f.vehicle.id, ServiceTypeId::new(), now(), None)
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(f.storage.service_records.count().unwrap(), 0);
    }

    #[test]
    fn test_list_details_ordered_and_paginated() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);
        // Due in 170, 80 and 20 days
        service
            .create(f.vehicle.id, f.tires.id, now() - Duration::days(10), None)
            .unwrap();
        service
            .create(f.vehicle.id, f.oil.id, now() - Duration::days(10), None)
            .unwrap();
        service
            .create(f.vehicle.id, f.oil.id, now() - Duration::days(70), None)
            .unwrap();

        let all = service.list_details(0, 100, now()).unwrap();
        let days: Vec<_> = all.iter().map(|d| d.days_until_due).collect();
        assert_eq!(days, vec![20, 80, 170]);

        let page = service.list_details(1, 1, now()).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].days_until_due, 80);

        assert!(service.list_details(5, 10, now()).unwrap().is_empty());
    }

    #[test]
    fn test_overdue_and_upcoming_bounds() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);
        // Overdue by 5 days
        service
            .create(f.vehicle.id, f.oil.id, now() - Duration::days(95), None)
            .unwrap();
        // Due in exactly 30 days
        service
            .create(f.vehicle.id, f.oil.id, now() - Duration::days(60), None)
            .unwrap();
        // Due in 31 days
        service
            .create(f.vehicle.id, f.oil.id, now() - Duration::days(59), None)
            .unwrap();

        let overdue = service.overdue(now()).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].status, ServiceStatus::Overdue);
        assert_eq!(overdue[0].days_until_due, -5);

        let upcoming = service.upcoming(30, now()).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].days_until_due, 30);

        assert_eq!(service.upcoming(31, now()).unwrap().len(), 2);
        assert!(service.upcoming(0, now()).unwrap().is_empty());
    }

    #[test]
    fn test_due_exactly_now_is_upcoming_not_overdue() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);
        service
            .create(f.vehicle.id, f.oil.id, now() - Duration::days(90), None)
            .unwrap();

        assert!(service.overdue(now()).unwrap().is_empty());
        let upcoming = service.upcoming(0, now()).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].status, ServiceStatus::Due);
    }

    #[test]
    fn test_history_most_recent_first() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);
        let older = service
            .create(f.vehicle.id, f.oil.id, now() - Duration::days(100), None)
            .unwrap();
        let newer = service
            .create(f.vehicle.id, f.tires.id, now() - Duration::days(5), None)
            .unwrap();

        let history = service.history(f.vehicle.id, now()).unwrap();
        let ids: Vec<_> = history.service_records.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
        assert_eq!(history.vehicle.id, f.vehicle.id);
    }

    #[test]
    fn test_history_missing_vehicle() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);

        assert!(service.history(VehicleId::new(), now()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_detail() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);
        let record = service.create(f.vehicle.id, f.oil.id, now(), None).unwrap();

        let detail = service.get_detail(record.id, now()).unwrap();
        assert_eq!(detail.service_type_name, "Oil Change");
        assert!(service
            .get_detail(ServiceRecordId::new(), now())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_export_csv_counts_rows() {
        let f = setup();
        let service = ServiceRecordService::new(&f.storage);
        for days in [10, 20, 30] {
            service
                .create(f.vehicle.id, f.oil.id, now() - Duration::days(days), None)
                .unwrap();
        }

        let mut out = Vec::new();
        assert_eq!(service.export_csv(&mut out, 2, now()).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);

        let mut out = Vec::new();
        assert_eq!(
            service.export_vehicle_csv(f.vehicle.id, &mut out, now()).unwrap(),
            3
        );
        assert!(service
            .export_vehicle_csv(VehicleId::new(), Vec::new(), now())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_parse_service_date() {
        let midnight = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_service_date("2025-03-01").unwrap(), midnight);

        let afternoon = Utc.with_ymd_and_hms(2025, 3, 1, 14, 30, 5).unwrap();
        assert_eq!(parse_service_date("2025-03-01 14:30:05").unwrap(), afternoon);
        assert_eq!(parse_service_date("2025-03-01T14:30:05").unwrap(), afternoon);
        assert_eq!(
            parse_service_date("2025-03-01T16:30:05+02:00").unwrap(),
            afternoon
        );

        assert!(parse_service_date("01/03/2025").unwrap_err().is_validation());
        assert!(parse_service_date("2025-02-30").is_err());
    }
}
