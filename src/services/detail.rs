//! Detail views and vehicle history
//!
//! A detail view flattens a service record together with its vehicle and
//! service type and the status derived at a given instant. References are
//! resolved through [`RecordLookup`]; a record pointing at a vehicle or
//! service type that no longer exists is an integrity violation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RideCareError, RideCareResult};
use crate::models::{
    ServiceRecord, ServiceRecordId, ServiceStatus, ServiceType, ServiceTypeId, Vehicle, VehicleId,
};
use crate::storage::Storage;

use super::status::calculate_status;

/// Resolves the entities a service record refers to
pub trait RecordLookup {
    fn vehicle(&self, id: VehicleId) -> RideCareResult<Option<Vehicle>>;
    fn service_type(&self, id: ServiceTypeId) -> RideCareResult<Option<ServiceType>>;
}

impl RecordLookup for Storage {
    fn vehicle(&self, id: VehicleId) -> RideCareResult<Option<Vehicle>> {
        self.vehicles.get(id)
    }

    fn service_type(&self, id: ServiceTypeId) -> RideCareResult<Option<ServiceType>> {
        self.service_types.get(id)
    }
}

/// A service record joined with its vehicle and service type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecordDetail {
    pub id: ServiceRecordId,
    pub vehicle_id: VehicleId,
    pub vehicle_number: String,
    pub owner_name: String,
    pub model: String,
    pub service_type_id: ServiceTypeId,
    pub service_type_name: String,
    pub service_date: DateTime<Utc>,
    pub next_service_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub status: ServiceStatus,
    /// Negative once overdue
    pub days_until_due: i64,
}

/// A vehicle with its service records, most recent service first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHistory {
    pub vehicle: Vehicle,
    pub service_records: Vec<ServiceRecordDetail>,
}

/// Join already-resolved entities into a detail view
///
/// The stored next-due date is used as is; it is never recomputed from the
/// service type's current interval.
pub fn build_detail(
    record: &ServiceRecord,
    vehicle: &Vehicle,
    service_type: &ServiceType,
    now: DateTime<Utc>,
) -> ServiceRecordDetail {
    let due = calculate_status(record.next_service_date, now);

    ServiceRecordDetail {
        id: record.id,
        vehicle_id: record.vehicle_id,
        vehicle_number: vehicle.vehicle_number.clone(),
        owner_name: vehicle.owner_name.clone(),
        model: vehicle.model.clone(),
        service_type_id: record.service_type_id,
        service_type_name: service_type.name.clone(),
        service_date: record.service_date,
        next_service_date: record.next_service_date,
        notes: record.notes.clone(),
        status: due.status,
        days_until_due: due.days_until_due,
    }
}

/// Resolve a record's references and build its detail view
pub fn detail_view<L: RecordLookup + ?Sized>(
    record: &ServiceRecord,
    lookup: &L,
    now: DateTime<Utc>,
) -> RideCareResult<ServiceRecordDetail> {
    let vehicle = lookup.vehicle(record.vehicle_id)?.ok_or_else(|| {
        RideCareError::Integrity(format!(
            "service record {} references missing vehicle {}",
            record.id, record.vehicle_id
        ))
    })?;
    let service_type = resolve_service_type(record, lookup)?;

    Ok(build_detail(record, &vehicle, &service_type, now))
}

/// Detail views for `records`, in the same order
pub fn detail_views<L: RecordLookup + ?Sized>(
    records: &[ServiceRecord],
    lookup: &L,
    now: DateTime<Utc>,
) -> RideCareResult<Vec<ServiceRecordDetail>> {
    records.iter().map(|r| detail_view(r, lookup, now)).collect()
}

/// Aggregate a vehicle's records into its history, preserving their order
pub fn build_history<L: RecordLookup + ?Sized>(
    vehicle: &Vehicle,
    records: &[ServiceRecord],
    lookup: &L,
    now: DateTime<Utc>,
) -> RideCareResult<ServiceHistory> {
    let service_records = records
        .iter()
        .map(|record| {
            if record.vehicle_id != vehicle.id {
                return Err(RideCareError::Integrity(format!(
                    "service record {} belongs to vehicle {}, not {}",
                    record.id, record.vehicle_id, vehicle.id
                )));
            }
            let service_type = resolve_service_type(record, lookup)?;
            Ok(build_detail(record, vehicle, &service_type, now))
        })
        .collect::<RideCareResult<Vec<_>>>()?;

    Ok(ServiceHistory {
        vehicle: vehicle.clone(),
        service_records,
    })
}

fn resolve_service_type<L: RecordLookup + ?Sized>(
    record: &ServiceRecord,
    lookup: &L,
) -> RideCareResult<ServiceType> {
    lookup.service_type(record.service_type_id)?.ok_or_else(|| {
        RideCareError::Integrity(format!(
            "service record {} references missing service type {}",
            record.id, record.service_type_id
        ))
    })
}
