//! Service record model
//!
//! A single maintenance action performed on a vehicle. The next-due date is
//! fixed when the record is created from the service type's interval at that
//! moment, so later interval changes never move existing due dates.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ServiceRecordId, ServiceTypeId, VehicleId};
use super::service_type::ServiceType;

/// A recorded maintenance event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique identifier
    pub id: ServiceRecordId,

    /// The serviced vehicle
    pub vehicle_id: VehicleId,

    /// The kind of service performed
    pub service_type_id: ServiceTypeId,

    /// When the service was performed
    pub service_date: DateTime<Utc>,

    /// When the next service of this type falls due
    pub next_service_date: DateTime<Utc>,

    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl ServiceRecord {
    /// Create a record for `vehicle_id`, deriving the next-due date from
    /// `service_type`'s interval
    pub fn new(
        vehicle_id: VehicleId,
        service_type: &ServiceType,
        service_date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<Self, ServiceRecordValidationError> {
        let next_service_date = next_due_date(service_date, service_type.interval_days)?;

        Ok(Self {
            id: ServiceRecordId::new(),
            vehicle_id,
            service_type_id: service_type.id,
            service_date,
            next_service_date,
            notes: normalize_notes(notes),
            created_at: Utc::now(),
        })
    }
}

/// `service_date + interval_days`, rejecting non-positive intervals and
/// dates outside chrono's range
pub fn next_due_date(
    service_date: DateTime<Utc>,
    interval_days: i64,
) -> Result<DateTime<Utc>, ServiceRecordValidationError> {
    if interval_days <= 0 {
        return Err(ServiceRecordValidationError::NonPositiveInterval(
            interval_days,
        ));
    }

    Duration::try_days(interval_days)
        .and_then(|interval| service_date.checked_add_signed(interval))
        .ok_or(ServiceRecordValidationError::DateOutOfRange)
}

/// Blank notes are stored as `None`
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.and_then(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} serviced {} (next due {})",
            self.id,
            self.service_date.format("%Y-%m-%d"),
            self.next_service_date.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for service records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRecordValidationError {
    NonPositiveInterval(i64),
    DateOutOfRange,
}

impl fmt::Display for ServiceRecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveInterval(days) => {
                write!(f, "Service interval must be positive, got {} days", days)
            }
            Self::DateOutOfRange => write!(f, "Next service date is out of range"),
        }
    }
}

impl std::error::Error for ServiceRecordValidationError {}
