//! Core data models for RideCare
//!
//! This module contains the data structures of the maintenance domain:
//! vehicles, service types, service records and derived statuses.

pub mod ids;
pub mod service_record;
pub mod service_type;
pub mod status;
pub mod vehicle;

pub use ids::{ServiceRecordId, ServiceTypeId, VehicleId};
pub use service_record::ServiceRecord;
pub use service_type::ServiceType;
pub use status::ServiceStatus;
pub use vehicle::Vehicle;
