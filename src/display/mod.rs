//! Display formatting for terminal output
//!
//! Plain-text tables and detail blocks for vehicles, service types and
//! service records.

pub mod service_record;
pub mod vehicle;

pub use service_record::{format_days, format_history, format_record_details, format_record_table};
pub use vehicle::{format_service_type_list, format_vehicle_details, format_vehicle_list};
