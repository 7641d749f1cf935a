//! Service layer for RideCare
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, reference checks, derived statuses and cascades.

pub mod detail;
pub mod service_record;
pub mod service_type;
pub mod status;
pub mod vehicle;

pub use detail::{build_history, detail_view, RecordLookup, ServiceHistory, ServiceRecordDetail};
pub use service_record::{parse_service_date, ServiceRecordService};
pub use service_type::ServiceTypeService;
pub use status::{calculate_status, DueStatus};
pub use vehicle::{VehicleDeletion, VehicleService};
