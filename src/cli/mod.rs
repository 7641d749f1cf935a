//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod export;
pub mod record;
pub mod service_type;
pub mod vehicle;

pub use audit::handle_audit_command;
pub use export::{handle_export_command, ExportCommands};
pub use record::{handle_history_command, handle_record_command, RecordCommands};
pub use service_type::{handle_service_type_command, ServiceTypeCommands};
pub use vehicle::{handle_vehicle_command, VehicleCommands};
