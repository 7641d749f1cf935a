//! Export module for RideCare
//!
//! Service records export to CSV for spreadsheets and reporting; the JSON
//! view of a vehicle history is printed directly by the CLI.

pub mod csv;

pub use self::csv::{to_csv, write_service_records_csv, CSV_HEADER};
