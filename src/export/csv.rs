//! CSV export of service record detail views
//!
//! Rows carry the denormalized vehicle and service type fields plus the
//! derived status, so the file stands on its own in a spreadsheet.

use std::io::Write;

use crate::error::{RideCareError, RideCareResult};
use crate::services::ServiceRecordDetail;

/// Header row of every service record export
pub const CSV_HEADER: [&str; 10] = [
    "Service ID",
    "Vehicle Number",
    "Owner Name",
    "Model",
    "Service Type",
    "Service Date",
    "Next Service Date",
    "Status",
    "Days Until Due",
    "Notes",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write `details` as CSV, header first, one row per record in input order
pub fn write_service_records_csv<W: Write>(
    writer: W,
    details: &[ServiceRecordDetail],
) -> RideCareResult<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;

    for detail in details {
        let service_date = detail.service_date.format(DATE_FORMAT).to_string();
        let next_service_date = detail.next_service_date.format(DATE_FORMAT).to_string();
        let days_until_due = detail.days_until_due.to_string();
        let service_id = detail.id.as_uuid().to_string();

        csv.write_record([
            service_id.as_str(),
            detail.vehicle_number.as_str(),
            detail.owner_name.as_str(),
            detail.model.as_str(),
            detail.service_type_name.as_str(),
            service_date.as_str(),
            next_service_date.as_str(),
            detail.status.as_str(),
            days_until_due.as_str(),
            detail.notes.as_deref().unwrap_or(""),
        ])?;
    }

    csv.flush()
        .map_err(|e| RideCareError::Export(format!("Failed to flush CSV output: {}", e)))
}

/// Render `details` as a CSV string
pub fn to_csv(details: &[ServiceRecordDetail]) -> RideCareResult<String> {
    let mut buffer = Vec::new();
    write_service_records_csv(&mut buffer, details)?;
    String::from_utf8(buffer)
        .map_err(|e| RideCareError::Export(format!("CSV output is not UTF-8: {}", e)))
}
