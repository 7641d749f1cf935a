//! Service record display formatting
//!
//! Tables of detail views for the record listings and vehicle histories.

use crate::models::ServiceStatus;
use crate::services::{ServiceHistory, ServiceRecordDetail};

use super::vehicle::column_width;

/// Human-readable form of a day count
pub fn format_days(days: i64) -> String {
    match days {
        0 => "due today".to_string(),
        1 => "in 1 day".to_string(),
        -1 => "1 day overdue".to_string(),
        d if d < 0 => format!("{} days overdue", -d),
        d => format!("in {} days", d),
    }
}

fn status_marker(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Overdue => "!!",
        ServiceStatus::Due => "! ",
        ServiceStatus::Upcoming => "  ",
    }
}

/// Format detail views as a table, one row per record
pub fn format_record_table(details: &[ServiceRecordDetail]) -> String {
    if details.is_empty() {
        return "No service records found.".to_string();
    }

    let vehicle_width = column_width(details.iter().map(|d| d.vehicle_number.as_str()), "Vehicle");
    let type_width = column_width(details.iter().map(|d| d.service_type_name.as_str()), "Service");

    let mut output = String::new();
    output.push_str(&format!(
        "   {:<vehicle_width$}  {:<type_width$}  {:10}  {:10}  {:8}  {}\n",
        "Vehicle", "Service", "Serviced", "Next Due", "Status", "Days",
    ));
    output.push_str(&format!(
        "   {:-<vehicle_width$}  {:-<type_width$}  {:-<10}  {:-<10}  {:-<8}  {:-<6}\n",
        "", "", "", "", "", "",
    ));

    for detail in details {
        output.push_str(&format!(
            "{} {:<vehicle_width$}  {:<type_width$}  {}  {}  {:8}  {}\n",
            status_marker(detail.status),
            detail.vehicle_number,
            detail.service_type_name,
            detail.service_date.format("%Y-%m-%d"),
            detail.next_service_date.format("%Y-%m-%d"),
            detail.status.as_str(),
            detail.days_until_due,
        ));
    }

    output
}

/// Format one record with its vehicle and service type
pub fn format_record_details(detail: &ServiceRecordDetail) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} for {}\n",
        detail.service_type_name, detail.vehicle_number
    ));
    output.push_str(&format!("  Owner:    {}\n", detail.owner_name));
    output.push_str(&format!("  Model:    {}\n", detail.model));
    output.push_str(&format!(
        "  Serviced: {}\n",
        detail.service_date.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Next due: {}\n",
        detail.next_service_date.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Status:   {} ({})\n",
        detail.status,
        format_days(detail.days_until_due)
    ));
    if let Some(notes) = &detail.notes {
        output.push_str(&format!("  Notes:    {}\n", notes));
    }
    output.push_str(&format!("  ID:       {}\n", detail.id.as_uuid()));

    output
}

/// Format a vehicle's service history
pub fn format_history(history: &ServiceHistory) -> String {
    let vehicle = &history.vehicle;
    let mut output = String::new();

    output.push_str(&format!(
        "Service history: {} ({}, owner {})\n\n",
        vehicle.vehicle_number, vehicle.model, vehicle.owner_name
    ));

    if history.service_records.is_empty() {
        output.push_str("No services recorded.\n");
        return output;
    }

    for detail in &history.service_records {
        output.push_str(&format!(
            "{}  {}\n",
            detail.service_date.format("%Y-%m-%d"),
            detail.service_type_name
        ));
        output.push_str(&format!(
            "    Next due: {} [{}, {}]\n",
            detail.next_service_date.format("%Y-%m-%d"),
            detail.status,
            format_days(detail.days_until_due)
        ));
        if let Some(notes) = &detail.notes {
            output.push_str(&format!("    Notes:    {}\n", notes));
        }
        output.push_str(&format!("    ID:       {}\n", detail.id.as_uuid()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceRecord, ServiceType, Vehicle};
    use crate::services::detail::build_detail;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn history(days_ago: &[i64]) -> ServiceHistory {
        let vehicle = Vehicle::new("KA-01-1234", "Asha Rao", "Honda City");
        let oil = ServiceType::new("Oil Change", 90);
        let service_records = days_ago
            .iter()
            .map(|&d| {
                let record = ServiceRecord::new(
                    vehicle.id,
                    &oil,
                    now() - Duration::days(d),
                    Some("filter replaced".into()),
                )
                .unwrap();
                build_detail(&record, &vehicle, &oil, now())
            })
            .collect();
        ServiceHistory {
            vehicle,
            service_records,
        }
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(0), "due today");
        assert_eq!(format_days(1), "in 1 day");
        assert_eq!(format_days(12), "in 12 days");
        assert_eq!(format_days(-1), "1 day overdue");
        assert_eq!(format_days(-4), "4 days overdue");
    }

    #[test]
    fn test_format_record_table() {
        let h = history(&[95, 10]);
        let output = format_record_table(&h.service_records);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("!!"));
        assert!(lines[2].contains("OVERDUE"));
        assert!(lines[3].contains("UPCOMING"));
        assert!(lines[3].contains("80"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_record_table(&[]), "No service records found.");
    }

    #[test]
    fn test_format_history() {
        let h = history(&[5]);
        let output = format_history(&h);
        assert!(output.contains("Service history: KA-01-1234"));
        assert!(output.contains(&h.service_records[0].id.as_uuid().to_string()));
        assert!(output.contains("Notes:    filter replaced"));
        assert!(output.contains("in 85 days"));

        let empty = format_history(&history(&[]));
        assert!(empty.contains("No services recorded."));
    }

    #[test]
    fn test_format_record_details() {
        let h = history(&[100]);
        let detail = &h.service_records[0];
        let output = format_record_details(detail);

        assert!(output.starts_with("Oil Change for KA-01-1234"));
        assert!(output.contains("Owner:    Asha Rao"));
        assert!(output.contains("OVERDUE (10 days overdue)"));
        assert!(output.contains("Notes:    filter replaced"));

        let id = detail.id.as_uuid().to_string();
        assert!(output.contains(&id));
        assert!(id.parse::<crate::models::ServiceRecordId>().is_ok());
    }
}
