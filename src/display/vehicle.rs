//! Vehicle and service type display formatting

use crate::models::{ServiceType, Vehicle};
use crate::services::ServiceHistory;

use super::service_record::format_days;

/// Format vehicles as a table
pub fn format_vehicle_list(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return "No vehicles found.".to_string();
    }

    let number_width = column_width(vehicles.iter().map(|v| v.vehicle_number.as_str()), "Number");
    let owner_width = column_width(vehicles.iter().map(|v| v.owner_name.as_str()), "Owner");
    let model_width = column_width(vehicles.iter().map(|v| v.model.as_str()), "Model");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<number_width$}  {:<owner_width$}  {:<model_width$}  {}\n",
        "Number", "Owner", "Model", "ID",
    ));
    output.push_str(&format!(
        "{:-<number_width$}  {:-<owner_width$}  {:-<model_width$}  {:-<36}\n",
        "", "", "", "",
    ));

    for vehicle in vehicles {
        output.push_str(&format!(
            "{:<number_width$}  {:<owner_width$}  {:<model_width$}  {}\n",
            vehicle.vehicle_number, vehicle.owner_name, vehicle.model, vehicle.id.as_uuid(),
        ));
    }

    output
}

/// Format a vehicle's details with a summary of its service history
pub fn format_vehicle_details(history: &ServiceHistory) -> String {
    let vehicle = &history.vehicle;
    let mut output = String::new();

    output.push_str(&format!("Vehicle: {}\n", vehicle.vehicle_number));
    output.push_str(&format!("  Owner:    {}\n", vehicle.owner_name));
    output.push_str(&format!("  Model:    {}\n", vehicle.model));
    output.push_str(&format!("  ID:       {}\n", vehicle.id.as_uuid()));
    output.push_str(&format!(
        "  Added:    {}\n",
        vehicle.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Services: {}\n",
        history.service_records.len()
    ));

    if let Some(soonest) = history
        .service_records
        .iter()
        .min_by_key(|d| d.next_service_date)
    {
        output.push_str(&format!(
            "  Next due: {} on {} ({}, {})\n",
            soonest.service_type_name,
            soonest.next_service_date.format("%Y-%m-%d"),
            soonest.status,
            format_days(soonest.days_until_due),
        ));
    }

    output
}

/// Format service types as a table
pub fn format_service_type_list(service_types: &[ServiceType]) -> String {
    if service_types.is_empty() {
        return "No service types found. Run `ridecare init` to add the defaults.".to_string();
    }

    let name_width = column_width(service_types.iter().map(|t| t.name.as_str()), "Name");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>8}  {}\n",
        "Name", "Interval", "ID",
    ));
    output.push_str(&format!("{:-<name_width$}  {:->8}  {:-<36}\n", "", "", ""));

    for service_type in service_types {
        output.push_str(&format!(
            "{:<name_width$}  {:>8}  {}\n",
            service_type.name,
            format!("{}d", service_type.interval_days),
            service_type.id.as_uuid(),
        ));
    }

    output
}

pub(crate) fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
