//! Service record CLI commands
//!
//! Recording services, listing them by due date and showing a vehicle's
//! history. Statuses are computed against the current time on every call.

use chrono::Utc;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_history, format_record_details, format_record_table};
use crate::error::{RideCareError, RideCareResult};
use crate::models::ServiceRecordId;
use crate::services::{parse_service_date, ServiceRecordService, ServiceTypeService, VehicleService};
use crate::storage::Storage;

/// Service record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Record a service performed on a vehicle
    Add {
        /// Vehicle number or ID
        vehicle: String,
        /// Service type name or ID
        service_type: String,
        /// Service date (YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS", default: now)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show one service record
    Show {
        /// Service record ID
        id: String,
        /// Print the record as a JSON document
        #[arg(long)]
        json: bool,
    },
    /// List all records, soonest due first
    List {
        /// Number of records to skip
        #[arg(long, default_value = "0")]
        skip: usize,
        /// Maximum number of records to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List records whose next service date has passed
    Overdue,
    /// List records falling due soon
    Upcoming {
        /// Look-ahead window in days (default from settings)
        #[arg(short, long)]
        days: Option<u32>,
    },
}

/// Handle a service record command
pub fn handle_record_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> RideCareResult<()> {
    let service = ServiceRecordService::new(storage);
    let now = Utc::now();

    match cmd {
        RecordCommands::Add {
            vehicle,
            service_type,
            date,
            notes,
        } => {
            let vehicle = VehicleService::new(storage).require(&vehicle)?;
            let service_type = ServiceTypeService::new(storage).require(&service_type)?;
            let service_date = match date {
                Some(date) => parse_service_date(&date)?,
                None => now,
            };

            let record = service.create(vehicle.id, service_type.id, service_date, notes)?;
            println!(
                "Recorded {} for {} on {}",
                service_type.name,
                vehicle.vehicle_number,
                record.service_date.format("%Y-%m-%d")
            );
            println!(
                "  Next due: {}",
                record.next_service_date.format("%Y-%m-%d")
            );
            println!("  ID:       {}", record.id.as_uuid());
        }

        RecordCommands::Show { id, json } => {
            let record_id: ServiceRecordId = id.parse().map_err(|_| {
                RideCareError::Validation(format!("Invalid service record ID: {}", id))
            })?;
            let detail = service.get_detail(record_id, now)?;

            if json {
                let document = serde_json::to_string_pretty(&detail).map_err(|e| {
                    RideCareError::Json(format!("Failed to serialize service record: {}", e))
                })?;
                println!("{}", document);
            } else {
                println!("{}", format_record_details(&detail).trim_end());
            }
        }

        RecordCommands::List { skip, limit } => {
            let limit = limit.unwrap_or(settings.list_limit);
            let details = service.list_details(skip, limit, now)?;
            println!("{}", format_record_table(&details).trim_end());
        }

        RecordCommands::Overdue => {
            let details = service.overdue(now)?;
            println!("{}", format_record_table(&details).trim_end());
            if !details.is_empty() {
                println!("\n{} overdue service(s)", details.len());
            }
        }

        RecordCommands::Upcoming { days } => {
            let days = days.unwrap_or(settings.upcoming_window_days);
            let details = service.upcoming(days, now)?;
            println!("Services due in the next {} days:\n", days);
            println!("{}", format_record_table(&details).trim_end());
        }
    }

    Ok(())
}

/// Show a vehicle's service history, as text or as a JSON document
pub fn handle_history_command(storage: &Storage, vehicle: &str, json: bool) -> RideCareResult<()> {
    let vehicle = VehicleService::new(storage).require(vehicle)?;
    let history = ServiceRecordService::new(storage).history(vehicle.id, Utc::now())?;

    if json {
        let document = serde_json::to_string_pretty(&history)
            .map_err(|e| RideCareError::Json(format!("Failed to serialize history: {}", e)))?;
        println!("{}", document);
    } else {
        print!("{}", format_history(&history));
    }

    Ok(())
}
