//! CLI commands for data export
//!
//! Writes service records as CSV to stdout or to a file. When `--output`
//! names an existing directory, a default file name is used inside it. A file
//! is only replaced once the whole export has been written.

use std::io;
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::RideCareResult;
use crate::models::Vehicle;
use crate::services::{ServiceRecordService, VehicleService};
use crate::storage::{write_atomic, Storage};

/// Default file name for a full export
pub const ALL_RECORDS_FILE_NAME: &str = "service_records.csv";

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all service records, soonest due first
    Csv {
        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Maximum number of records (default from settings)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export one vehicle's service history
    Vehicle {
        /// Vehicle number or ID
        vehicle: String,
        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> RideCareResult<()> {
    let service = ServiceRecordService::new(storage);
    let now = Utc::now();

    match cmd {
        ExportCommands::Csv { output, limit } => {
            let limit = limit.unwrap_or(settings.export_limit);
            match output {
                Some(path) => {
                    let path = resolve_output(path, ALL_RECORDS_FILE_NAME);
                    let rows =
                        write_atomic(&path, |writer| service.export_csv(writer, limit, now))?;
                    eprintln!("Exported {} service records to: {}", rows, path.display());
                }
                None => {
                    service.export_csv(io::stdout().lock(), limit, now)?;
                }
            }
        }

        ExportCommands::Vehicle { vehicle, output } => {
            let vehicle = VehicleService::new(storage).require(&vehicle)?;
            match output {
                Some(path) => {
                    let path = resolve_output(path, &vehicle_file_name(&vehicle));
                    let rows = write_atomic(&path, |writer| {
                        service.export_vehicle_csv(vehicle.id, writer, now)
                    })?;
                    eprintln!(
                        "Exported {} service records for {} to: {}",
                        rows,
                        vehicle.vehicle_number,
                        path.display()
                    );
                }
                None => {
                    service.export_vehicle_csv(vehicle.id, io::stdout().lock(), now)?;
                }
            }
        }
    }

    Ok(())
}

/// Default file name for a single vehicle's export
pub fn vehicle_file_name(vehicle: &Vehicle) -> String {
    let number: String = vehicle
        .vehicle_number
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();
    format!("vehicle_{}_services.csv", number)
}

fn resolve_output(path: PathBuf, default_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(default_name)
    } else {
        path
    }
}
