//! Vehicle CLI commands
//!
//! Implements CLI commands for registering and removing vehicles.

use chrono::Utc;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_vehicle_details, format_vehicle_list};
use crate::error::RideCareResult;
use crate::services::{ServiceRecordService, VehicleService};
use crate::storage::Storage;

/// Vehicle subcommands
#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Register a new vehicle
    Create {
        /// Vehicle (plate) number, must be unique
        number: String,
        /// Owner's name
        #[arg(short, long)]
        owner: String,
        /// Vehicle model
        #[arg(short, long)]
        model: String,
    },
    /// List vehicles in registration order
    List {
        /// Number of vehicles to skip
        #[arg(long, default_value = "0")]
        skip: usize,
        /// Maximum number of vehicles to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a vehicle and its next due service
    Show {
        /// Vehicle number or ID
        vehicle: String,
    },
    /// Delete a vehicle and all of its service records
    Delete {
        /// Vehicle number or ID
        vehicle: String,
    },
}

/// Handle a vehicle command
pub fn handle_vehicle_command(
    storage: &Storage,
    settings: &Settings,
    cmd: VehicleCommands,
) -> RideCareResult<()> {
    let service = VehicleService::new(storage);

    match cmd {
        VehicleCommands::Create {
            number,
            owner,
            model,
        } => {
            let vehicle = service.create(&number, &owner, &model)?;
            println!("Registered vehicle: {}", vehicle);
            println!("  ID: {}", vehicle.id.as_uuid());
        }

        VehicleCommands::List { skip, limit } => {
            let limit = limit.unwrap_or(settings.list_limit);
            let vehicles = service.list(skip, limit)?;
            println!("{}", format_vehicle_list(&vehicles).trim_end());

            let total = service.count()?;
            if vehicles.len() < total {
                println!(
                    "\nShowing {} of {} vehicles (use --skip/--limit to page)",
                    vehicles.len(),
                    total
                );
            }
        }

        VehicleCommands::Show { vehicle } => {
            let vehicle = service.require(&vehicle)?;
            let history = ServiceRecordService::new(storage).history(vehicle.id, Utc::now())?;
            print!("{}", format_vehicle_details(&history));
        }

        VehicleCommands::Delete { vehicle } => {
            let vehicle = service.require(&vehicle)?;
            let deletion = service.delete(vehicle.id)?;
            println!(
                "Deleted vehicle {} and {} service record(s)",
                deletion.vehicle.vehicle_number, deletion.removed_records
            );
        }
    }

    Ok(())
}
