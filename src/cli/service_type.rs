//! Service type CLI commands

use clap::Subcommand;

use crate::display::format_service_type_list;
use crate::error::RideCareResult;
use crate::services::ServiceTypeService;
use crate::storage::Storage;

/// Service type subcommands
#[derive(Subcommand)]
pub enum ServiceTypeCommands {
    /// Create a service type
    Create {
        /// Service name, e.g. "Coolant Flush"
        name: String,
        /// Days between two services of this type
        #[arg(short, long = "interval-days", allow_negative_numbers = true)]
        interval_days: i64,
    },
    /// List service types
    List,
}

/// Handle a service type command
pub fn handle_service_type_command(storage: &Storage, cmd: ServiceTypeCommands) -> RideCareResult<()> {
    let service = ServiceTypeService::new(storage);

    match cmd {
        ServiceTypeCommands::Create {
            name,
            interval_days,
        } => {
            let service_type = service.create(&name, interval_days)?;
            println!("Created service type: {}", service_type);
        }
        ServiceTypeCommands::List => {
            let service_types = service.list()?;
            println!("{}", format_service_type_list(&service_types).trim_end());
        }
    }

    Ok(())
}
