use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ridecare::cli::{
    handle_audit_command, handle_export_command, handle_history_command, handle_record_command,
    handle_service_type_command, handle_vehicle_command,
};
use ridecare::config::{paths::RideCarePaths, settings::Settings};
use ridecare::storage::{init::DEFAULT_SERVICE_TYPES, json_file_valid, Storage};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "RIDECARE_LOG";

#[derive(Parser)]
#[command(
    name = "ridecare",
    version,
    about = "Terminal-based vehicle maintenance tracker",
    long_about = "RideCare keeps track of vehicles, the services performed on them \
                  and when each service is next due. It flags overdue and upcoming \
                  maintenance and exports service histories to CSV."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Vehicle management commands
    #[command(subcommand)]
    Vehicle(ridecare::cli::VehicleCommands),

    /// Service type management commands
    #[command(subcommand)]
    ServiceType(ridecare::cli::ServiceTypeCommands),

    /// Service record commands
    #[command(subcommand, alias = "rec")]
    Record(ridecare::cli::RecordCommands),

    /// Show the service history of a vehicle
    History {
        /// Vehicle number or ID
        vehicle: String,
        /// Print the history as a JSON document
        #[arg(long)]
        json: bool,
    },

    /// Export service records to CSV
    #[command(subcommand)]
    Export(ridecare::cli::ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Initialize data files and default service types
    Init,

    /// Show current configuration and paths
    Config,

    /// Check data files and show entity counts
    Status,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "ridecare=debug" } else { "ridecare=warn" };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // `status` must run without parsing settings
    let paths = RideCarePaths::new()?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Vehicle(cmd)) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::open(paths)?;
            handle_vehicle_command(&storage, &settings, cmd)?;
        }
        Some(Commands::ServiceType(cmd)) => {
            let storage = Storage::open(paths)?;
            handle_service_type_command(&storage, cmd)?;
        }
        Some(Commands::Record(cmd)) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::open(paths)?;
            handle_record_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History { vehicle, json }) => {
            let storage = Storage::open(paths)?;
            handle_history_command(&storage, &vehicle, json)?;
        }
        Some(Commands::Export(cmd)) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::open(paths)?;
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { count }) => {
            let storage = Storage::new(paths)?;
            handle_audit_command(&storage, count)?;
        }
        Some(Commands::Init) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Initializing RideCare at: {}", paths.base_dir().display());
            let seeded =
                ridecare::storage::initialize_storage(&paths, settings.seed_default_service_types)?;
            settings.save(&paths)?;
            println!("Initialization complete!");

            if seeded > 0 {
                println!();
                println!("Default service types have been created:");
                for (name, interval_days) in DEFAULT_SERVICE_TYPES {
                    println!("  - {} (every {} days)", name, interval_days);
                }
            }
            println!();
            println!("Run 'ridecare vehicle create <number> --owner <name> --model <model>' to add a vehicle.");
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("RideCare Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Upcoming window:     {} days", settings.upcoming_window_days);
            println!("  List limit:          {}", settings.list_limit);
            println!("  Export limit:        {}", settings.export_limit);
            println!(
                "  Seed service types:  {}",
                if settings.seed_default_service_types { "yes" } else { "no" }
            );
        }
        Some(Commands::Status) => {
            print_status(paths)?;
        }
        None => {
            println!("RideCare - Terminal-based vehicle maintenance tracker");
            println!();
            println!("Run 'ridecare --help' for usage information.");
            println!("Run 'ridecare init' to get started.");
        }
    }

    Ok(())
}

fn print_status(paths: RideCarePaths) -> Result<()> {
    println!("RideCare Status");
    println!("===============");
    println!("Base directory: {}", paths.base_dir().display());
    println!(
        "Initialized:    {}",
        if paths.is_initialized() { "yes" } else { "no" }
    );
    println!();

    let files = [
        ("settings", paths.settings_file()),
        ("vehicles", paths.vehicles_file()),
        ("service types", paths.service_types_file()),
        ("service records", paths.service_records_file()),
    ];

    let mut healthy = true;
    for (label, file) in &files {
        let state = if !file.exists() {
            "missing"
        } else if json_file_valid(file) {
            "ok"
        } else {
            healthy = false;
            "CORRUPT"
        };
        println!("  {:16} {:8} {}", label, state, file.display());
    }

    if !healthy {
        anyhow::bail!("one or more files could not be parsed");
    }

    let storage = Storage::open(paths)?;
    println!();
    println!("Vehicles:        {}", storage.vehicles.count()?);
    println!("Service types:   {}", storage.service_types.count()?);
    println!("Service records: {}", storage.service_records.count()?);

    Ok(())
}
