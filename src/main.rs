use anyhow::Result;
use clap::{Parser, Subcommand};

use car_rental::cli::{
    handle_cars_command, handle_report_command, CarsArgs, Console, Menu, ReportCommands,
};
use car_rental::config::{paths::RentalPaths, settings::Settings};
use car_rental::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "carrental",
    version,
    about = "Terminal-based car rental management",
    long_about = "A menu-driven car rental desk. Customers register, top up their \
                  balance, rent one car at a time and pay late fees on overdue \
                  returns; admins manage the fleet and view rental reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// List the car inventory
    Cars(CarsArgs),

    /// Print rental reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show the most recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and seed sample data
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RentalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    // A store that fails to load stays empty and read-only; the rest still works
    for err in storage.load_each() {
        eprintln!("Warning: {}", err);
    }

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing car rental data at: {}", paths.base_dir().display());
            let report = initialize_storage(&storage)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if report.cars_seeded > 0 {
                println!("  - {} sample cars added", report.cars_seeded);
            }
            if report.admin_created {
                println!("  - Default admin account created (username: admin, password: admin123)");
            }
            if report.is_empty() {
                println!("  - Existing data left unchanged");
            }
        }
        Some(Commands::Config) => {
            println!("Car Rental Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Seed sample data: {}", settings.seed_sample_data);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
        Some(Commands::Cars(args)) => {
            seed_if_enabled(&storage, &settings)?;
            handle_cars_command(&storage, &settings, args)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => match storage.audit() {
            Some(audit) if audit.exists() => {
                for entry in audit.read_recent(limit)? {
                    println!("{}", entry.format_human_readable());
                }
            }
            Some(_) => println!("No audit entries yet."),
            None => println!("Audit logging is disabled in {}", paths.settings_file().display()),
        },
        Some(Commands::Menu) | None => {
            seed_if_enabled(&storage, &settings)?;
            let mut menu = Menu::new(&storage, &settings, Console::stdio());
            menu.run()?;
        }
    }

    Ok(())
}

fn seed_if_enabled(storage: &Storage, settings: &Settings) -> Result<()> {
    if settings.seed_sample_data {
        let report = initialize_storage(storage)?;
        if report.admin_created {
            println!("Default admin account created (username: admin, password: admin123)");
        }
    }
    Ok(())
}
