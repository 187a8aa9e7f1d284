//! Cars CLI command
//!
//! Prints the inventory without entering the interactive menu.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::car::{format_all_cars, format_available_cars};
use crate::error::RentalResult;
use crate::services::InventoryService;
use crate::storage::Storage;

/// Arguments for `cars`
#[derive(Args, Debug, Default)]
pub struct CarsArgs {
    /// Only show cars that can be rented now
    #[arg(short, long)]
    pub available: bool,
}

/// Render the inventory table for `cars`
pub fn render_cars(storage: &Storage, settings: &Settings, args: &CarsArgs) -> RentalResult<String> {
    let service = InventoryService::new(storage);
    let symbol = &settings.currency_symbol;

    if args.available {
        Ok(format_available_cars(&service.list_available()?, symbol))
    } else {
        Ok(format_all_cars(&service.list_all()?, symbol))
    }
}

/// Handle the cars command
pub fn handle_cars_command(storage: &Storage, settings: &Settings, args: CarsArgs) -> RentalResult<()> {
    print!("{}", render_cars(storage, settings, &args)?);
    Ok(())
}
