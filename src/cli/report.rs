//! CLI commands for reports
//!
//! Prints the admin rental reports without going through the menu.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::RentalResult;
use crate::reports::{ActiveRentalsReport, CustomerSummaryReport, RentalHistoryReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Rentals that are currently out
    Active,

    /// Customers with rental records and their counts
    #[command(alias = "summary")]
    Customers,

    /// Full rental history of one customer
    History {
        /// Customer username
        username: String,
    },
}

/// Render a report as terminal text
pub fn render_report(
    storage: &Storage,
    settings: &Settings,
    cmd: &ReportCommands,
) -> RentalResult<String> {
    let symbol = &settings.currency_symbol;

    let text = match cmd {
        ReportCommands::Active => ActiveRentalsReport::generate(storage)?.format_terminal(symbol),
        ReportCommands::Customers => CustomerSummaryReport::generate(storage)?.format_terminal(),
        ReportCommands::History { username } => {
            match RentalHistoryReport::generate(storage, username)? {
                Some(report) => {
                    let mut text = report.format_terminal(
                        &format!("RENTAL HISTORY FOR {}", username.to_uppercase()),
                        symbol,
                    );
                    text.push_str(&format!(
                        "\nTotal spent (including fines): {}\n",
                        report.total_spent().format_with_symbol(symbol)
                    ));
                    text
                }
                None => format!("No rental records found for customer '{}'.\n", username),
            }
        }
    };

    Ok(text)
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> RentalResult<()> {
    print!("{}", render_report(storage, settings, &cmd)?);
    Ok(())
}
