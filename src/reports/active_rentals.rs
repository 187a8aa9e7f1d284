//! Active Rentals Report
//!
//! Every rental that is still out, across all customers. Rows come in
//! username order (alphabetical, as the rental index stores them), then
//! booking order within each customer.

use chrono::NaiveDate;

use crate::error::RentalResult;
use crate::models::Money;
use crate::storage::Storage;

use super::CarLabels;

/// A rental that has not been returned yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRentalRow {
    pub username: String,
    pub car_id: String,
    /// "Brand Model", or "Unknown Car" if the car was removed
    pub car_label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_cost: Money,
}

/// Active rentals, grouped by username in index order
#[derive(Debug, Clone, Default)]
pub struct ActiveRentalsReport {
    pub rows: Vec<ActiveRentalRow>,
}

impl ActiveRentalsReport {
    /// Generate the report from the global rental index
    pub fn generate(storage: &Storage) -> RentalResult<Self> {
        let labels = CarLabels::load(storage)?;
        let index = storage.rentals.get_all()?;

        let rows = index
            .iter()
            .flat_map(|(username, rentals)| {
                rentals
                    .iter()
                    .filter(|r| r.is_active())
                    .map(move |r| (username, r))
            })
            .map(|(username, rental)| ActiveRentalRow {
                username: username.clone(),
                car_id: rental.car_id.clone(),
                car_label: labels.get(&rental.car_id),
                start_date: rental.start_date,
                end_date: rental.end_date,
                total_cost: rental.total_cost,
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::from("\n=== ACTIVE RENTALS ===\n");

        if self.rows.is_empty() {
            output.push_str("No active rentals found.\n");
            return output;
        }

        for row in &self.rows {
            output.push_str(&format!("\nCustomer: {}\n", row.username));
            output.push_str(&format!("Car: {} (ID: {})\n", row.car_label, row.car_id));
            output.push_str(&format!(
                "Rental Period: {} to {}\n",
                row.start_date, row.end_date
            ));
            output.push_str(&format!(
                "Total Cost: {}\n",
                row.total_cost.format_with_symbol(currency_symbol)
            ));
        }

        output
    }
}
