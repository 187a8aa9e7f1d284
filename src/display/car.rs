//! Car display formatting
//!
//! Formats the inventory for terminal output as a table or as one line per car.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Car;

#[derive(Tabled)]
struct CarRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Car")]
    label: String,
    #[tabled(rename = "Seats")]
    seats: u32,
    #[tabled(rename = "Price/Day")]
    price: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl CarRow {
    fn new(car: &Car, currency_symbol: &str) -> Self {
        Self {
            id: car.car_id.clone(),
            label: car.label(),
            seats: car.seating_capacity,
            price: car.rental_price.format_with_symbol(currency_symbol),
            status: car.status_label(),
        }
    }
}

/// Format cars as a table under a heading
///
/// `empty_message` is returned as-is when there is nothing to show.
pub fn format_car_table(
    title: &str,
    cars: &[Car],
    currency_symbol: &str,
    empty_message: &str,
) -> String {
    if cars.is_empty() {
        return format!("{}\n", empty_message);
    }

    let rows: Vec<CarRow> = cars.iter().map(|c| CarRow::new(c, currency_symbol)).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Columns::single(3), Alignment::right());

    format!("\n=== {} ===\n{}\n", title, table)
}

/// Format the cars that can be rented right now
pub fn format_available_cars(cars: &[Car], currency_symbol: &str) -> String {
    format_car_table(
        "AVAILABLE CARS",
        cars,
        currency_symbol,
        "No cars available for rent at the moment.",
    )
}

/// Format the whole inventory
pub fn format_all_cars(cars: &[Car], currency_symbol: &str) -> String {
    format_car_table(
        "ALL CARS",
        cars,
        currency_symbol,
        "No cars available in the system.",
    )
}

/// One `Display` line per car, for pickers
pub fn format_car_lines(cars: &[Car]) -> String {
    cars.iter().map(|car| format!("{}\n", car)).collect()
}
