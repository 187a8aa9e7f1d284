//! Customer menu: renting, returning, balance and history

use std::io::{BufRead, Write};

use crate::display::{
    format_customer_banner, format_policy, format_profile, format_rental_confirmation,
    format_return_receipt,
};
use crate::error::RentalResult;
use crate::models::Money;
use crate::reports::{CarLabels, RentalHistoryReport};
use crate::services::{AccountService, RentalService};

use super::menu::Menu;

const CUSTOMER_MENU: &str = "\n1. View Available Cars\n2. Rent a Car\n3. Return a Car\n\
                             4. Add Balance\n5. View Rental History\n6. View Personal Info\n\
                             7. View Rental Policy\n8. Logout\n";

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(super) fn customer_menu(&mut self, username: &str) -> RentalResult<()> {
        loop {
            // Reload every round so the banner shows the current balance
            let customer = AccountService::new(self.storage).get_customer(username)?;
            self.console.print(&format_customer_banner(
                &customer,
                &self.settings.currency_symbol,
            ))?;
            self.console.print(CUSTOMER_MENU)?;

            let choice = self.console.prompt("\nChoose an option: ")?;
            let result = match choice.as_str() {
                "1" => self.show_available_cars(),
                "2" => self.rent_car(username),
                "3" => self.return_car(username),
                "4" => self.add_balance(username),
                "5" => self.show_history(username),
                "6" => self
                    .console
                    .print(&format_profile(&customer, &self.settings.currency_symbol)),
                "7" => self.console.print(&format_policy()),
                "8" => {
                    return self
                        .console
                        .println("\nLogging out. Thank you for using our service!");
                }
                _ => self.console.println("Invalid choice. Please select 1 to 8."),
            };
            self.recover(result)?;
        }
    }

    fn rent_car(&mut self, username: &str) -> RentalResult<()> {
        let rentals = RentalService::new(self.storage);
        if rentals.active_rental(username)?.is_some() {
            return self.console.println(
                "\nYou already have an active rental. You can only rent one car at a time.",
            );
        }

        self.console.print(&format_policy())?;
        self.show_available_cars()?;

        let car_id = self
            .console
            .prompt("\nEnter Car ID to rent (or 0 to cancel): ")?;
        if car_id == "0" {
            return Ok(());
        }
        let start_date = self.console.prompt("Enter Start Date (YYYY-MM-DD): ")?;
        let end_date = self.console.prompt("Enter End Date (YYYY-MM-DD): ")?;

        let rental = rentals.rent(username, &car_id, &start_date, &end_date)?;
        self.console.print(&format_rental_confirmation(
            &rental,
            &self.settings.currency_symbol,
        ))
    }

    fn return_car(&mut self, username: &str) -> RentalResult<()> {
        let rentals = RentalService::new(self.storage);
        let active = match rentals.active_rental(username)? {
            Some(rental) => rental,
            None => {
                return self
                    .console
                    .println("\nYou don't have any active rentals to return.");
            }
        };

        let labels = CarLabels::load(self.storage)?;
        self.console.println("\n=== YOUR ACTIVE RENTALS ===")?;
        self.console.println(&format!(
            "ID: {} - {} (due {})",
            active.car_id,
            labels.get(&active.car_id),
            active.end_date
        ))?;

        let car_id = self
            .console
            .prompt("\nEnter Car ID to return (or 0 to cancel): ")?;
        if car_id == "0" {
            return Ok(());
        }
        let return_date = self.console.prompt("Enter Return Date (YYYY-MM-DD): ")?;

        let receipt = rentals.return_car(username, &car_id, &return_date)?;
        self.console.print(&format_return_receipt(
            &receipt,
            &self.settings.currency_symbol,
        ))
    }

    fn add_balance(&mut self, username: &str) -> RentalResult<()> {
        let prompt = format!(
            "\nEnter amount to add to your balance: {}",
            self.settings.currency_symbol
        );
        let raw = self.console.prompt(&prompt)?;
        let amount = match Money::parse(&raw) {
            Ok(amount) => amount,
            Err(_) => return self.console.println("Invalid amount. Please enter a number."),
        };
        if !amount.is_positive() {
            return self.console.println("Amount must be positive.");
        }

        let customer = AccountService::new(self.storage).add_balance(username, amount)?;
        self.console.println(&format!(
            "Balance updated. New balance: {}",
            customer
                .balance
                .format_with_symbol(&self.settings.currency_symbol)
        ))
    }

    fn show_history(&mut self, username: &str) -> RentalResult<()> {
        let history = RentalService::new(self.storage).history(username)?;
        if history.is_empty() {
            return self.console.println("You don't have any rental history.");
        }

        let report = RentalHistoryReport::from_rentals(self.storage, username, history)?;
        self.console.print(
            &report.format_terminal("YOUR RENTAL HISTORY", &self.settings.currency_symbol),
        )
    }
}
