//! Interactive menu: the top-level loop, login and registration
//!
//! The admin and customer submenus live in `admin.rs` and `customer.rs`.
//! Errors from a single action are printed and the loop continues; only
//! end of input leaves the menus.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::error::{RentalError, RentalResult};
use crate::models::Money;
use crate::services::{AccountService, InventoryService, RegisterCustomerInput, Session};
use crate::storage::Storage;

use super::console::Console;
use crate::display::format_available_cars;

const MAIN_MENU: &str = "\n1. Login\n2. Register\n3. View Available Cars\n4. Exit\n";

/// The interactive car rental menu
pub struct Menu<'a, R, W> {
    pub(super) storage: &'a Storage,
    pub(super) settings: &'a Settings,
    pub(super) console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, console: Console<R, W>) -> Self {
        Self {
            storage,
            settings,
            console,
        }
    }

    /// Run until the user exits or input runs out
    pub fn run(&mut self) -> RentalResult<()> {
        match self.main_menu() {
            Err(e) if e.is_input_closed() => {
                log::debug!("Input closed, leaving the menu");
                self.console.println("")
            }
            other => other,
        }
    }

    /// Give back the console, e.g. to inspect captured output
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn main_menu(&mut self) -> RentalResult<()> {
        loop {
            self.console.print(&banner("WELCOME TO CAR RENTAL SYSTEM"))?;
            self.console.print(MAIN_MENU)?;

            let choice = self.console.prompt("\nChoose an option: ")?;
            let result = match choice.as_str() {
                "1" => self.login(),
                "2" => self.register(),
                "3" => self.show_available_cars(),
                "4" => {
                    self.console
                        .println("\nThank you for using the Car Rental System. Goodbye!")?;
                    return Ok(());
                }
                _ => self
                    .console
                    .println("Invalid choice. Please select 1, 2, 3, or 4."),
            };
            self.recover(result)?;
        }
    }

    fn login(&mut self) -> RentalResult<()> {
        self.console.println("\n=== LOGIN ===")?;
        let username = self.console.prompt("Username: ")?;
        let password = self.console.prompt_password("Password: ")?;

        let session = match AccountService::new(self.storage).authenticate(&username, &password) {
            Ok(session) => session,
            Err(RentalError::InvalidCredentials) => {
                return self
                    .console
                    .println("Login failed. Incorrect username or password.");
            }
            Err(e) => return Err(e),
        };

        match session {
            Session::Admin(_) => {
                self.console.println("\nAdmin login successful.")?;
                self.admin_menu()
            }
            Session::Customer(customer) => {
                self.console.println("\nCustomer login successful.")?;
                self.customer_menu(&customer.username)
            }
        }
    }

    fn register(&mut self) -> RentalResult<()> {
        self.console.println("\n=== CUSTOMER REGISTRATION ===")?;
        let username = self.console.prompt("Create username: ")?;
        let password = self.console.prompt_password("Create password: ")?;
        let first_name = self.console.prompt("First name: ")?;
        let last_name = self.console.prompt("Last name: ")?;

        let prompt = format!("Enter starting balance: {}", self.settings.currency_symbol);
        let raw_balance = self.console.prompt(&prompt)?;
        let starting_balance = match Money::parse(&raw_balance) {
            Ok(amount) => amount,
            Err(_) => {
                return self
                    .console
                    .println("Invalid balance amount. Please enter a number.");
            }
        };
        if starting_balance.is_negative() {
            self.console.println(&format!(
                "Balance cannot be negative. Using {} as starting balance.",
                Money::zero().format_with_symbol(&self.settings.currency_symbol)
            ))?;
        }

        let customer = AccountService::new(self.storage).register_customer(RegisterCustomerInput {
            username,
            password,
            first_name,
            last_name,
            starting_balance,
        })?;

        self.console.println(&format!(
            "Welcome, {}! Your account has been created.",
            customer.first_name
        ))
    }

    pub(super) fn show_available_cars(&mut self) -> RentalResult<()> {
        let cars = InventoryService::new(self.storage).list_available()?;
        let text = format_available_cars(&cars, &self.settings.currency_symbol);
        self.console.print(&text)
    }

    /// Print a failed action and carry on; only end of input propagates
    pub(super) fn recover(&mut self, result: RentalResult<()>) -> RentalResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.is_input_closed() => Err(e),
            Err(e) => {
                log::debug!("Menu action failed: {}", e);
                self.console.println(&format!("Error: {}", e))
            }
        }
    }
}

/// Title between two rules of `=`
pub(super) fn banner(title: &str) -> String {
    let rule = "=".repeat(50);
    format!("\n{rule}\n{:^50}\n{rule}\n", title, rule = rule)
}
