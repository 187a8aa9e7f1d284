//! Admin panel: inventory management and rental reports

use std::io::{BufRead, Write};

use crate::display::format_all_cars;
use crate::error::{RentalError, RentalResult};
use crate::models::Money;
use crate::reports::{ActiveRentalsReport, CustomerSummaryReport, RentalHistoryReport};
use crate::services::InventoryService;

use super::menu::{banner, Menu};

const ADMIN_MENU: &str =
    "\n1. Add New Car\n2. Remove Car\n3. View All Cars\n4. View Rental Reports\n5. Logout\n";

const REPORTS_MENU: &str = "1. View all active rentals\n\
                            2. View all customers with rentals\n\
                            3. View rental history for specific customer\n";

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(super) fn admin_menu(&mut self) -> RentalResult<()> {
        loop {
            self.console.print(&banner("ADMIN PANEL"))?;
            self.console.print(ADMIN_MENU)?;

            let choice = self.console.prompt("\nChoose an option: ")?;
            let result = match choice.as_str() {
                "1" => self.add_car(),
                "2" => self.remove_car(),
                "3" => self.show_all_cars(),
                "4" => self.reports_menu(),
                "5" => return self.console.println("Logging out as Admin."),
                _ => self.console.println("Invalid choice. Please select 1 to 5."),
            };
            self.recover(result)?;
        }
    }

    fn add_car(&mut self) -> RentalResult<()> {
        let inventory = InventoryService::new(self.storage);

        self.console.println("\n=== ADD NEW CAR ===")?;
        let car_id = inventory.next_car_id()?;
        self.console.println(&format!("New Car ID: {}", car_id))?;

        let brand = self.console.prompt("Enter Brand: ")?;
        let model = self.console.prompt("Enter Model: ")?;
        let seats = self.console.prompt("Enter Seating Capacity: ")?;
        let price = self.console.prompt(&format!(
            "Enter Rental Price per day ({}): ",
            self.settings.currency_symbol
        ))?;

        let (seats, price) = match (seats.parse::<u32>(), Money::parse(&price)) {
            (Ok(seats), Ok(price)) => (seats, price),
            _ => {
                return self.console.println(
                    "Invalid input. Please enter numeric values for capacity and price.",
                );
            }
        };
        if seats == 0 || !price.is_positive() {
            return Err(RentalError::Validation(
                "Capacity and price must be positive numbers.".into(),
            ));
        }

        let car = inventory.add_car(&brand, &model, seats, price)?;
        self.console.println(&format!(
            "Car added successfully: {} (ID: {})",
            car.label(),
            car.car_id
        ))
    }

    fn remove_car(&mut self) -> RentalResult<()> {
        self.show_all_cars()?;
        let car_id = self.console.prompt("\nEnter Car ID to remove: ")?;

        let car = InventoryService::new(self.storage).remove(&car_id)?;
        self.console.println(&format!(
            "Car removed successfully: {} (ID: {})",
            car.label(),
            car.car_id
        ))
    }

    fn show_all_cars(&mut self) -> RentalResult<()> {
        let cars = InventoryService::new(self.storage).list_all()?;
        let text = format_all_cars(&cars, &self.settings.currency_symbol);
        self.console.print(&text)
    }

    fn reports_menu(&mut self) -> RentalResult<()> {
        self.console.println("\n=== RENTAL REPORTS ===")?;
        self.console.print(REPORTS_MENU)?;

        let choice = self.console.prompt("\nChoose an option: ")?;
        let symbol = self.settings.currency_symbol.clone();
        let text = match choice.as_str() {
            "1" => ActiveRentalsReport::generate(self.storage)?.format_terminal(&symbol),
            "2" => CustomerSummaryReport::generate(self.storage)?.format_terminal(),
            "3" => {
                let username = self.console.prompt("Enter customer username: ")?;
                match RentalHistoryReport::generate(self.storage, &username)? {
                    Some(report) => report.format_terminal(
                        &format!("RENTAL HISTORY FOR {}", username.to_uppercase()),
                        &symbol,
                    ),
                    None => format!("No rental records found for customer '{}'.\n", username),
                }
            }
            _ => "Invalid choice.\n".to_string(),
        };

        self.console.print(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::menu::tests::{create_test_storage, run_script};
    use crate::models::Money;
    use crate::services::RentalService;

    const ADMIN_LOGIN: [&str; 3] = ["1", "admin", "admin123"];

    fn script<'a>(steps: &[&'a str]) -> Vec<&'a str> {
        let mut lines = ADMIN_LOGIN.to_vec();
        lines.extend_from_slice(steps);
        lines.extend_from_slice(&["5", "4"]);
        lines
    }

    #[test]
    fn test_admin_login_and_logout() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_script(&storage, &script(&[]));
        assert!(output.contains("Admin login successful."));
        assert!(output.contains("ADMIN PANEL"));
        assert!(output.contains("Logging out as Admin."));
    }

    #[test]
    fn test_add_car() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_script(&storage, &script(&["1", "Kia", "Rio", "5", "40"]));

        assert!(output.contains("New Car ID: 1006"));
        assert!(output.contains("Car added successfully: Kia Rio (ID: 1006)"));
        let car = storage.cars.get("1006").unwrap().unwrap();
        assert_eq!(car.rental_price, Money::from_dollars(40));
        assert!(car.available);
    }

    #[test]
    fn test_add_car_rejects_bad_numbers() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_script(
            &storage,
            &script(&["1", "Kia", "Rio", "five", "40", "1", "Kia", "Rio", "0", "40"]),
        );

        assert!(output.contains("Invalid input. Please enter numeric values"));
        assert!(output.contains("Capacity and price must be positive numbers."));
        assert_eq!(storage.cars.count().unwrap(), 5);
    }

    #[test]
    fn test_remove_car() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_script(&storage, &script(&["2", "1005"]));
        assert!(output.contains("Car removed successfully: BMW X5 (ID: 1005)"));
        assert!(storage.cars.get("1005").unwrap().is_none());
    }

    #[test]
    fn test_remove_rented_car() {
        let (_temp_dir, storage) = create_test_storage();
        storage.cars.set_availability("1001", false).unwrap();

        let output = run_script(&storage, &script(&["2", "1001", "2", "4242"]));
        assert!(output.contains("currently rented and cannot be removed"));
        assert!(output.contains("Car not found: 4242"));
        assert!(storage.cars.get("1001").unwrap().is_some());
    }

    #[test]
    fn test_reports() {
        let (_temp_dir, storage) = create_test_storage();
        crate::services::AccountService::new(&storage)
            .register_customer(crate::services::RegisterCustomerInput {
                username: "jdoe".into(),
                password: "pw".into(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                starting_balance: Money::from_dollars(500),
            })
            .unwrap();
        RentalService::new(&storage)
            .rent("jdoe", "1001", "2024-01-01", "2024-01-03")
            .unwrap();

        let output = run_script(
            &storage,
            &script(&["4", "1", "4", "2", "4", "3", "jdoe", "4", "3", "ghost"]),
        );
        assert!(output.contains("=== ACTIVE RENTALS ==="));
        assert!(output.contains("Customer: jdoe"));
        assert!(output.contains("Completed Rentals: 0"));
        assert!(output.contains("=== RENTAL HISTORY FOR JDOE ==="));
        assert!(output.contains("No rental records found for customer 'ghost'."));
    }
}
