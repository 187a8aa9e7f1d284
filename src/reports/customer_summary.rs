//! Customer Summary Report
//!
//! One entry per username in the rental index with active and completed
//! counts and the cars each customer currently has out. Customers are
//! listed alphabetically by username.

use crate::error::RentalResult;
use crate::storage::Storage;

use super::active_rentals::ActiveRentalRow;
use super::CarLabels;

/// Rental counts for one customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRentalSummary {
    pub username: String,
    pub active_count: usize,
    pub completed_count: usize,
    /// Rentals still out
    pub current: Vec<ActiveRentalRow>,
}

/// Customers with rental records, ordered by username
#[derive(Debug, Clone, Default)]
pub struct CustomerSummaryReport {
    pub customers: Vec<CustomerRentalSummary>,
}

impl CustomerSummaryReport {
    /// Generate the report from the global rental index
    pub fn generate(storage: &Storage) -> RentalResult<Self> {
        let labels = CarLabels::load(storage)?;
        let index = storage.rentals.get_all()?;

        let mut customers = Vec::with_capacity(index.len());
        for (username, rentals) in &index {
            let current: Vec<ActiveRentalRow> = rentals
                .iter()
                .filter(|r| r.is_active())
                .map(|rental| ActiveRentalRow {
                    username: username.clone(),
                    car_id: rental.car_id.clone(),
                    car_label: labels.get(&rental.car_id),
                    start_date: rental.start_date,
                    end_date: rental.end_date,
                    total_cost: rental.total_cost,
                })
                .collect();

            customers.push(CustomerRentalSummary {
                username: username.clone(),
                active_count: current.len(),
                completed_count: rentals.len() - current.len(),
                current,
            });
        }

        Ok(Self { customers })
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::from("\n=== CUSTOMERS WITH RENTALS ===\n");

        if self.customers.is_empty() {
            output.push_str("No rental records found in the system.\n");
            return output;
        }

        for summary in &self.customers {
            output.push_str(&format!("\nCustomer: {}\n", summary.username));
            output.push_str(&format!("Active Rentals: {}\n", summary.active_count));
            output.push_str(&format!("Completed Rentals: {}\n", summary.completed_count));

            if !summary.current.is_empty() {
                output.push_str("Current Rentals:\n");
                for row in &summary.current {
                    output.push_str(&format!(
                        "  - {} (ID: {}) until {}\n",
                        row.car_label, row.car_id, row.end_date
                    ));
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RentalPaths;
    use crate::models::{parse_date, Money, Rental};
    use crate::storage::initialize_storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RentalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        initialize_storage(&storage).unwrap();
        (temp_dir, storage)
    }

    fn rental(car_id: &str, completed: bool) -> Rental {
        let mut rental = Rental::new(
            car_id,
            parse_date("2024-01-01").unwrap(),
            parse_date("2024-01-03").unwrap(),
            3,
            Money::from_dollars(150),
        );
        if completed {
            rental.complete(parse_date("2024-01-03").unwrap(), Money::zero());
        }
        rental
    }

    #[test]
    fn test_counts_per_customer() {
        let (_temp_dir, storage) = create_test_storage();
        storage.rentals.append("bob", rental("1003", true)).unwrap();
        storage.rentals.append("alice", rental("1001", true)).unwrap();
        storage.rentals.append("alice", rental("1002", true)).unwrap();
        storage.rentals.append("alice", rental("1004", false)).unwrap();

        let report = CustomerSummaryReport::generate(&storage).unwrap();
        assert_eq!(report.customers.len(), 2);

        let alice = &report.customers[0];
        assert_eq!(alice.username, "alice");
        assert_eq!(alice.active_count, 1);
        assert_eq!(alice.completed_count, 2);
        assert_eq!(alice.current[0].car_label, "Tesla Model 3");

        let bob = &report.customers[1];
        assert_eq!(bob.active_count, 0);
        assert!(bob.current.is_empty());
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        storage.rentals.append("alice", rental("1004", false)).unwrap();

        let text = CustomerSummaryReport::generate(&storage)
            .unwrap()
            .format_terminal();
        assert!(text.contains("Active Rentals: 1"));
        assert!(text.contains("Completed Rentals: 0"));
        assert!(text.contains("  - Tesla Model 3 (ID: 1004) until 2024-01-03"));
    }

    #[test]
    fn test_empty_index() {
        let (_temp_dir, storage) = create_test_storage();
        let report = CustomerSummaryReport::generate(&storage).unwrap();
        assert!(report.is_empty());
        assert!(report
            .format_terminal()
            .contains("No rental records found in the system."));
    }
}
