//! Rental History Report
//!
//! Every rental of one customer, oldest first. Used by admins for any
//! username and by customers for their own record.

use chrono::NaiveDate;

use crate::error::RentalResult;
use crate::models::{Money, Rental, RentalStatus};
use crate::storage::Storage;

use super::CarLabels;

/// One rental with its car label resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub car_label: String,
    pub rental: Rental,
}

impl HistoryEntry {
    pub fn return_date(&self) -> Option<NaiveDate> {
        self.rental.return_date
    }
}

/// A customer's rental history
#[derive(Debug, Clone)]
pub struct RentalHistoryReport {
    pub username: String,
    pub entries: Vec<HistoryEntry>,
}

impl RentalHistoryReport {
    /// History from the global index; `None` when the username has no records
    pub fn generate(storage: &Storage, username: &str) -> RentalResult<Option<Self>> {
        match storage.rentals.get_for(username)? {
            Some(rentals) => Ok(Some(Self::from_rentals(storage, username, rentals)?)),
            None => Ok(None),
        }
    }

    /// History from an explicit rental list, such as a customer's own record
    pub fn from_rentals(
        storage: &Storage,
        username: &str,
        rentals: Vec<Rental>,
    ) -> RentalResult<Self> {
        let labels = CarLabels::load(storage)?;
        let entries = rentals
            .into_iter()
            .map(|rental| HistoryEntry {
                car_label: labels.get(&rental.car_id),
                rental,
            })
            .collect();

        Ok(Self {
            username: username.to_string(),
            entries,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of booking costs and late fees
    pub fn total_spent(&self) -> Money {
        self.entries
            .iter()
            .map(|e| e.rental.total_cost + e.rental.fine_amount)
            .sum()
    }

    /// Format the report for terminal display under `title`
    pub fn format_terminal(&self, title: &str, currency_symbol: &str) -> String {
        let mut output = format!("\n=== {} ===\n", title);

        for entry in &self.entries {
            let rental = &entry.rental;
            output.push_str(&format!(
                "\nCar: {} (ID: {})\n",
                entry.car_label, rental.car_id
            ));
            output.push_str(&format!(
                "Period: {} to {} ({} days)\n",
                rental.start_date, rental.end_date, rental.days
            ));
            output.push_str(&format!(
                "Cost: {}\n",
                rental.total_cost.format_with_symbol(currency_symbol)
            ));
            output.push_str(&format!("Status: {}\n", rental.status));

            if rental.status == RentalStatus::Completed {
                if let Some(returned) = entry.return_date() {
                    output.push_str(&format!("Return Date: {}\n", returned));
                }
                if rental.fine_amount.is_positive() {
                    output.push_str(&format!(
                        "Late Return Fine: {}\n",
                        rental.fine_amount.format_with_symbol(currency_symbol)
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
    use crate::models::parse_date;
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

    fn late_rental() -> Rental {
        let mut rental = Rental::new(
            "1001",
            parse_date("2024-01-01").unwrap(),
            parse_date("2024-01-03").unwrap(),
            3,
            Money::from_dollars(150),
        );
        rental.complete(parse_date("2024-01-05").unwrap(), Money::from_dollars(150));
        rental
    }

    #[test]
    fn test_unknown_username_is_none() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(RentalHistoryReport::generate(&storage, "ghost")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_history_from_index() {
        let (_temp_dir, storage) = create_test_storage();
        storage.rentals.append("alice", late_rental()).unwrap();

        let report = RentalHistoryReport::generate(&storage, "alice")
            .unwrap()
            .unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].car_label, "Toyota Corolla");
        assert_eq!(report.total_spent(), Money::from_dollars(300));
    }

    #[test]
    fn test_format_completed_with_fine() {
        let (_temp_dir, storage) = create_test_storage();
        let report =
            RentalHistoryReport::from_rentals(&storage, "alice", vec![late_rental()]).unwrap();

        let text = report.format_terminal("RENTAL HISTORY FOR ALICE", "$");
        assert!(text.contains("=== RENTAL HISTORY FOR ALICE ==="));
        assert!(text.contains("Period: 2024-01-01 to 2024-01-03 (3 days)"));
        assert!(text.contains("Status: Completed"));
        assert!(text.contains("Return Date: 2024-01-05"));
        assert!(text.contains("Late Return Fine: $150.00"));
    }

    #[test]
    fn test_format_active_omits_return_lines() {
        let (_temp_dir, storage) = create_test_storage();
        let active = Rental::new(
            "1001",
            parse_date("2024-01-01").unwrap(),
            parse_date("2024-01-03").unwrap(),
            3,
            Money::from_dollars(150),
        );
        let report = RentalHistoryReport::from_rentals(&storage, "alice", vec![active]).unwrap();

        let text = report.format_terminal("YOUR RENTAL HISTORY", "$");
        assert!(text.contains("Status: Active"));
        assert!(!text.contains("Return Date"));
        assert!(!text.contains("Late Return Fine"));
    }
}
