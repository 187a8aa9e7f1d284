//! Reports module for the car rental system
//!
//! Read-only views over the global rental index: rentals currently out,
//! per-customer rental counts, and the history of a single customer.

pub mod active_rentals;
pub mod customer_summary;
pub mod rental_history;

pub use active_rentals::{ActiveRentalRow, ActiveRentalsReport};
pub use customer_summary::{CustomerRentalSummary, CustomerSummaryReport};
pub use rental_history::{HistoryEntry, RentalHistoryReport};

use std::collections::HashMap;

use crate::error::RentalResult;
use crate::storage::Storage;

/// Label shown for rentals whose car has left the inventory
pub const UNKNOWN_CAR: &str = "Unknown Car";

/// Car ID to "Brand Model" lookup
#[derive(Debug, Clone, Default)]
pub struct CarLabels(HashMap<String, String>);

impl CarLabels {
    pub fn load(storage: &Storage) -> RentalResult<Self> {
        let labels = storage
            .cars
            .get_all()?
            .into_iter()
            .map(|car| {
                let label = car.label();
                (car.car_id, label)
            })
            .collect();
        Ok(Self(labels))
    }

    pub fn get(&self, car_id: &str) -> String {
        self.0
            .get(car_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_CAR.to_string())
    }
}
