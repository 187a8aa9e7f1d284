//! Car model
//!
//! Represents a vehicle in the rental inventory.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Starting identifier when the inventory holds no numeric IDs
pub const FIRST_CAR_ID: u64 = 1001;

/// A car available (or not) for rent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier (e.g., "1001")
    pub car_id: String,

    /// Manufacturer (e.g., "Toyota")
    pub brand: String,

    /// Model name (e.g., "Corolla")
    pub model: String,

    /// Number of seats
    pub seating_capacity: u32,

    /// Price per day
    pub rental_price: Money,

    /// False while the car is out on rent
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Car {
    /// Create a new, available car
    pub fn new(
        car_id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        seating_capacity: u32,
        rental_price: Money,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            brand: brand.into(),
            model: model.into(),
            seating_capacity,
            rental_price,
            available: true,
        }
    }

    /// "Brand Model" label used in listings and reports
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Human-readable availability status
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Currently Rented"
        }
    }

    /// Numeric value of the ID, if it is made of digits only
    pub fn numeric_id(&self) -> Option<u64> {
        if self.car_id.is_empty() || !self.car_id.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.car_id.parse().ok()
    }

    /// Validate the car
    pub fn validate(&self) -> Result<(), CarValidationError> {
        if self.car_id.trim().is_empty() {
            return Err(CarValidationError::EmptyId);
        }
        if self.brand.trim().is_empty() {
            return Err(CarValidationError::EmptyBrand);
        }
        if self.model.trim().is_empty() {
            return Err(CarValidationError::EmptyModel);
        }
        if self.seating_capacity == 0 {
            return Err(CarValidationError::NoSeats);
        }
        if !self.rental_price.is_positive() {
            return Err(CarValidationError::NonPositivePrice(self.rental_price));
        }
        Ok(())
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | Seats: {} | Price: {}/day | Status: {}",
            self.car_id,
            self.label(),
            self.seating_capacity,
            self.rental_price,
            self.status_label()
        )
    }
}

/// Next free identifier: one past the highest numeric ID, or [`FIRST_CAR_ID`]
pub fn next_car_id(cars: &[Car]) -> String {
    cars.iter()
        .filter_map(Car::numeric_id)
        .max()
        .map(|max| max + 1)
        .unwrap_or(FIRST_CAR_ID)
        .to_string()
}

/// Validation errors for cars
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarValidationError {
    EmptyId,
    EmptyBrand,
    EmptyModel,
    NoSeats,
    NonPositivePrice(Money),
}

impl fmt::Display for CarValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Car ID cannot be empty"),
            Self::EmptyBrand => write!(f, "Car brand cannot be empty"),
            Self::EmptyModel => write!(f, "Car model cannot be empty"),
            Self::NoSeats => write!(f, "Seating capacity must be a positive number"),
            Self::NonPositivePrice(price) => {
                write!(f, "Rental price must be positive, got {}", price)
            }
        }
    }
}

impl std::error::Error for CarValidationError {}
