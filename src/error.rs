//! Custom error types for the car rental system
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for car rental operations
#[derive(Error, Debug)]
pub enum RentalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Zero or negative money amount where a positive one is required
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date that does not match YYYY-MM-DD
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login failed
    #[error("Invalid credentials: incorrect username or password")]
    InvalidCredentials,

    /// Customer already has a car out
    #[error("Customer '{0}' already has an active rental. Only one car may be rented at a time")]
    ActiveRentalExists(String),

    /// Car exists but is out on rent
    #[error("Car {0} is not available for rent")]
    CarUnavailable(String),

    /// Attempt to remove a car that is out on rent
    #[error("Car {0} is currently rented and cannot be removed")]
    CarRented(String),

    /// Return requested for a car the customer does not have
    #[error("No active rental for car {0}")]
    NoActiveRental(String),

    /// Insufficient balance
    #[error("Insufficient balance: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The interactive input stream reached end of file
    #[error("Input stream closed")]
    InputClosed,
}

impl RentalError {
    /// Create a "not found" error for cars
    pub fn car_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Car",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for customers
    pub fn customer_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Customer",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount(_) | Self::InvalidDate(_)
        )
    }

    /// Check if the interactive input has been exhausted
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for RentalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RentalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for car rental operations
pub type RentalResult<T> = Result<T, RentalError>;
