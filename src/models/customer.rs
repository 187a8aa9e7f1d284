//! Customer and admin account models
//!
//! Customers carry a balance and their own rental history. Admins only
//! carry credentials and a name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::rental::Rental;

/// A customer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique, case-sensitive login name
    pub username: String,

    /// Stored as entered
    pub password: String,

    pub first_name: String,
    pub last_name: String,

    /// May go negative after a late fee
    #[serde(default)]
    pub balance: Money,

    /// Rental history, oldest first
    #[serde(default)]
    pub rentals: Vec<Rental>,
}

impl Customer {
    /// Create a new customer with a starting balance
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance,
            rentals: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The rental currently out, if any
    pub fn active_rental(&self) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.is_active())
    }

    pub fn has_active_rental(&self) -> bool {
        self.active_rental().is_some()
    }

    /// Number of rentals currently out
    pub fn active_rental_count(&self) -> usize {
        self.rentals.iter().filter(|r| r.is_active()).count()
    }

    /// Mutable handle on the active rental for a given car
    pub fn active_rental_for_mut(&mut self, car_id: &str) -> Option<&mut Rental> {
        self.rentals
            .iter_mut()
            .find(|r| r.car_id == car_id && r.is_active())
    }

    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Validate the customer
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        validate_username(&self.username)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.username)
    }
}

/// An administrator account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Admin {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn validate(&self) -> Result<(), AccountValidationError> {
        validate_username(&self.username)
    }
}

fn validate_username(username: &str) -> Result<(), AccountValidationError> {
    if username.trim().is_empty() {
        return Err(AccountValidationError::EmptyUsername);
    }
    if username.len() > 64 {
        return Err(AccountValidationError::UsernameTooLong(username.len()));
    }
    Ok(())
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyUsername,
    UsernameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::UsernameTooLong(len) => {
                write!(f, "Username too long ({} chars, max 64)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
