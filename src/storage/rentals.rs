//! Global rental index repository
//!
//! rentals.json maps each username to its rental records in booking order.
//! It mirrors the rental list embedded in every customer record.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::RentalError;
use crate::models::{Money, Rental};

use super::file_io::{read_json, write_json_atomic, LoadGuard};

/// Username → rentals, oldest first
///
/// Usernames are kept in alphabetical order, so rentals.json and every
/// report built from the index list customers A to Z rather than in the
/// order they first rented.
pub type RentalIndex = BTreeMap<String, Vec<Rental>>;

/// Repository for the global rental index
pub struct RentalIndexRepository {
    path: PathBuf,
    data: RwLock<RentalIndex>,
    guard: LoadGuard,
}

impl RentalIndexRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
            guard: LoadGuard::default(),
        }
    }

    /// Load the index from disk
    pub fn load(&self) -> Result<(), RentalError> {
        let index: RentalIndex = self.guard.record(read_json(&self.path))?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = index;
        Ok(())
    }

    /// Save the index to disk
    pub fn save(&self) -> Result<(), RentalError> {
        self.guard.check_writable(&self.path)?;

        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// True when the file failed to load; edits and saves are refused
    pub fn is_read_only(&self) -> bool {
        self.guard.is_failed()
    }

    /// Snapshot of the whole index
    pub fn get_all(&self) -> Result<RentalIndex, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Rentals recorded for one username, `None` if the username has no entry
    pub fn get_for(&self, username: &str) -> Result<Option<Vec<Rental>>, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(username).cloned())
    }

    /// Append a rental under a username
    pub fn append(&self, username: &str, rental: Rental) -> Result<(), RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.entry(username.to_string()).or_default().push(rental);
        Ok(())
    }

    /// Close the active rental of `car_id` for `username` in place
    ///
    /// Returns false when the index holds no matching active rental.
    pub fn complete_active(
        &self,
        username: &str,
        car_id: &str,
        return_date: NaiveDate,
        fine: Money,
    ) -> Result<bool, RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let found = data.get_mut(username).and_then(|rentals| {
            rentals
                .iter_mut()
                .find(|r| r.car_id == car_id && r.is_active())
        });

        match found {
            Some(rental) => {
                rental.complete(return_date, fine);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
