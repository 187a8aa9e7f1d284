//! Customer repository for JSON storage
//!
//! Manages loading and saving customers (with their embedded rental
//! history) to users.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RentalError;
use crate::models::Customer;

use super::file_io::{read_json, write_json_atomic, LoadGuard};

/// Repository for customer persistence
pub struct CustomerRepository {
    path: PathBuf,
    data: RwLock<Vec<Customer>>,
    guard: LoadGuard,
}

impl CustomerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            guard: LoadGuard::default(),
        }
    }

    /// Load customers from disk
    pub fn load(&self) -> Result<(), RentalError> {
        let customers: Vec<Customer> = self.guard.record(read_json(&self.path))?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = customers;
        Ok(())
    }

    /// Save customers to disk
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

    /// Get a customer by exact username
    pub fn get(&self, username: &str) -> Result<Option<Customer>, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|c| c.username == username).cloned())
    }

    /// Find the first customer whose credentials match exactly
    pub fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Customer>, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .find(|c| c.credentials_match(username, password))
            .cloned())
    }

    /// Get all customers in registration order
    pub fn get_all(&self) -> Result<Vec<Customer>, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Check if a username is taken (case-sensitive)
    pub fn exists(&self, username: &str) -> Result<bool, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().any(|c| c.username == username))
    }

    /// Append a new customer
    pub fn insert(&self, customer: Customer) -> Result<(), RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(customer);
        Ok(())
    }

    /// Replace the stored record with the same username; false if none exists
    pub fn update(&self, customer: Customer) -> Result<bool, RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|c| c.username == customer.username) {
            Some(existing) => {
                *existing = customer;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn count(&self) -> Result<usize, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
