//! Car repository for JSON storage
//!
//! Manages loading and saving the inventory to cars.json. The file holds a
//! plain JSON array and inventory order is preserved.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::RentalError;
use crate::models::{next_car_id, Car};

use super::file_io::{read_json, write_json_atomic, LoadGuard};

/// Repository for car persistence
pub struct CarRepository {
    path: PathBuf,
    data: RwLock<Vec<Car>>,
    guard: LoadGuard,
}

impl CarRepository {
    /// Create a new car repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            guard: LoadGuard::default(),
        }
    }

    /// Load cars from disk
    pub fn load(&self) -> Result<(), RentalError> {
        let cars: Vec<Car> = self.guard.record(read_json(&self.path))?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = cars;
        Ok(())
    }

    /// Save cars to disk
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

    /// Get all cars in inventory order
    pub fn get_all(&self) -> Result<Vec<Car>, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Get cars that are not out on rent
    pub fn get_available(&self) -> Result<Vec<Car>, RentalError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|c| c.available).collect())
    }

    /// Get a car by ID (first match)
    pub fn get(&self, car_id: &str) -> Result<Option<Car>, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|c| c.car_id == car_id).cloned())
    }

    /// Append a car to the inventory
    pub fn add(&self, car: Car) -> Result<(), RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(car);
        Ok(())
    }

    /// Remove a car, returning it if it was present
    pub fn remove(&self, car_id: &str) -> Result<Option<Car>, RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let index = data.iter().position(|c| c.car_id == car_id);
        Ok(index.map(|i| data.remove(i)))
    }

    /// Set the availability flag; returns false if no car has that ID
    pub fn set_availability(&self, car_id: &str, available: bool) -> Result<bool, RentalError> {
        self.guard.check_writable(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|c| c.car_id == car_id) {
            Some(car) => {
                car.available = available;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Identifier the next added car should get
    pub fn next_id(&self) -> Result<String, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(next_car_id(&data))
    }

    pub fn count(&self) -> Result<usize, RentalError> {
        let data = self.data.read().map_err(|e| {
            RentalError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
