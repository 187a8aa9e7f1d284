//! Inventory service
//!
//! Provides business logic for the car inventory: listing, lookup,
//! availability changes, and adding or removing cars.

use crate::audit::EntityType;
use crate::error::{RentalError, RentalResult};
use crate::models::{Car, Money};
use crate::storage::Storage;

/// Service for car inventory management
pub struct InventoryService<'a> {
    storage: &'a Storage,
}

impl<'a> InventoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All cars in inventory order
    pub fn list_all(&self) -> RentalResult<Vec<Car>> {
        self.storage.cars.get_all()
    }

    /// Cars that can be rented right now
    pub fn list_available(&self) -> RentalResult<Vec<Car>> {
        self.storage.cars.get_available()
    }

    pub fn get_by_id(&self, car_id: &str) -> RentalResult<Option<Car>> {
        self.storage.cars.get(car_id.trim())
    }

    /// Flip a car's availability flag and persist it
    pub fn set_availability(&self, car_id: &str, available: bool) -> RentalResult<()> {
        let before = self
            .storage
            .cars
            .get(car_id)?
            .ok_or_else(|| RentalError::car_not_found(car_id))?;

        self.storage.cars.set_availability(car_id, available)?;
        self.storage.cars.save()?;

        if before.available != available {
            let mut after = before.clone();
            after.available = available;
            self.storage.log_update(
                EntityType::Car,
                car_id,
                Some(after.label()),
                &before,
                &after,
                Some(format!("available: {} -> {}", before.available, available)),
            );
        }

        Ok(())
    }

    /// Append a fully-formed car to the inventory
    pub fn add(&self, car: Car) -> RentalResult<Car> {
        car.validate()
            .map_err(|e| RentalError::Validation(e.to_string()))?;

        if self.storage.cars.get(&car.car_id)?.is_some() {
            return Err(RentalError::Duplicate {
                entity_type: "Car",
                identifier: car.car_id,
            });
        }

        self.storage.cars.add(car.clone())?;
        self.storage.cars.save()?;

        self.storage
            .log_create(EntityType::Car, car.car_id.clone(), Some(car.label()), &car);
        log::debug!("Added car {} ({})", car.car_id, car.label());

        Ok(car)
    }

    /// Create a car with the next free ID
    pub fn add_car(
        &self,
        brand: &str,
        model: &str,
        seating_capacity: u32,
        rental_price: Money,
    ) -> RentalResult<Car> {
        let car_id = self.next_car_id()?;
        let car = Car::new(
            car_id,
            brand.trim(),
            model.trim(),
            seating_capacity,
            rental_price,
        );
        self.add(car)
    }

    /// ID that `add_car` would assign next
    pub fn next_car_id(&self) -> RentalResult<String> {
        self.storage.cars.next_id()
    }

    /// Remove a car that is not out on rent
    pub fn remove(&self, car_id: &str) -> RentalResult<Car> {
        let car_id = car_id.trim();
        let car = self
            .storage
            .cars
            .get(car_id)?
            .ok_or_else(|| RentalError::car_not_found(car_id))?;

        if !car.available {
            return Err(RentalError::CarRented(car_id.to_string()));
        }

        self.storage.cars.remove(car_id)?;
        self.storage.cars.save()?;

        self.storage
            .log_delete(EntityType::Car, car_id, Some(car.label()), &car);

        Ok(car)
    }
}
