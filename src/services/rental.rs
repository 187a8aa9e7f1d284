//! Rental service
//!
//! The rental lifecycle: a customer rents one car at a time, pays up front,
//! and pays a late fee of 150% of the daily rate for every day the car comes
//! back after its end date.
//!
//! Each change is written to the customer's embedded rental list and to the
//! global rental index. The two files are saved one after the other, not as
//! a single transaction.

use chrono::NaiveDate;

use crate::audit::{rental_id, EntityType};
use crate::error::{RentalError, RentalResult};
use crate::models::{late_fee, parse_date, rental_days, Customer, Money, Rental};
use crate::storage::Storage;

use super::account::AccountService;
use super::inventory::InventoryService;

/// Outcome of returning a car
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    /// The rental as closed
    pub rental: Rental,
    /// Whole days past the end date (0 when on time)
    pub days_late: i64,
    /// Late fee charged
    pub fine: Money,
    /// Customer balance after the fee
    pub balance: Money,
}

/// Service for renting and returning cars
pub struct RentalService<'a> {
    storage: &'a Storage,
}

impl<'a> RentalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Rent a car for an inclusive date range
    pub fn rent(
        &self,
        username: &str,
        car_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> RentalResult<Rental> {
        let accounts = AccountService::new(self.storage);
        let inventory = InventoryService::new(self.storage);
        let car_id = car_id.trim();

        let before = accounts.get_customer(username)?;
        if before.has_active_rental() {
            return Err(RentalError::ActiveRentalExists(username.to_string()));
        }

        let car = inventory
            .get_by_id(car_id)?
            .ok_or_else(|| RentalError::car_not_found(car_id))?;
        if !car.available {
            return Err(RentalError::CarUnavailable(car_id.to_string()));
        }

        let start = parse_input_date(start_date)?;
        let end = parse_input_date(end_date)?;

        let days = rental_days(start, end);
        if days <= 0 {
            return Err(RentalError::Validation(
                "End date must not be before start date".into(),
            ));
        }

        let total_cost = car.rental_price.checked_mul(days).ok_or_else(|| {
            RentalError::InvalidAmount(format!(
                "{} per day for {} days is too large to charge",
                car.rental_price, days
            ))
        })?;
        if before.balance < total_cost {
            return Err(RentalError::InsufficientFunds {
                needed: total_cost,
                available: before.balance,
            });
        }

        self.check_writable()?;

        let rental = Rental::new(car_id, start, end, days, total_cost);

        let mut customer = before.clone();
        customer.balance -= total_cost;
        customer.rentals.push(rental.clone());
        self.save_customer(&customer)?;

        inventory.set_availability(car_id, false)?;

        self.storage.rentals.append(username, rental.clone())?;
        self.storage.rentals.save()?;

        self.storage.log_create(
            EntityType::Rental,
            rental_id(username, car_id),
            Some(car.label()),
            &rental,
        );
        self.log_balance_change(&before, &customer, "rental");
        log::debug!(
            "{} rented {} for {} day(s) at {}",
            username,
            car_id,
            days,
            total_cost
        );

        Ok(rental)
    }

    /// Return a rented car, charging a late fee if it is overdue
    pub fn return_car(
        &self,
        username: &str,
        car_id: &str,
        return_date: &str,
    ) -> RentalResult<ReturnReceipt> {
        let accounts = AccountService::new(self.storage);
        let inventory = InventoryService::new(self.storage);
        let car_id = car_id.trim();

        let before = accounts.get_customer(username)?;
        let active = before
            .rentals
            .iter()
            .find(|r| r.car_id == car_id && r.is_active())
            .cloned()
            .ok_or_else(|| RentalError::NoActiveRental(car_id.to_string()))?;

        let returned_on = parse_input_date(return_date)?;

        let days_late = active.days_late(returned_on);
        let fine = if days_late > 0 {
            let rate = self.daily_rate(&active)?;
            late_fee(rate, days_late).ok_or_else(|| {
                RentalError::InvalidAmount(format!(
                    "late fee for {} days at {} per day is too large to charge",
                    days_late, rate
                ))
            })?
        } else {
            Money::zero()
        };

        self.check_writable()?;

        let mut customer = before.clone();
        customer.balance = customer.balance.checked_sub(fine).ok_or_else(|| {
            RentalError::InvalidAmount(format!("{} fine exceeds the balance range", fine))
        })?;
        let closed = match customer.active_rental_for_mut(car_id) {
            Some(rental) => {
                rental.complete(returned_on, fine);
                rental.clone()
            }
            None => return Err(RentalError::NoActiveRental(car_id.to_string())),
        };
        self.save_customer(&customer)?;

        match inventory.set_availability(car_id, true) {
            Ok(()) => {}
            // The car may have been deleted from the inventory by hand
            Err(e) if e.is_not_found() => {
                log::warn!("Returned car {} is no longer in the inventory", car_id);
            }
            Err(e) => return Err(e),
        }

        let mirrored = self
            .storage
            .rentals
            .complete_active(username, car_id, returned_on, fine)?;
        if !mirrored {
            log::warn!(
                "Rental index has no active rental of {} for '{}'; appending the closed record",
                car_id,
                username
            );
            self.storage.rentals.append(username, closed.clone())?;
        }
        self.storage.rentals.save()?;

        self.storage.log_update(
            EntityType::Rental,
            rental_id(username, car_id),
            None,
            &active,
            &closed,
            Some(format!("status: active -> completed, fine: {}", fine)),
        );
        if fine.is_positive() {
            self.log_balance_change(&before, &customer, "late fee");
        }

        Ok(ReturnReceipt {
            rental: closed,
            days_late,
            fine,
            balance: customer.balance,
        })
    }

    // Rent and return touch three files; refuse up front if any of them
    // failed to load so a half-applied change is never persisted.
    fn check_writable(&self) -> RentalResult<()> {
        let storage = self.storage;
        if storage.customers.is_read_only()
            || storage.cars.is_read_only()
            || storage.rentals.is_read_only()
        {
            return Err(RentalError::Storage(
                "rental data could not be loaded; renting and returning are disabled".into(),
            ));
        }
        Ok(())
    }

    /// The customer's rental that is currently out
    pub fn active_rental(&self, username: &str) -> RentalResult<Option<Rental>> {
        let customer = AccountService::new(self.storage).get_customer(username)?;
        Ok(customer.active_rental().cloned())
    }

    /// The customer's own rental history, oldest first
    pub fn history(&self, username: &str) -> RentalResult<Vec<Rental>> {
        let customer = AccountService::new(self.storage).get_customer(username)?;
        Ok(customer.rentals)
    }

    // Rate the fine is based on: the car's current price, or what the
    // booking implies if the car is gone.
    fn daily_rate(&self, rental: &Rental) -> RentalResult<Money> {
        if let Some(car) = self.storage.cars.get(&rental.car_id)? {
            return Ok(car.rental_price);
        }

        rental
            .implied_daily_rate()
            .ok_or_else(|| RentalError::car_not_found(rental.car_id.clone()))
    }

    fn save_customer(&self, customer: &Customer) -> RentalResult<()> {
        if !self.storage.customers.update(customer.clone())? {
            return Err(RentalError::customer_not_found(customer.username.clone()));
        }
        self.storage.customers.save()
    }

    fn log_balance_change(&self, before: &Customer, after: &Customer, reason: &str) {
        self.storage.log_update(
            EntityType::Customer,
            after.username.clone(),
            Some(after.full_name()),
            before,
            after,
            Some(format!(
                "balance: {} -> {} ({})",
                before.balance, after.balance, reason
            )),
        );
    }
}

fn parse_input_date(input: &str) -> RentalResult<NaiveDate> {
    parse_date(input).ok_or_else(|| RentalError::InvalidDate(input.trim().to_string()))
}
