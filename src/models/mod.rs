//! Core data models for the car rental system
//!
//! This module contains the records that make up the rental domain:
//! cars, customers, admins and rentals, plus the money type they share.

pub mod car;
pub mod customer;
pub mod money;
pub mod rental;

pub use car::{next_car_id, Car, CarValidationError, FIRST_CAR_ID};
pub use customer::{AccountValidationError, Admin, Customer};
pub use money::{Money, MoneyParseError};
pub use rental::{
    late_fee, parse_date, rental_days, Rental, RentalStatus, DATE_FORMAT, LATE_FEE_PERCENT,
    RENTAL_POLICY,
};
