//! Car Rental CLI - Terminal-based car rental management
//!
//! This library provides the core functionality for a small car rental
//! desk: a car inventory, customer and admin accounts with balances, and a
//! rent/return lifecycle with late fees, all persisted as JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (cars, customers, rentals, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Rental reports for admins
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use car_rental::config::{paths::RentalPaths, settings::Settings};
//! use car_rental::services::RentalService;
//! use car_rental::storage::Storage;
//!
//! let paths = RentalPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let rental = RentalService::new(&storage).rent("jdoe", "1001", "2024-01-01", "2024-01-03")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{RentalError, RentalResult};
