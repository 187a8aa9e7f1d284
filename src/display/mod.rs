//! Display formatting for terminal output
//!
//! Provides utilities for formatting cars, customers and the rental policy
//! for terminal display.

pub mod car;
pub mod customer;
pub mod policy;

pub use car::{format_all_cars, format_available_cars, format_car_lines, format_car_table};
pub use customer::{
    format_customer_banner, format_profile, format_rental_confirmation, format_return_receipt,
};
pub use policy::format_policy;
