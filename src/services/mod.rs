//! Service layer for the car rental system
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, balance changes, and the rent/return lifecycle that
//! spans several repositories.

pub mod account;
pub mod inventory;
pub mod rental;

pub use account::{AccountService, RegisterCustomerInput, Session};
pub use inventory::InventoryService;
pub use rental::{RentalService, ReturnReceipt};
