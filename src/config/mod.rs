//! Configuration module for the car rental system
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RentalPaths;
pub use settings::Settings;
