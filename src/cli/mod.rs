//! CLI command handlers
//!
//! This module contains the interactive menu and the non-interactive
//! commands, bridging user input with the service layer.

pub mod admin;
pub mod cars;
pub mod console;
pub mod customer;
pub mod menu;
pub mod report;

pub use cars::{handle_cars_command, CarsArgs};
pub use console::Console;
pub use menu::Menu;
pub use report::{handle_report_command, ReportCommands};
