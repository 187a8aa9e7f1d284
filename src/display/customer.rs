//! Customer display formatting
//!
//! Profile, menu banner, and the messages shown after renting or returning.

use crate::models::{Customer, Rental};
use crate::services::ReturnReceipt;

/// Banner shown at the top of the customer menu
pub fn format_customer_banner(customer: &Customer, currency_symbol: &str) -> String {
    let rule = "=".repeat(50);
    format!(
        "\n{rule}\n    Welcome, {} {}!\n    Your current balance: {}\n{rule}\n",
        customer.first_name.to_uppercase(),
        customer.last_name.to_uppercase(),
        customer.balance.format_with_symbol(currency_symbol),
        rule = rule,
    )
}

/// Format a customer's profile
pub fn format_profile(customer: &Customer, currency_symbol: &str) -> String {
    let mut output = String::from("\n=== YOUR PROFILE ===\n");
    output.push_str(&format!("Name: {}\n", customer.full_name()));
    output.push_str(&format!("Username: {}\n", customer.username));
    output.push_str(&format!(
        "Current Balance: {}\n",
        customer.balance.format_with_symbol(currency_symbol)
    ));

    match customer.active_rental_count() {
        0 => output.push_str("You have no active rentals.\n"),
        n => output.push_str(&format!("Active Rentals: {}\n", n)),
    }

    output
}

/// Confirmation after a successful rental
pub fn format_rental_confirmation(rental: &Rental, currency_symbol: &str) -> String {
    format!(
        "Car rented successfully for {} ({} days). Enjoy your trip!\n",
        rental.total_cost.format_with_symbol(currency_symbol),
        rental.days
    )
}

/// Confirmation after a return, including any late fee
pub fn format_return_receipt(receipt: &ReturnReceipt, currency_symbol: &str) -> String {
    let mut output = String::new();

    if receipt.days_late > 0 {
        output.push_str(&format!(
            "Late return by {} days. Fine: {}\n",
            receipt.days_late,
            receipt.fine.format_with_symbol(currency_symbol)
        ));
    }
    output.push_str("Car returned successfully. Thank you!\n");
    if receipt.fine.is_positive() {
        output.push_str(&format!(
            "Late fee of {} has been charged to your account.\n",
            receipt.fine.format_with_symbol(currency_symbol)
        ));
    }
    output.push_str(&format!(
        "Current balance: {}\n",
        receipt.balance.format_with_symbol(currency_symbol)
    ));

    output
}
