//! Rental policy display

use crate::models::RENTAL_POLICY;

/// Numbered rental policy
pub fn format_policy() -> String {
    let mut output = String::from("\n=== RENTAL POLICY ===\n");
    for (i, rule) in RENTAL_POLICY.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, rule));
    }
    output.push_str(&"=".repeat(45));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_is_numbered() {
        let text = format_policy();
        assert!(text.contains("1. Cars can be rented on a daily basis"));
        assert!(text.contains("4. Late returns will incur a fee of 150%"));
        assert!(text.contains("6. All rentals must be returned"));
    }
}
