//! Rental model
//!
//! A rental ties a customer to a car for a date range. Records are embedded
//! in the customer and mirrored in the global rental index.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Date format used for every date the user types or the store persists
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Late fee as a percentage of the daily rate, per day late
pub const LATE_FEE_PERCENT: i64 = 150;

/// The rental policy shown to customers
pub const RENTAL_POLICY: [&str; 6] = [
    "Cars can be rented on a daily basis",
    "Payment is made at the time of booking",
    "One customer can only rent one car at a time",
    "Late returns will incur a fee of 150% of the daily rate for each day late",
    "Early returns will not be refunded",
    "All rentals must be returned in the same condition",
];

/// Status of a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    /// Car is out with the customer
    #[default]
    Active,
    /// Car has been returned
    Completed,
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A single rental record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub car_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Inclusive day count
    pub days: i64,

    /// Amount charged at booking
    pub total_cost: Money,

    pub status: RentalStatus,

    /// Set once the car comes back
    #[serde(default)]
    pub return_date: Option<NaiveDate>,

    /// Late fee charged on return
    #[serde(default)]
    pub fine_amount: Money,
}

impl Rental {
    /// Open a new active rental
    pub fn new(
        car_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        days: i64,
        total_cost: Money,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            start_date,
            end_date,
            days,
            total_cost,
            status: RentalStatus::Active,
            return_date: None,
            fine_amount: Money::zero(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }

    /// Close the rental
    pub fn complete(&mut self, return_date: NaiveDate, fine: Money) {
        self.status = RentalStatus::Completed;
        self.return_date = Some(return_date);
        self.fine_amount = fine;
    }

    /// Whole days between the agreed end date and `return_date`, zero if on time
    pub fn days_late(&self, return_date: NaiveDate) -> i64 {
        (return_date - self.end_date).num_days().max(0)
    }

    /// Daily rate implied by the booking
    pub fn implied_daily_rate(&self) -> Option<Money> {
        self.total_cost.checked_div(self.days)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Inclusive number of rental days; zero or negative when `end` precedes `start`
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Fine for returning `days_late` days after the end date; `None` on overflow
pub fn late_fee(daily_rate: Money, days_late: i64) -> Option<Money> {
    if days_late <= 0 {
        return Some(Money::zero());
    }
    daily_rate
        .checked_mul(days_late)?
        .checked_percent(LATE_FEE_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-03"),
            NaiveDate::from_ymd_opt(2024, 1, 3)
        );
        assert!(parse_date("2024/01/03").is_none());
        assert!(parse_date("03-01-2024").is_none());
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_rental_days_inclusive() {
        assert_eq!(rental_days(date("2024-01-01"), date("2024-01-03")), 3);
        assert_eq!(rental_days(date("2024-01-01"), date("2024-01-01")), 1);
        assert_eq!(rental_days(date("2024-01-02"), date("2024-01-01")), 0);
    }

    #[test]
    fn test_late_fee() {
        assert_eq!(late_fee(Money::from_dollars(50), 2), Some(Money::from_dollars(150)));
        assert_eq!(late_fee(Money::from_dollars(50), 0), Some(Money::zero()));
        assert_eq!(late_fee(Money::from_dollars(85), 1), Some(Money::from_cents(12750)));
    }

    #[test]
    fn test_late_fee_overflow() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(late_fee(huge, 3), None);
        assert_eq!(late_fee(Money::from_cents(i64::MAX), 1), None);
    }

    #[test]
    fn test_days_late() {
        let rental = Rental::new(
            "1001",
            date("2024-01-01"),
            date("2024-01-03"),
            3,
            Money::from_dollars(150),
        );
        assert_eq!(rental.days_late(date("2024-01-02")), 0);
        assert_eq!(rental.days_late(date("2024-01-03")), 0);
        assert_eq!(rental.days_late(date("2024-01-05")), 2);
    }

    #[test]
    fn test_complete() {
        let mut rental = Rental::new(
            "1001",
            date("2024-01-01"),
            date("2024-01-03"),
            3,
            Money::from_dollars(150),
        );
        assert!(rental.is_active());
        assert_eq!(rental.implied_daily_rate(), Some(Money::from_dollars(50)));

        rental.complete(date("2024-01-05"), Money::from_dollars(150));
        assert_eq!(rental.status, RentalStatus::Completed);
        assert_eq!(rental.return_date, Some(date("2024-01-05")));
        assert_eq!(rental.fine_amount.cents(), 15000);
    }

    #[test]
    fn test_serialized_field_names() {
        let rental = Rental::new(
            "1001",
            date("2024-01-01"),
            date("2024-01-03"),
            3,
            Money::from_dollars(150),
        );
        let value = serde_json::to_value(&rental).unwrap();
        assert_eq!(value["car_id"], "1001");
        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["status"], "active");
        assert!(value["return_date"].is_null());
        assert_eq!(value["fine_amount"], 0.0);
        assert_eq!(value["total_cost"], 150.0);
    }
}
