//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk amounts are decimal dollars (`50.0`, `10.5`), the format
//! the rental data files have always used; whole numbers are read as dollars.
//!
//! The operators saturate at the i64 bounds. Anything fed by user input goes
//! through the `checked_*` methods so overflow surfaces as an error.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use car_rental::models::Money;
    /// let amount = Money::from_cents(5000); // $50.00
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// Scale by a whole percentage, rounding half away from zero to the cent
    ///
    /// ```
    /// use car_rental::models::Money;
    /// assert_eq!(Money::from_cents(5001).checked_percent(150).unwrap().cents(), 7502);
    /// ```
    pub fn checked_percent(self, pct: i64) -> Option<Self> {
        let scaled = i128::from(self.0) * i128::from(pct);
        i64::try_from(round_div(scaled, 100)).ok().map(Self)
    }

    /// Divide evenly, rounding half away from zero; `None` for a zero divisor
    pub fn checked_div(&self, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let quotient = round_div(i128::from(self.0), i128::from(divisor));
        i64::try_from(quotient).ok().map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "50.00", "-10.50", "$50", "50.5", ".75". At most two
    /// decimal places; anything finer is rejected rather than truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let (whole, fraction) = rest.split_once('.').unwrap_or((rest, ""));

        let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !digits_only(whole) || !digits_only(fraction) {
            return Err(invalid());
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(invalid());
        }

        let out_of_range = || MoneyParseError::OutOfRange(trimmed.to_string());
        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let cents: i64 = format!("{:0<2}", fraction)
            .parse()
            .map_err(|_| invalid())?;

        let total = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

/// Integer division rounding half away from zero
fn round_div(value: i128, divisor: i128) -> i128 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder.abs() * 2 >= divisor.abs() {
        quotient + value.signum() * divisor.signum()
    } else {
        quotient
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DollarsVisitor)
    }
}

struct DollarsVisitor;

impl<'de> Visitor<'de> for DollarsVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an amount in dollars")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        let dollars = i64::try_from(v).map_err(|_| E::custom(format!("amount out of range: {}", v)))?;
        self.visit_i64(dollars)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        let cents = (v * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, hence the >=
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(E::custom(format!("amount out of range: {}", v)));
        }
        Ok(Money(cents as i64))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(
            format!("{}", Money::from_cents(i64::MIN)),
            "-$92233720368547758.08"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dollars(50);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 5500);
        assert_eq!((a - b).cents(), 4500);
        assert_eq!((a * 3).cents(), 15000);
        assert_eq!((-a).cents(), -5000);
    }

    #[test]
    fn test_operators_saturate() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!((max * 2).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(
            Money::from_dollars(10).checked_add(Money::from_cents(50)),
            Some(Money::from_cents(1050))
        );
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(Money::from_dollars(50).checked_mul(3), Some(Money::from_dollars(150)));
        assert_eq!(max.checked_mul(2), None);
    }

    #[test]
    fn test_percent_rounding() {
        let pct = |cents: i64| Money::from_cents(cents).checked_percent(150).unwrap().cents();
        assert_eq!(pct(5000), 7500);
        assert_eq!(pct(3333), 5000);
        assert_eq!(pct(1), 2);
        assert_eq!(pct(-1), -2);
        assert_eq!(Money::from_cents(i64::MAX).checked_percent(150), None);
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(Money::from_dollars(150).checked_div(3), Some(Money::from_dollars(50)));
        assert_eq!(Money::from_cents(100).checked_div(3), Some(Money::from_cents(33)));
        assert_eq!(Money::from_cents(200).checked_div(3), Some(Money::from_cents(67)));
        assert_eq!(Money::from_cents(100).checked_div(0), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_div(-1), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse(" 7 ").unwrap().cents(), 700);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("1.+5").is_err());
        assert!(Money::parse("1.-5").is_err());
        assert!(Money::parse("1e3").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_decimals() {
        assert_eq!(
            Money::parse("1.999"),
            Err(MoneyParseError::InvalidFormat("1.999".into()))
        );
        assert!(Money::parse("0.001").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::OutOfRange("100000000000000000".into()))
        );
        assert!(Money::parse("-100000000000000000").is_err());
        assert!(Money::parse("99999999999999999999999").is_err());
        // Largest whole-dollar amount that still fits
        assert!(Money::parse("92233720368547758.07").is_ok());
        assert!(Money::parse("92233720368547758.08").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serializes_as_dollars() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "10.5");
        assert_eq!(serde_json::to_string(&Money::from_dollars(150)).unwrap(), "150.0");
        assert_eq!(serde_json::to_string(&Money::from_cents(-5)).unwrap(), "-0.05");
    }

    #[test]
    fn test_deserializes_floats_and_integers() {
        let parse = |json: &str| serde_json::from_str::<Money>(json).unwrap();
        assert_eq!(parse("50.0"), Money::from_dollars(50));
        assert_eq!(parse("50"), Money::from_dollars(50));
        assert_eq!(parse("-12"), Money::from_dollars(-12));
        assert_eq!(parse("10.5"), Money::from_cents(1050));
        assert_eq!(parse("0.1"), Money::from_cents(10));
        // Rounded to the nearest cent
        assert_eq!(parse("19.999"), Money::from_dollars(20));
        assert_eq!(parse("0.004"), Money::zero());
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        assert!(serde_json::from_str::<Money>("\"50\"").is_err());
        assert!(serde_json::from_str::<Money>("null").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("100000000000000000").is_err());
    }

    #[test]
    fn test_round_trip_keeps_cents() {
        for cents in [0, 1, 99, 1050, 15000, -5, 123_456_789] {
            let m = Money::from_cents(cents);
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), m);
        }
    }
}
