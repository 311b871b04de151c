//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Divide two decimals, returning zero when the divisor is zero.
///
/// Every division in the cost pipeline goes through this helper so that
/// empty months, zero production days, and missing records collapse to a
/// zero cost component instead of NaN or a panic.
#[must_use]
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// A monetary amount.
///
/// Represented as a Decimal for precise cost calculations. Per-egg cost
/// components need more than cent precision, so internal precision is kept
/// in full and display rounds to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Divide this amount across `units`, returning zero when `units` is zero.
    #[must_use]
    pub fn per_unit(&self, units: Decimal) -> Self {
        Self(safe_div(self.0, units))
    }

    /// Round to 4 decimal places for presentation.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(4)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn safe_div_by_zero_is_zero() {
        assert_eq!(safe_div(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(safe_div(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn safe_div_normal_division() {
        assert_eq!(safe_div(dec!(34.125), dec!(160)), dec!(0.21328125));
    }

    #[test]
    fn money_display_four_places() {
        let m = Money::new(dec!(0.2133));
        assert_eq!(format!("{m}"), "0.2133");
    }

    #[test]
    fn money_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn money_negative() {
        let m = Money::new(dec!(-5));
        assert!(m.is_negative());
    }

    #[test]
    fn money_per_unit() {
        let m = Money::new(dec!(34.125));
        assert_eq!(m.per_unit(dec!(160)).amount(), dec!(0.21328125));
    }

    #[test]
    fn money_per_unit_zero_units() {
        let m = Money::new(dec!(34.125));
        assert_eq!(m.per_unit(Decimal::ZERO), Money::ZERO);
    }

    #[test]
    fn money_rounded() {
        let m = Money::new(dec!(0.21328125));
        assert_eq!(m.rounded(), dec!(0.2133));
    }

    #[test]
    fn money_arithmetic() {
        let a = Money::new(dec!(100));
        let b = Money::new(dec!(50));

        assert_eq!((a + b).amount(), dec!(150));
        assert_eq!((a - b).amount(), dec!(50));
        assert_eq!((a * dec!(1.25)).amount(), dec!(125));
    }

    #[test]
    fn money_ordering() {
        let a = Money::new(dec!(100));
        let b = Money::new(dec!(50));
        let c = Money::new(dec!(100));

        assert!(a > b);
        assert!(b < a);
        assert!(a == c);
    }

    #[test]
    fn money_serde_roundtrip() {
        let m = Money::new(dec!(150.5));
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn money_default() {
        assert!(Money::default().is_zero());
    }

    #[test]
    fn money_decimal_conversions() {
        let d = dec!(150.50);
        let m: Money = d.into();
        assert_eq!(m.amount(), d);
        let back: Decimal = m.into();
        assert_eq!(back, d);
    }
}
