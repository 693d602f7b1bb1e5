//! Money type for ledger amounts
//!
//! Internally stores amounts in cents (i64). Record values arrive as decimal
//! numbers and are rounded to the nearest cent on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ReportError, ReportResult};

/// A signed monetary amount stored as cents (hundredths of the unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use ledger_report::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal value, rounding half away from zero
    ///
    /// # Examples
    /// ```
    /// use ledger_report::models::Money;
    /// assert_eq!(Money::from_decimal(99.9)?.cents(), 9990);
    /// assert_eq!(Money::from_decimal(-12.5)?.cents(), -1250);
    /// # Ok::<(), ledger_report::ReportError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails for NaN, infinities and amounts whose cents do not fit in an
    /// `i64`.
    pub fn from_decimal(value: f64) -> ReportResult<Self> {
        if !value.is_finite() {
            return Err(ReportError::invalid_value(value, "not a finite number"));
        }

        let cents = (value * 100.0).round();
        // i64::MAX is not representable as f64; its nearest f64 is 2^63
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return Err(ReportError::invalid_value(value, "amount out of range"));
        }

        Ok(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, failing instead of wrapping on overflow
    pub fn checked_add(self, other: Self) -> ReportResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| ReportError::Overflow(format!("{} + {}", self, other)))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal with exactly two fraction digits, e.g. `-12.05`.
///
/// Width and alignment flags are honoured, so `{:>8}` right-justifies the
/// amount inside a report column.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        };
        f.pad(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(123.45).unwrap().cents(), 12345);
        assert_eq!(Money::from_decimal(99.9).unwrap().cents(), 9990);
        assert_eq!(Money::from_decimal(-5.0).unwrap().cents(), -500);
        assert_eq!(Money::from_decimal(0.004).unwrap().cents(), 0);
    }

    #[test]
    fn test_from_decimal_rejects_unrepresentable() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300, -1e17] {
            let err = Money::from_decimal(value).unwrap_err();
            assert!(err.is_invalid_value(), "accepted {}", value);
        }
        assert_eq!(Money::from_decimal(1e15).unwrap().cents(), 100_000_000_000_000_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-0.05");
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:>8}", Money::from_cents(0)), "    0.00");
        assert_eq!(format!("{:>8}", Money::from_cents(-9990)), "  -99.90");
    }

    #[test]
    fn test_checked_add() {
        let total = Money::from_cents(1000)
            .checked_add(Money::from_cents(-1500))
            .unwrap();
        assert_eq!(total.cents(), -500);
        assert!(total.is_negative());
    }

    #[test]
    fn test_checked_add_overflow() {
        let big = Money::from_cents(i64::MAX - 1);
        let err = big.checked_add(Money::from_cents(2)).unwrap_err();
        assert!(matches!(err, ReportError::Overflow(_)));
    }
}
