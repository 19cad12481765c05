//! Amount type for representing expense values
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Renders as a fixed-point decimal string with two fractional digits,
//! which is also the on-disk representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Largest amount a single expense may carry (one billion units)
    ///
    /// Keeps any realistic number of records summable in an `i64`.
    pub const MAX: Amount = Amount(100_000_000_000);

    /// Create an amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Amount;
    /// let amount = Amount::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Ratio of this amount to `total`, as a percentage
    ///
    /// Returns 0.0 when `total` is zero.
    pub fn percentage_of(&self, total: Amount) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.0 as f64 / total.0 as f64 * 100.0
        }
    }

    /// Parse an amount from a decimal string
    ///
    /// Accepts `"12"`, `"12.5"`, `"12.50"`, `".5"` and an optional leading sign.
    /// Digits past the second decimal place are rounded half-up.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let invalid = || AmountParseError::InvalidFormat(s.to_string());

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| AmountParseError::Overflow(s.to_string()))?
        };

        let digit = |i: usize| -> i64 {
            frac.as_bytes()
                .get(i)
                .map(|b| (b - b'0') as i64)
                .unwrap_or(0)
        };
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(|| AmountParseError::Overflow(s.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }
}

/// Errors produced by [`Amount::parse`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    InvalidFormat(String),
    #[error("'{0}' is too large")]
    Overflow(String),
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_saturate_instead_of_wrapping() {
        let huge = Amount::from_cents(i64::MAX - 1);
        assert_eq!(huge + Amount::from_cents(5), Amount::from_cents(i64::MAX));

        let mut total = huge;
        total += huge;
        assert_eq!(total, Amount::from_cents(i64::MAX));

        let sum: Amount = [huge, huge, huge].iter().sum();
        assert!(sum.is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_cents(1050).to_string(), "10.50");
        assert_eq!(Amount::from_cents(5).to_string(), "0.05");
        assert_eq!(Amount::from_cents(-305).to_string(), "-3.05");
        assert_eq!(Amount::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!(Amount::parse("12").unwrap().cents(), 1200);
        assert_eq!(Amount::parse("12.5").unwrap().cents(), 1250);
        assert_eq!(Amount::parse(" 12.50 ").unwrap().cents(), 1250);
        assert_eq!(Amount::parse(".5").unwrap().cents(), 50);
        assert_eq!(Amount::parse("7.").unwrap().cents(), 700);
        assert_eq!(Amount::parse("+3").unwrap().cents(), 300);
        assert_eq!(Amount::parse("-3.05").unwrap().cents(), -305);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Amount::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Amount::parse("1.004").unwrap().cents(), 100);
        assert_eq!(Amount::parse("0.999").unwrap().cents(), 100);
        assert_eq!(Amount::parse("0.001").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        for bad in ["abc", "1.2.3", "NaN", "inf", "1e3", ".", "-", "12,50", "$5"] {
            assert!(
                matches!(Amount::parse(bad), Err(AmountParseError::InvalidFormat(_))),
                "expected '{}' to be rejected",
                bad
            );
        }
        assert!(matches!(
            Amount::parse("99999999999999999999"),
            Err(AmountParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        let amount = Amount::from_cents(123456);
        assert_eq!(Amount::parse(&amount.to_string()).unwrap(), amount);
    }

    #[test]
    fn test_sum_and_percentage() {
        let amounts = [Amount::from_cents(3000), Amount::from_cents(2000)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.cents(), 5000);
        assert!((amounts[0].percentage_of(total) - 60.0).abs() < 1e-9);
        assert_eq!(amounts[0].percentage_of(Amount::zero()), 0.0);
    }
}
