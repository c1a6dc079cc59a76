//! Money type for amounts that actually move between accounts
//!
//! Allocation arithmetic runs in `f64` so unvalidated input behaves like a
//! calculator (NaN in, NaN out). The moment an amount becomes a transfer or a
//! reported balance it is converted to whole cents and stays there.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Convert a dollar figure to cents, rounding half away from zero
    ///
    /// Returns `None` for NaN, infinities, and values outside the i64 cent range.
    pub fn from_dollars_f64(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() {
            return None;
        }
        let cents = (dollars * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a dollar figure, as sent on the wire
    pub fn as_dollars_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol, e.g. `$1234.50` or `-$3.05`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
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

impl Add for Money {
    type Output = Self;

    /// Saturates at the i64 cent range
    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Format a raw allocation figure the way the dashboard shows it
///
/// Non-finite values print as `NaN`/`inf` rather than being hidden.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount.is_finite() {
        match Money::from_dollars_f64(amount) {
            Some(m) => m.format_with_symbol(symbol),
            None => format!("{}{:.2}", symbol, amount),
        }
    } else {
        format!("{}{}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_from_dollars_rounds() {
        assert_eq!(Money::from_dollars_f64(595.0).unwrap().cents(), 59500);
        assert_eq!(Money::from_dollars_f64(0.125).unwrap().cents(), 13);
        assert_eq!(Money::from_dollars_f64(-0.125).unwrap().cents(), -13);
        assert_eq!(Money::from_dollars_f64(29.999).unwrap().cents(), 3000);
    }

    #[test]
    fn test_from_dollars_rejects_non_finite() {
        assert!(Money::from_dollars_f64(f64::NAN).is_none());
        assert!(Money::from_dollars_f64(f64::INFINITY).is_none());
        assert!(Money::from_dollars_f64(1e300).is_none());
    }

    #[test]
    fn test_as_dollars() {
        assert_eq!(Money::from_cents(5000).as_dollars_f64(), 50.0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_sum_near_limit_saturates() {
        let big = Money::from_dollars_f64(6.0e16).unwrap();
        let total: Money = [big, big].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut running = big;
        running += big;
        assert_eq!(running, total);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0, "$"), "$100.00");
        assert_eq!(format_amount(f64::NAN, "$"), "$NaN");
        assert_eq!(format_amount(-2.5, "$"), "-$2.50");
    }
}
