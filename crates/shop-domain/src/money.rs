//! Money
//!
//! Euro amounts stored as integer cents.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// An amount in euro cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn euros(euros: u64) -> Self {
        Self(euros * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// `percent` of this amount, half-cents rounded up
    pub fn percent(self, percent: u8) -> Money {
        Money((self.0 * u64::from(percent) + 50) / 100)
    }

    /// Amount with the euro sign appended, e.g. `27.00€`
    pub fn format_eur(self) -> String {
        format!("{}€", self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Money::from_cents(1350).to_string(), "13.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.format_eur(), "0.00€");
        assert_eq!(Money::euros(27).format_eur(), "27.00€");
    }

    #[test]
    fn test_percent_rounds_half_cent_up() {
        assert_eq!(Money::euros(27).percent(50), Money::from_cents(1350));
        assert_eq!(Money::from_cents(1299).percent(50), Money::from_cents(650));
        assert_eq!(Money::from_cents(1).percent(50), Money::from_cents(1));
    }

    #[test]
    fn test_sum_and_saturating_sub() {
        let total: Money = [Money::euros(12), Money::euros(15)].into_iter().sum();
        assert_eq!(total, Money::euros(27));
        assert_eq!(Money::euros(1) - Money::euros(2), Money::ZERO);
    }
}
