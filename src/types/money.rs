// src/types/money.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A fixed-point amount of currency stored as integer minor units
/// (hundredths). Every settlement computation stays on the integer; the
/// floating conversion is presentational only.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Raw minor units.
    #[inline]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Value in whole currency units, for display only.
    #[inline]
    pub fn to_display(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Price times share quantity, `None` when the total does not fit in
    /// minor units. Settlement uses this so an absurd quantity is just one
    /// more rejected order.
    #[inline]
    pub fn checked_mul(self, quantity: u64) -> Option<Money> {
        let quantity = i64::try_from(quantity).ok()?;
        self.0.checked_mul(quantity).map(Money)
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
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

/// Price times share quantity, the only multiplication settlement needs.
impl Mul<u64> for Money {
    type Output = Money;
    fn mul(self, quantity: u64) -> Money {
        Money(self.0 * quantity as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_display())
    }
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_conversion_is_hundredths() {
        assert_eq!(Money::from_minor(15037).to_display(), 150.37);
        assert_eq!(Money::from_minor(-250).to_display(), -2.50);
        assert_eq!(Money::ZERO.to_display(), 0.0);
    }

    #[test]
    fn quantity_pricing() {
        let price = Money::from_minor(10_000); // 100.00 per share
        assert_eq!((price * 3).minor(), 30_000);
        assert_eq!((price * 0).minor(), 0);
    }

    #[test]
    fn checked_quantity_pricing_rejects_overflow() {
        let price = Money::from_minor(10_000);
        assert_eq!(price.checked_mul(3), Some(Money::from_minor(30_000)));
        assert_eq!(price.checked_mul(1 << 60), None);
        assert_eq!(price.checked_mul(u64::MAX), None);
    }

    #[test]
    fn arithmetic_and_ordering() {
        let mut cash = Money::from_minor(100_000);
        cash -= Money::from_minor(30_000);
        cash += Money::from_minor(5_000);
        assert_eq!(cash, Money::from_minor(75_000));
        assert!(Money::from_minor(1) > Money::ZERO);
    }

    #[test]
    fn sums_over_iterators() {
        let total: Money = [100, 200, 300].iter().map(|&m| Money::from_minor(m)).sum();
        assert_eq!(total, Money::from_minor(600));
    }

    #[test]
    fn renders_two_decimals() {
        assert_eq!(Money::from_minor(100_000).to_string(), "1000.00");
        assert_eq!(Money::from_minor(-1250).to_string(), "-12.50");
    }
}
