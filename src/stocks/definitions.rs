// src/stocks/definitions.rs
//! Listed-stock state owned by the market.

use crate::types::money::Money;
use serde::Serialize;

/// One listed stock. Everything public here is read-only: price and
/// inventory move exclusively through the `Market` while it runs a day.
#[derive(Debug, Clone, Serialize)]
pub struct Stock {
    /// Dense index, assigned at listing time.
    id: usize,
    /// Current price in minor units, never negative.
    price: Money,
    /// Shares still held by the market, available to be bought.
    inventory: u64,
    /// Per-day multiplicative drift.
    drift: f64,
    /// Per-day volatility scale, non-negative.
    volatility: f64,
}

impl Stock {
    pub(crate) fn new(id: usize, price: Money, inventory: u64, drift: f64, volatility: f64) -> Self {
        Self {
            id,
            price,
            inventory,
            drift,
            volatility,
        }
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn price_minor(&self) -> i64 {
        self.price.minor()
    }

    #[inline]
    pub fn inventory(&self) -> u64 {
        self.inventory
    }

    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// A stock whose price has reached zero never recovers.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.price == Money::ZERO
    }

    /// Applies one day's geometric move given a standard-normal draw `z`.
    /// The increment is `round(price * (drift + volatility * z))` with
    /// halves rounding away from zero; the result floors at zero.
    pub(crate) fn apply_daily_move(&mut self, z: f64) {
        if self.is_dead() {
            return;
        }
        let factor = self.drift + self.volatility * z;
        let delta = (self.price.minor() as f64 * factor).round() as i64;
        self.price = Money::from_minor((self.price.minor() + delta).max(0));
    }

    pub(crate) fn take_inventory(&mut self, quantity: u64) {
        self.inventory -= quantity;
    }

    pub(crate) fn return_inventory(&mut self, quantity: u64) {
        self.inventory += quantity;
    }
}
