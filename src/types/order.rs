// src/types/order.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// A bot's trading intent for one stock on one day. Orders are transient:
/// queued during `trade`, consumed by settlement, then discarded.
///
/// Submission never fails. A zero quantity or out-of-range stock id is
/// recorded as-is and silently rejected when the market settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub stock_id: usize,
    pub quantity: u64,
    pub side: Side,
}

impl Order {
    #[inline]
    pub fn buy(stock_id: usize, quantity: u64) -> Self {
        Self {
            stock_id,
            quantity,
            side: Side::Buy,
        }
    }

    #[inline]
    pub fn sell(stock_id: usize, quantity: u64) -> Self {
        Self {
            stock_id,
            quantity,
            side: Side::Sell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_side() {
        let buy = Order::buy(3, 10);
        assert_eq!(buy.stock_id, 3);
        assert_eq!(buy.quantity, 10);
        assert_eq!(buy.side, Side::Buy);

        let sell = Order::sell(0, 1);
        assert_eq!(sell.side, Side::Sell);
    }

    #[test]
    fn malformed_orders_are_still_constructible() {
        // Settlement rejects these; submission must not.
        let zero = Order::buy(0, 0);
        assert_eq!(zero.quantity, 0);
        let out_of_range = Order::sell(usize::MAX, 5);
        assert_eq!(out_of_range.stock_id, usize::MAX);
    }
}
