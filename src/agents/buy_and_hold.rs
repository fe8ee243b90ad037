// src/agents/buy_and_hold.rs

use super::agent_trait::{Bot, MarketView, Portfolio};
use crate::types::order::Order;

/// Spends as much cash as it can on its target stock the first chance it
/// gets, then sits on the position for the rest of the run.
pub struct BuyAndHoldBot {
    name: String,
    target: usize,
    has_bought: bool,
}

impl BuyAndHoldBot {
    pub fn new<T: Into<String>>(name: T, target: usize) -> Self {
        Self {
            name: name.into(),
            target,
            has_bought: false,
        }
    }
}

impl Bot for BuyAndHoldBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn trade(&mut self, view: &MarketView, me: &Portfolio) -> Vec<Order> {
        if self.has_bought {
            return Vec::new();
        }
        let Some(stock) = view.stock(self.target) else {
            return Vec::new();
        };
        if stock.price_minor() <= 0 {
            // Dead target, keep waiting (it will never revive, but staying
            // idle is the honest behavior).
            return Vec::new();
        }

        let affordable = (me.cash().minor() / stock.price_minor()) as u64;
        let quantity = affordable.min(stock.inventory());
        if quantity == 0 {
            return Vec::new();
        }

        // Flag first so a rejected order does not trigger a retry storm.
        self.has_bought = true;
        vec![Order::buy(self.target, quantity)]
    }
}
