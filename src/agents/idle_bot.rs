// src/agents/idle_bot.rs

use super::agent_trait::{Bot, MarketView, Portfolio};
use crate::types::order::Order;

/// Does nothing all day. Useful as a baseline: its yield is exactly zero
/// minus whatever the market never gave it.
pub struct IdleBot {
    name: String,
}

impl IdleBot {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self { name: name.into() }
    }
}

impl Bot for IdleBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn trade(&mut self, _view: &MarketView, _me: &Portfolio) -> Vec<Order> {
        Vec::new()
    }
}
