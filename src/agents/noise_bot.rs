// src/agents/noise_bot.rs

use super::agent_trait::{Bot, MarketView, Portfolio};
use crate::types::order::Order;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Coin-flip retail flow: each day it picks a random stock and buys or
/// sells a single share.
///
/// The bot owns its generator; the market RNG is never shared with
/// participants, so a seeded `NoiseBot` keeps whole runs reproducible.
pub struct NoiseBot {
    name: String,
    rng: StdRng,
}

impl NoiseBot {
    pub fn new<T: Into<String>>(name: T, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for NoiseBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn trade(&mut self, view: &MarketView, me: &Portfolio) -> Vec<Order> {
        if view.stocks.is_empty() {
            return Vec::new();
        }
        let stock_id = self.rng.gen_range(0..view.stock_count());
        if self.rng.gen_bool(0.5) {
            vec![Order::buy(stock_id, 1)]
        } else if me.holding(stock_id) > 0 {
            vec![Order::sell(stock_id, 1)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stocks::definitions::Stock;
    use crate::types::money::Money;

    #[test]
    fn same_seed_same_order_stream() {
        let stocks: Vec<Stock> = (0..5)
            .map(|id| Stock::new(id, Money::from_minor(1_000), 100, 0.0, 0.0))
            .collect();
        let book = Portfolio::new(Money::from_minor(10_000), 5);

        let mut a = NoiseBot::new("a", 7);
        let mut b = NoiseBot::new("b", 7);
        for day in 1..=20 {
            let view = MarketView {
                stocks: &stocks,
                day,
            };
            assert_eq!(a.trade(&view, &book), b.trade(&view, &book));
        }
    }

    #[test]
    fn never_sells_what_it_does_not_hold() {
        let stocks = vec![Stock::new(0, Money::from_minor(1_000), 100, 0.0, 0.0)];
        let empty_book = Portfolio::new(Money::from_minor(10_000), 1);
        let mut bot = NoiseBot::new("retail", 3);

        for day in 1..=50 {
            let view = MarketView {
                stocks: &stocks,
                day,
            };
            for order in bot.trade(&view, &empty_book) {
                assert_eq!(order.side, crate::types::order::Side::Buy);
            }
        }
    }
}
