// src/bin/run_market.rs
//! Batch driver: list a universe of stocks, fund the bots, run the clock
//! for a few years, print the standings.
//!
//! Usage: run_market [scenario.json] [--json]

use ksn_market::{write_report, BuyAndHoldBot, IdleBot, Market, Money, NoiseBot};
use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::io;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Scenario {
    /// Omit for an entropy-seeded (non-reproducible) run.
    seed: Option<u64>,
    days: u32,
    stock_count: usize,
    initial_price_minor: i64,
    initial_shares: u64,
    initial_cash_minor: i64,
}

impl Default for Scenario {
    fn default() -> Self {
        // Five years of trading across 700 identical listings.
        Self {
            seed: None,
            days: 365 * 5,
            stock_count: 700,
            initial_price_minor: 10_000,
            initial_shares: 120,
            initial_cash_minor: 100_000,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut scenario = Scenario::default();
    let mut json_output = false;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            scenario = serde_json::from_str(&fs::read_to_string(&arg)?)?;
        }
    }

    let mut market = match scenario.seed {
        Some(seed) => Market::with_seed(seed),
        None => Market::new(),
    };
    market.create_uniform(
        scenario.stock_count,
        Money::from_minor(scenario.initial_price_minor),
        scenario.initial_shares,
    );

    market.add_bot(IdleBot::new("MyBot"));
    market.add_bot(IdleBot::new("MyOtherBot"));
    market.add_bot(BuyAndHoldBot::new("Holder", 0));
    market.add_bot(NoiseBot::new("Retail", scenario.seed.unwrap_or(7) ^ 0x5eed));
    market.initialize_bots(Money::from_minor(scenario.initial_cash_minor));

    for _ in 0..scenario.days {
        market.simulate();
    }

    if json_output {
        serde_json::to_writer_pretty(io::stdout(), &market.reports())?;
        println!();
    } else {
        write_report(&market, &mut io::stdout())?;
    }
    Ok(())
}
