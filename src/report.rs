// src/report.rs
//! Final-standings reporter. This is the collaborator side of the market:
//! it only reads bot state, and the sink is any `io::Write`.

use crate::market::Market;
use crate::types::money::Money;
use serde::Serialize;
use std::io::{self, Write};

/// One row of the final report.
#[derive(Debug, Clone, Serialize)]
pub struct BotReport {
    pub name: String,
    pub net_worth: Money,
    /// `net / initial - 1`, e.g. 0.05 for a 5% gain.
    pub yield_ratio: f64,
}

impl Market {
    /// One report row per bot, in registration order.
    pub fn reports(&self) -> Vec<BotReport> {
        let initial = self.initial_cash();
        (0..self.bot_count())
            .map(|bot| {
                let net_worth = self.net_worth(bot);
                let yield_ratio = if initial.minor() == 0 {
                    0.0
                } else {
                    net_worth.minor() as f64 / initial.minor() as f64 - 1.0
                };
                BotReport {
                    name: self.bot_name(bot).to_string(),
                    net_worth,
                    yield_ratio,
                }
            })
            .collect()
    }
}

/// Writes the classic standings table:
/// `<name> assets: \tKSN <net>\tYield: <pct>%`.
pub fn write_report(market: &Market, out: &mut impl Write) -> io::Result<()> {
    for row in market.reports() {
        let pct = 100.0 * row.yield_ratio;
        let sign = if pct < 0.0 { "" } else { "+" };
        writeln!(
            out,
            "{} assets: \tKSN {:.2}\tYield: {}{:.2}%",
            row.name,
            row.net_worth.to_display(),
            sign,
            pct
        )?;
    }
    Ok(())
}
