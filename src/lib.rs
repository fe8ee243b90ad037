// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod market;
pub mod report;
pub mod stocks;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `agents` ---
pub use agents::agent_trait::{Bot, MarketView, Portfolio};
pub use agents::buy_and_hold::BuyAndHoldBot;
pub use agents::idle_bot::IdleBot;
pub use agents::noise_bot::NoiseBot;

// --- From our `market` engine ---
pub use market::{daily_drift, Market, ANNUAL_DRIFT, DRIFT_FACTOR, NOISE_FACTOR};

// --- From `report` ---
pub use report::{write_report, BotReport};

// --- From `stocks` ---
pub use stocks::definitions::Stock;

// --- From `types` ---
pub use types::money::Money;
pub use types::order::{Order, Side};
