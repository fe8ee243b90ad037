// src/agents/mod.rs

pub mod agent_trait;
pub mod buy_and_hold;
pub mod idle_bot;
pub mod noise_bot;
