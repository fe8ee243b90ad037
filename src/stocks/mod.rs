// src/stocks/mod.rs

pub mod definitions;

pub use definitions::Stock;
