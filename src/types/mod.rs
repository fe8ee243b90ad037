// src/types/mod.rs

pub mod money;
pub mod order;

pub use money::Money;
pub use order::{Order, Side};
