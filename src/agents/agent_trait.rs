// src/agents/agent_trait.rs

use crate::stocks::definitions::Stock;
use crate::types::money::Money;
use crate::types::order::Order;

/// A read-only snapshot of the market given to a bot for decision-making.
pub struct MarketView<'a> {
    pub stocks: &'a [Stock],
    /// The day whose orders are being solicited. Prices have already moved.
    pub day: u32,
}

impl<'a> MarketView<'a> {
    #[inline]
    pub fn stock(&self, id: usize) -> Option<&Stock> {
        self.stocks.get(id)
    }

    #[inline]
    pub fn stock_count(&self) -> usize {
        self.stocks.len()
    }
}

/// Per-bot book owned by the market. Bots read it through `trade`;
/// settlement is the only writer.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub(crate) cash: Money,
    pub(crate) holdings: Vec<u64>,
    pub(crate) pending: Vec<Order>,
    pub(crate) day: u32,
}

impl Portfolio {
    pub(crate) fn new(cash: Money, stock_count: usize) -> Self {
        Self {
            cash,
            holdings: vec![0; stock_count],
            pending: Vec::new(),
            day: 0,
        }
    }

    #[inline]
    pub fn cash(&self) -> Money {
        self.cash
    }

    /// Shares owned of one stock. Out-of-range ids read as zero.
    #[inline]
    pub fn holding(&self, stock_id: usize) -> u64 {
        self.holdings.get(stock_id).copied().unwrap_or(0)
    }

    #[inline]
    pub fn holdings(&self) -> &[u64] {
        &self.holdings
    }

    /// The last day this bot finished trading; one behind the market's day
    /// while the bot's own `trade` call is in progress.
    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Cash plus the mark-to-market value of every held share.
    pub fn net_worth(&self, stocks: &[Stock]) -> Money {
        let shares: Money = self
            .holdings
            .iter()
            .zip(stocks)
            .map(|(&quantity, stock)| stock.price() * quantity)
            .sum();
        self.cash + shares
    }
}

/// The core trait every market participant implements.
///
/// A bot observes a post-price-update view of the market plus its own book
/// and emits the day's orders. It cannot touch market or stock state; the
/// returned orders are queued in submission order and settled only after
/// every bot has traded.
pub trait Bot {
    /// Name used by the reporter.
    fn name(&self) -> &str;

    fn trade(&mut self, view: &MarketView, me: &Portfolio) -> Vec<Order>;
}
