// src/market.rs

// The engine owns the world state (stocks plus one book per bot) and runs
// the daily loop: price update, trade solicitation, sequential settlement.
use crate::agents::agent_trait::{Bot, MarketView, Portfolio};
use crate::stocks::definitions::Stock;
use crate::types::money::Money;
use crate::types::order::Side;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Annualized drift baked into every created stock.
pub const ANNUAL_DRIFT: f64 = 0.05;
/// Scales creation-time volatility.
pub const NOISE_FACTOR: f64 = 0.2;
/// Dispersion of per-stock drift around the market baseline.
pub const DRIFT_FACTOR: f64 = 200.0;

/// (1 + b)^365 = 1 + ANNUAL_DRIFT  -->  b = (1 + ANNUAL_DRIFT)^(1/365) - 1
pub fn daily_drift() -> f64 {
    (1.0 + ANNUAL_DRIFT).powf(1.0 / 365.0) - 1.0
}

/// The simulation engine. Stocks live here for the market's lifetime; bot
/// books (cash, holdings, pending orders) live here too, keyed by
/// registration order, leaving each `Bot` a pure strategy object.
pub struct Market {
    stocks: Vec<Stock>,
    bots: Vec<Box<dyn Bot>>,
    books: Vec<Portfolio>,
    rng: StdRng,
    normal: Normal<f64>,
    day: u32,
    /// Per-bot starting cash; doubles as the "initialize_bots has run" flag.
    initial_cash: Option<Money>,
}

impl Market {
    /// A market seeded from OS entropy. Use [`Market::with_seed`] when the
    /// run has to be reproducible.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            stocks: Vec::new(),
            bots: Vec::new(),
            books: Vec::new(),
            rng,
            normal: Normal::new(0.0, 1.0).unwrap(),
            day: 0,
            initial_cash: None,
        }
    }

    // ------------------------------------------------------------------
    //  Listing
    // ------------------------------------------------------------------

    /// Lists one stock with explicit parameters and returns its id. The
    /// random creation modes below are built on this; it is also the way to
    /// set up exact scenarios.
    pub fn list_stock(
        &mut self,
        price: Money,
        inventory: u64,
        drift: f64,
        volatility: f64,
    ) -> usize {
        assert!(
            self.initial_cash.is_none(),
            "cannot list stocks after initialize_bots"
        );
        let id = self.stocks.len();
        self.stocks
            .push(Stock::new(id, price, inventory, drift, volatility));
        id
    }

    /// Appends `amount` stocks sharing one initial price and float. Each
    /// draws its own drift and volatility: two standard normals z1, z2 give
    /// `drift = daily_drift * (1 + DRIFT_FACTOR * z1)` and
    /// `volatility = NOISE_FACTOR * |z2 * daily_drift|`.
    pub fn create_uniform(&mut self, amount: usize, initial_price: Money, initial_shares: u64) {
        let base = daily_drift();
        for _ in 0..amount {
            let drift = base * (1.0 + DRIFT_FACTOR * self.normal.sample(&mut self.rng));
            let volatility = NOISE_FACTOR * (self.normal.sample(&mut self.rng) * base).abs();
            self.list_stock(initial_price, initial_shares, drift, volatility);
        }
    }

    /// Appends `amount` stocks with the same drift/volatility formulas as
    /// [`Market::create_uniform`], plus a price uniform in [1.00, 1000.00]
    /// and a float uniform in [10, 1000] shares.
    pub fn create(&mut self, amount: usize) {
        let base = daily_drift();
        for _ in 0..amount {
            let drift = base * (1.0 + DRIFT_FACTOR * self.normal.sample(&mut self.rng));
            let volatility = NOISE_FACTOR * (self.normal.sample(&mut self.rng) * base).abs();
            let price = Money::from_minor(self.rng.gen_range(100..=100_000));
            let inventory = self.rng.gen_range(10..=1_000);
            self.list_stock(price, inventory, drift, volatility);
        }
    }

    // ------------------------------------------------------------------
    //  Participants
    // ------------------------------------------------------------------

    /// Registers a bot. Registration order is settlement order: earlier
    /// bots consume inventory before later bots see it.
    pub fn add_bot<B: Bot + 'static>(&mut self, bot: B) {
        assert!(
            self.initial_cash.is_none(),
            "cannot register bots after initialize_bots"
        );
        self.bots.push(Box::new(bot));
    }

    /// Funds every registered bot and allocates its holdings vector. The
    /// stock set and bot set are frozen from here on.
    pub fn initialize_bots(&mut self, initial_cash: Money) {
        assert!(
            self.initial_cash.is_none(),
            "initialize_bots may only run once"
        );
        self.books = self
            .bots
            .iter()
            .map(|_| Portfolio::new(initial_cash, self.stocks.len()))
            .collect();
        self.initial_cash = Some(initial_cash);
    }

    // ------------------------------------------------------------------
    //  The daily step
    // ------------------------------------------------------------------

    /// Advances the simulation by one day: prices move, every bot trades
    /// against the fresh prices, then all orders settle sequentially.
    pub fn simulate(&mut self) {
        assert!(
            self.initial_cash.is_some(),
            "initialize_bots must run before simulate"
        );

        // Phase A: price update, one draw per live stock in id order. Dead
        // stocks consume no randomness; the draw count per day is exactly
        // the live-stock count at the start of the phase.
        for stock in self.stocks.iter_mut() {
            if stock.is_dead() {
                continue;
            }
            let z = self.normal.sample(&mut self.rng);
            stock.apply_daily_move(z);
        }

        // Phase B: solicit orders against the post-update prices.
        self.day += 1;
        let view = MarketView {
            stocks: &self.stocks,
            day: self.day,
        };
        for (bot, book) in self.bots.iter_mut().zip(self.books.iter_mut()) {
            let orders = bot.trade(&view, book);
            book.pending.extend(orders);
            book.day = self.day;
        }

        // Phase C: settle first-come-first-served across bots, submission
        // order within each bot. Anything that doesn't fit is skipped
        // silently; there are no partial fills.
        for book in self.books.iter_mut() {
            for order in std::mem::take(&mut book.pending) {
                let Some(stock) = self.stocks.get_mut(order.stock_id) else {
                    continue;
                };
                if order.quantity == 0 {
                    continue;
                }
                match order.side {
                    Side::Buy => {
                        if stock.inventory() < order.quantity {
                            continue;
                        }
                        // A quantity whose total does not fit in minor
                        // units is rejected like any other bad order.
                        let Some(cost) = stock.price().checked_mul(order.quantity) else {
                            continue;
                        };
                        if cost > book.cash {
                            continue;
                        }
                        stock.take_inventory(order.quantity);
                        book.holdings[order.stock_id] += order.quantity;
                        book.cash -= cost;
                    }
                    Side::Sell => {
                        if book.holdings[order.stock_id] < order.quantity {
                            continue;
                        }
                        let Some(proceeds) = stock.price().checked_mul(order.quantity) else {
                            continue;
                        };
                        stock.return_inventory(order.quantity);
                        book.holdings[order.stock_id] -= order.quantity;
                        book.cash += proceeds;
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    //  Read access
    // ------------------------------------------------------------------

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    #[inline]
    pub fn stock(&self, id: usize) -> Option<&Stock> {
        self.stocks.get(id)
    }

    #[inline]
    pub fn bot_count(&self) -> usize {
        self.bots.len()
    }

    pub fn bot_name(&self, bot: usize) -> &str {
        self.bots[bot].name()
    }

    /// The book of the bot at registration index `bot`.
    pub fn portfolio(&self, bot: usize) -> &Portfolio {
        &self.books[bot]
    }

    /// Starting cash recorded by `initialize_bots`; zero before funding.
    pub fn initial_cash(&self) -> Money {
        self.initial_cash.unwrap_or(Money::ZERO)
    }

    /// Cash plus mark-to-market share value for one bot.
    pub fn net_worth(&self, bot: usize) -> Money {
        self.books[bot].net_worth(&self.stocks)
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}
