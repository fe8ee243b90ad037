//! benches/market_day.rs
//! Run with:  cargo bench --bench market_day
//! HTML:      target/criterion/report/index.html

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use ksn_market::{IdleBot, Market, Money, NoiseBot};
use std::hint::black_box;

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const STOCK_COUNTS: &[usize] = &[100, 700, 5_000];
const NOISE_BOTS: &[usize] = &[8, 64];

/// Build a seeded market with `n_stocks` uniform listings and `n_noise`
/// coin-flip bots, warmed up by a few days so holdings are non-trivial.
fn setup_market(n_stocks: usize, n_noise: usize) -> Market {
    let mut market = Market::with_seed(42);
    market.create_uniform(n_stocks, Money::from_minor(10_000), 120);

    market.add_bot(IdleBot::new("baseline"));
    for i in 0..n_noise {
        market.add_bot(NoiseBot::new(format!("noise_{i}"), i as u64));
    }
    market.initialize_bots(Money::from_minor(100_000));

    for _ in 0..5 {
        market.simulate();
    }
    market
}

/// One day across growing stock universes: dominated by the price update.
pub fn bench_price_update_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_update_scaling");

    for &n in STOCK_COUNTS {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter_batched(
                || setup_market(n, 0),
                |mut market| {
                    market.simulate();
                    black_box(market.day());
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// One day with an active bot crowd: exercises solicitation + settlement.
pub fn bench_settlement(c: &mut Criterion) {
    let mut group = c.benchmark_group("settlement");

    for &bots in NOISE_BOTS {
        group.throughput(Throughput::Elements(bots as u64));
        let id = BenchmarkId::from_parameter(format!("bots_{}", bots));
        group.bench_function(id, |b| {
            b.iter_batched(
                || setup_market(100, bots),
                |mut market| {
                    market.simulate();
                    black_box(market.net_worth(0));
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_price_update_scaling, bench_settlement);
criterion_main!(benches);
