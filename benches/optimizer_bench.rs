//! Captain-sweep throughput benchmarks.
//!
//! Run with: `cargo bench`
//! Results show mean time per full optimization (all captain candidates)
//! for the sequential and parallel sweeps.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gaffer::data::contest::ContestRules;
use gaffer::data::player::Player;
use gaffer::optimizer::{optimize_lineup_with_mode, SweepMode};

/// Deterministic synthetic catalog: salaries and projections spread the
/// way site exports do, with no RNG so runs are comparable.
fn synthetic_catalog(size: usize) -> Vec<Player> {
    (0..size)
        .map(|index| {
            let salary = 28 + ((index * 37) % 103) as u32;
            let projection = 3.0 + ((index * 53) % 41) as f64 * 0.5;
            Player {
                name: format!("player-{index}"),
                projection,
                salary,
            }
        })
        .collect()
}

fn contest() -> ContestRules {
    ContestRules {
        salary_cap: 500,
        roster_size: 6,
        captain_multiplier: 1.5,
        salary_divisor: 1,
    }
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("captain_sweep");
    for size in [16, 31] {
        let players = synthetic_catalog(size);
        let rules = contest();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("sequential_{size}"), |b| {
            b.iter(|| {
                optimize_lineup_with_mode(
                    black_box(&players),
                    black_box(&rules),
                    SweepMode::Sequential,
                )
                .expect("optimize")
            })
        });
        group.bench_function(format!("parallel_{size}"), |b| {
            b.iter(|| {
                optimize_lineup_with_mode(
                    black_box(&players),
                    black_box(&rules),
                    SweepMode::Parallel,
                )
                .expect("optimize")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
