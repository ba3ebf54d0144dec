//! Batch distribution for the captain sweep.
//!
//! The parallel sweep hands one candidate to each rayon task; these
//! helpers carve the candidate range into batches for progress
//! reporting and pool-scoped runs.

use crate::data::contest::ContestRules;
use crate::data::player::Player;
use crate::optimizer::{optimize_lineup_with_progress, LineupSolution, OptimizeError};
use crate::parallel::pool::WorkerPool;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use gaffer::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run the batched, progress-reporting sweep inside a worker pool.
pub fn run_sweep_batched<F>(
    players: &[Player],
    rules: &ContestRules,
    pool: &WorkerPool,
    on_progress: F,
) -> Result<LineupSolution, OptimizeError>
where
    F: FnMut(u32, u32) + Send,
{
    pool.install(|| optimize_lineup_with_progress(players, rules, on_progress))
}
