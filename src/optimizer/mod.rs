pub mod backtrack;
pub mod builder;
pub mod sweep;
pub mod table;

use std::fmt;

use serde::Serialize;

use crate::data::contest::ContestRules;
use crate::data::player::Player;
use crate::optimizer::backtrack::reconstruct;
use crate::optimizer::sweep::{
    better_outcome, effective_stats, sweep_parallel, sweep_range, sweep_sequential,
    CandidateOutcome,
};
use crate::optimizer::table::DpTable;
use crate::parallel::batch_ranges;

/// Number of progress-reporting batches for optimize-with-progress.
const OPTIMIZE_PROGRESS_BATCH_COUNT: usize = 40;

/// How the captain sweep runs: one candidate at a time, or all
/// candidates across the rayon pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepMode {
    Sequential,
    Parallel,
}

impl Default for SweepMode {
    fn default() -> Self {
        Self::Sequential
    }
}

/// The winning captain, reported with pre-inflation figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Captain {
    pub name: String,
    pub projection: f64,
    pub salary: u32,
}

/// Final optimization output. `salary_spent` uses the captain's
/// inflated salary, since that is what the lineup actually costs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupResult {
    pub top_score: f64,
    pub captain: Option<Captain>,
    pub lineup: Vec<String>,
    pub salary_spent: u32,
}

impl LineupResult {
    fn degenerate() -> Self {
        Self {
            top_score: 0.0,
            captain: None,
            lineup: Vec::new(),
            salary_spent: 0,
        }
    }
}

/// Result plus the winning DP table (when one exists) for export or
/// inspection. The table is the only structure the lineup can be
/// reconstructed from, so it survives the sweep intact.
#[derive(Debug, Clone)]
pub struct LineupSolution {
    pub result: LineupResult,
    pub table: Option<DpTable>,
}

#[derive(Debug)]
pub enum OptimizeError {
    EmptyCatalog,
    InvalidPlayer { name: String, reason: String },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "player catalog is empty, no captain can be chosen"),
            Self::InvalidPlayer { name, reason } => {
                write!(f, "invalid player '{name}': {reason}")
            }
        }
    }
}

impl std::error::Error for OptimizeError {}

/// Optimize with the default sequential sweep.
pub fn optimize_lineup(
    players: &[Player],
    rules: &ContestRules,
) -> Result<LineupSolution, OptimizeError> {
    optimize_lineup_with_mode(players, rules, SweepMode::Sequential)
}

/// Full optimization run: validate, sweep every captain candidate,
/// cement the winner's inflated stats, backtrack the lineup.
pub fn optimize_lineup_with_mode(
    players: &[Player],
    rules: &ContestRules,
    mode: SweepMode,
) -> Result<LineupSolution, OptimizeError> {
    check_catalog(players)?;
    if rules.salary_cap == 0 || rules.roster_size == 0 {
        return Ok(LineupSolution {
            result: LineupResult::degenerate(),
            table: None,
        });
    }

    let outcome = match mode {
        SweepMode::Sequential => sweep_sequential(players, rules),
        SweepMode::Parallel => sweep_parallel(players, rules),
    };
    Ok(finish(players, rules, outcome))
}

/// Like [optimize_lineup_with_mode] but evaluates candidates in batches
/// and invokes `on_progress(done, total)` after each batch. Batches run
/// across the rayon pool.
pub fn optimize_lineup_with_progress<F>(
    players: &[Player],
    rules: &ContestRules,
    mut on_progress: F,
) -> Result<LineupSolution, OptimizeError>
where
    F: FnMut(u32, u32),
{
    check_catalog(players)?;
    if rules.salary_cap == 0 || rules.roster_size == 0 {
        return Ok(LineupSolution {
            result: LineupResult::degenerate(),
            table: None,
        });
    }

    let total = players.len();
    on_progress(0, total as u32);

    let num_batches = OPTIMIZE_PROGRESS_BATCH_COUNT.min(total);
    let mut best: Option<CandidateOutcome> = None;
    for (start, end) in batch_ranges(total, num_batches) {
        if let Some(batch_best) = sweep_range(players, rules, start, end) {
            best = Some(match best {
                Some(current) => better_outcome(current, batch_best),
                None => batch_best,
            });
        }
        on_progress(end as u32, total as u32);
    }

    let outcome = best.filter(|outcome| outcome.top_score > 0.0);
    Ok(finish(players, rules, outcome))
}

fn check_catalog(players: &[Player]) -> Result<(), OptimizeError> {
    if players.is_empty() {
        return Err(OptimizeError::EmptyCatalog);
    }
    for player in players {
        if !player.projection.is_finite() {
            return Err(OptimizeError::InvalidPlayer {
                name: player.name.clone(),
                reason: format!("projection {} is not finite", player.projection),
            });
        }
        if player.projection < 0.0 {
            return Err(OptimizeError::InvalidPlayer {
                name: player.name.clone(),
                reason: format!("projection {} is negative", player.projection),
            });
        }
    }
    Ok(())
}

/// Cement the winning captain's inflated stats and backtrack. A `None`
/// outcome is the degenerate empty lineup (score 0, no captain).
fn finish(
    players: &[Player],
    rules: &ContestRules,
    outcome: Option<CandidateOutcome>,
) -> LineupSolution {
    let Some(outcome) = outcome else {
        return LineupSolution {
            result: LineupResult::degenerate(),
            table: None,
        };
    };

    let winner = &players[outcome.captain_index];
    // The table was built under the winner's inflation; the backtracker
    // must see the same salaries.
    let cemented = effective_stats(players, Some(outcome.captain_index), rules.captain_multiplier);
    let lineup = reconstruct(&outcome.table, players, &cemented);

    // Inflation can price the candidate captain out of its own optimum
    // (inflated salary over the cap while cheaper players still fit).
    // The score and lineup stand, but no one actually plays captain.
    let captain = lineup
        .indices
        .contains(&outcome.captain_index)
        .then(|| Captain {
            name: winner.name.clone(),
            projection: winner.projection,
            salary: winner.salary,
        });

    LineupSolution {
        result: LineupResult {
            top_score: outcome.top_score,
            captain,
            lineup: lineup.names,
            salary_spent: lineup.salary_spent,
        },
        table: Some(outcome.table),
    }
}
