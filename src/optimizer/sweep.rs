//! Captain sweep: every catalog entry is tried as captain, the DP table
//! is rebuilt under that candidate's inflated stats, and the best final
//! score wins.
//!
//! The catalog itself is never mutated. Each candidate is evaluated on
//! its own effective-stat view, so candidates are independent and the
//! parallel sweep needs no restore step (a missed restore would corrupt
//! every later candidate in a mutate-in-place design).

use rayon::prelude::*;

use crate::data::contest::ContestRules;
use crate::data::player::Player;
use crate::optimizer::builder::build_table;
use crate::optimizer::table::DpTable;

/// Per-candidate view of one player's stats, with any captain inflation
/// already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStat {
    pub projection: f64,
    pub salary: u32,
}

/// A fully evaluated captain candidate: who, the score at the table's
/// final cell, and the table itself (needed later for backtracking).
#[derive(Debug, Clone)]
pub struct CandidateOutcome {
    pub captain_index: usize,
    pub top_score: f64,
    pub table: DpTable,
}

/// Build the effective stats for the catalog with `captain` (if any)
/// inflated by the contest's captain multiplier. Salary inflation is
/// floored, matching how contest sites price captain slots.
pub fn effective_stats(
    players: &[Player],
    captain: Option<usize>,
    multiplier: f64,
) -> Vec<EffectiveStat> {
    players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            if captain == Some(index) {
                EffectiveStat {
                    projection: player.projection * multiplier,
                    salary: (player.salary as f64 * multiplier).floor() as u32,
                }
            } else {
                EffectiveStat {
                    projection: player.projection,
                    salary: player.salary,
                }
            }
        })
        .collect()
}

/// Evaluate one captain candidate: inflate, build, read the final cell.
pub fn evaluate_candidate(
    players: &[Player],
    candidate: usize,
    rules: &ContestRules,
) -> CandidateOutcome {
    let stats = effective_stats(players, Some(candidate), rules.captain_multiplier);
    let table = build_table(&stats, rules.salary_cap, rules.roster_size);
    let top_score = table.final_cell().best_value;
    CandidateOutcome {
        captain_index: candidate,
        top_score,
        table,
    }
}

/// Sequential sweep over every candidate. Returns `None` when no captain
/// choice scores above zero (e.g. every inflated salary busts the cap) —
/// a valid degenerate outcome, not an error.
pub fn sweep_sequential(players: &[Player], rules: &ContestRules) -> Option<CandidateOutcome> {
    let mut best: Option<CandidateOutcome> = None;
    for candidate in 0..players.len() {
        let outcome = evaluate_candidate(players, candidate, rules);
        if outcome.top_score > best.as_ref().map_or(0.0, |b| b.top_score) {
            best = Some(outcome);
        }
    }
    best
}

/// Parallel sweep. Candidates are independent, so the only shared step
/// is the final reduction; equal scores resolve toward the lowest
/// catalog index, making the result bit-identical to the sequential
/// sweep (which keeps the first strict improvement).
pub fn sweep_parallel(players: &[Player], rules: &ContestRules) -> Option<CandidateOutcome> {
    (0..players.len())
        .into_par_iter()
        .map(|candidate| evaluate_candidate(players, candidate, rules))
        .reduce_with(better_outcome)
        .filter(|outcome| outcome.top_score > 0.0)
}

/// Sweep a contiguous range of candidates (used by the batched,
/// progress-reporting path). Same reduction rules as [sweep_parallel].
pub fn sweep_range(
    players: &[Player],
    rules: &ContestRules,
    start: usize,
    end: usize,
) -> Option<CandidateOutcome> {
    (start..end)
        .into_par_iter()
        .map(|candidate| evaluate_candidate(players, candidate, rules))
        .reduce_with(better_outcome)
}

pub(crate) fn better_outcome(
    left: CandidateOutcome,
    right: CandidateOutcome,
) -> CandidateOutcome {
    if right.top_score > left.top_score
        || (right.top_score == left.top_score && right.captain_index < left.captain_index)
    {
        right
    } else {
        left
    }
}

#[cfg(test)]
mod tests {
    use super::{effective_stats, sweep_parallel, sweep_sequential};
    use crate::data::contest::ContestRules;
    use crate::data::player::Player;

    fn player(name: &str, projection: f64, salary: u32) -> Player {
        Player {
            name: name.to_string(),
            projection,
            salary,
        }
    }

    fn rules(salary_cap: u32, roster_size: u32) -> ContestRules {
        ContestRules {
            salary_cap,
            roster_size,
            captain_multiplier: 1.5,
            salary_divisor: 1,
        }
    }

    #[test]
    fn inflation_applies_to_exactly_one_entry_and_floors_salary() {
        let players = vec![player("a", 10.0, 5), player("b", 4.0, 3)];
        let stats = effective_stats(&players, Some(1), 1.5);
        assert_eq!(stats[0].projection, 10.0);
        assert_eq!(stats[0].salary, 5);
        assert_eq!(stats[1].projection, 6.0);
        assert_eq!(stats[1].salary, 4); // floor(4.5)
    }

    #[test]
    fn sweep_returns_none_when_every_inflated_salary_busts_the_cap() {
        // Cap 6: no salary fits, inflated or not, for any captain choice.
        let players = vec![player("a", 10.0, 8), player("b", 9.0, 7)];
        let outcome = sweep_sequential(&players, &rules(6, 2));
        assert!(outcome.is_none());
    }

    #[test]
    fn parallel_sweep_matches_sequential_captain_and_score() {
        let players = vec![
            player("a", 10.0, 5),
            player("b", 6.0, 3),
            player("c", 8.0, 4),
            player("d", 7.5, 4),
        ];
        let contest = rules(12, 3);
        let sequential = sweep_sequential(&players, &contest).expect("non-degenerate");
        let parallel = sweep_parallel(&players, &contest).expect("non-degenerate");
        assert_eq!(sequential.captain_index, parallel.captain_index);
        assert_eq!(sequential.top_score, parallel.top_score);
    }

    #[test]
    fn equal_scoring_candidates_resolve_to_the_lowest_index() {
        // Two identical players: captaining either yields the same score.
        let players = vec![player("twin1", 5.0, 2), player("twin2", 5.0, 2)];
        let contest = rules(10, 2);
        let sequential = sweep_sequential(&players, &contest).expect("non-degenerate");
        let parallel = sweep_parallel(&players, &contest).expect("non-degenerate");
        assert_eq!(sequential.captain_index, 0);
        assert_eq!(parallel.captain_index, 0);
    }
}
