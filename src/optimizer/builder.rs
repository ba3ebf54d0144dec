//! DP table construction for one captain candidate.
//!
//! Classic 0-1 knapsack over salary, layered once per roster tier so the
//! table also bounds how many players a selection may use. Tier `m`
//! admits at most `m + 1` players, and every include transition extends
//! the tier-below optimum at the reduced salary (the empty selection for
//! tier 0). That keeps each tier exactly the best value achievable with
//! its player budget, and tier values non-decreasing as the budget grows.

use crate::optimizer::sweep::EffectiveStat;
use crate::optimizer::table::{Cell, DpTable};

/// Build the full table for the given effective (projection, salary)
/// stats. `stats` must already carry the candidate captain's inflated
/// figures; the builder itself knows nothing about captains.
///
/// Recurrence per cell, with the tie-break fixed so reconstruction can
/// retrace it: `V_m(i, w) = max(V_m(i-1, w), V_{m-1}(i-1, w-wi) + bi)`
/// where `V_{-1}` is the empty selection, and excluding the player wins
/// ties. Including via the tier below — never via a same-tier cell — is
/// what makes this exact: a same-tier predecessor stores only its
/// max-value pair, which can hide a cheaper lower-count selection at
/// the same coordinate behind a full roster.
pub fn build_table(stats: &[EffectiveStat], salary_cap: u32, roster_size: u32) -> DpTable {
    let player_count = stats.len();
    let cap = salary_cap as usize;
    let mut table = DpTable::new(roster_size as usize, player_count, cap);

    for tier in 0..roster_size as usize {
        for row in 1..=player_count {
            let stat = stats[row - 1];
            let salary = stat.salary as usize;
            for col in 0..=cap {
                let exclude = table.get(tier, row - 1, col);
                let cell = if salary > col {
                    exclude
                } else {
                    let spent = col - salary;
                    let below = if tier > 0 {
                        table.get(tier - 1, row - 1, spent)
                    } else {
                        Cell::EMPTY
                    };
                    let include = Cell {
                        best_value: below.best_value + stat.projection,
                        best_count: below.best_count + 1,
                    };
                    if include.best_value > exclude.best_value {
                        include
                    } else {
                        exclude
                    }
                };
                table.set(tier, row, col, cell);
            }
        }
    }

    table
}
