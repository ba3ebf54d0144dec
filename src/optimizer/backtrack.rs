//! Lineup reconstruction: walk the winning table from its final cell
//! back toward the origin, re-deriving which players the builder chose.
//!
//! The walk must see the same salaries the builder saw, so callers pass
//! the cemented effective stats — the winning captain's inflated view —
//! not the raw catalog figures.

use crate::data::player::Player;
use crate::optimizer::sweep::EffectiveStat;
use crate::optimizer::table::DpTable;

/// Players recovered from a winning table, in catalog order, plus the
/// effective salary they spend together. `indices` are catalog indices
/// parallel to `names`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructedLineup {
    pub names: Vec<String>,
    pub indices: Vec<usize>,
    pub salary_spent: u32,
}

/// Recover the selected players from `table`.
///
/// At each row the cell at the current tier is compared with the cell
/// one row up: a difference means the player at that row was included.
/// Every include transition extends the tier below, so each inclusion
/// also spends one unit of the tier budget; the walk ends when the
/// budget, the rows, or the salary runs out.
pub fn reconstruct(
    table: &DpTable,
    players: &[Player],
    stats: &[EffectiveStat],
) -> ReconstructedLineup {
    debug_assert_eq!(players.len(), stats.len());
    debug_assert_eq!(table.rows(), players.len() + 1);

    let mut row = table.rows() - 1;
    let mut col = table.cols() - 1;
    let mut tier_budget = table.tiers();
    let mut names = Vec::new();
    let mut indices = Vec::new();
    let mut salary_spent = 0_u32;

    while row > 0 && col > 0 && tier_budget > 0 {
        let tier = tier_budget - 1;
        if table.get(tier, row, col) != table.get(tier, row - 1, col) {
            let stat = stats[row - 1];
            names.push(players[row - 1].name.clone());
            indices.push(row - 1);
            salary_spent += stat.salary;
            col -= stat.salary as usize;
            row -= 1;
            tier_budget -= 1;
        } else {
            row -= 1;
        }
    }

    names.reverse();
    indices.reverse();
    ReconstructedLineup {
        names,
        indices,
        salary_spent,
    }
}
