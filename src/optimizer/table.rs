//! Dense DP table for the lineup knapsack.
//!
//! One table is built per captain candidate. Storage is a single flat
//! `Vec<Cell>` indexed by (tier, row, col): tier is the roster-size
//! dimension, row is "players considered so far" (0..=n), col is salary
//! spent (0..=cap). Tier `m` admits at most `m + 1` players, so the
//! answer for a roster of Q is read at `(Q - 1, n, cap)`.

/// Best achievable score and the number of players used to reach it at
/// one (tier, row, col) coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub best_value: f64,
    pub best_count: u32,
}

impl Cell {
    /// The empty selection.
    pub const EMPTY: Cell = Cell {
        best_value: 0.0,
        best_count: 0,
    };
}

/// Flat 3-dimensional DP table with explicit bounds.
#[derive(Debug, Clone)]
pub struct DpTable {
    tiers: usize,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl DpTable {
    /// Allocate a table for `players` catalog entries, `salary_cap + 1`
    /// salary columns, and `roster_size` tiers. Every cell starts as the
    /// empty selection; the builder overwrites every row above 0.
    pub fn new(roster_size: usize, players: usize, salary_cap: usize) -> Self {
        let tiers = roster_size;
        let rows = players + 1;
        let cols = salary_cap + 1;
        Self {
            tiers,
            rows,
            cols,
            cells: vec![Cell::EMPTY; tiers * rows * cols],
        }
    }

    pub fn tiers(&self) -> usize {
        self.tiers
    }

    /// Row count, i.e. catalog size + 1.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count, i.e. salary cap + 1.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, tier: usize, row: usize, col: usize) -> usize {
        debug_assert!(tier < self.tiers && row < self.rows && col < self.cols);
        (tier * self.rows + row) * self.cols + col
    }

    pub fn get(&self, tier: usize, row: usize, col: usize) -> Cell {
        self.cells[self.index(tier, row, col)]
    }

    pub fn set(&mut self, tier: usize, row: usize, col: usize, cell: Cell) {
        let index = self.index(tier, row, col);
        self.cells[index] = cell;
    }

    /// The cell holding the overall optimum: last tier, full catalog,
    /// full salary cap.
    pub fn final_cell(&self) -> Cell {
        self.get(self.tiers - 1, self.rows - 1, self.cols - 1)
    }
}
