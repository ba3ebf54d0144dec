//! gaffer: a daily-fantasy lineup optimizer for captain-mode contests.
//!
//! The core is a multi-dimensional 0-1 knapsack: pick players under a
//! salary cap and a roster-size limit, maximizing projected score, with
//! one captain whose projection and salary are scaled by a multiplier.
//! Every player is tried as captain; the best-scoring table wins and is
//! walked backward to recover the lineup.

pub mod cli;
pub mod data;
pub mod optimizer;
pub mod parallel;
pub mod server;
