//! Contest rules: the two budgets, the captain multiplier, and the
//! import-time salary divisor.
//!
//! Defaults follow single-game "showdown" contests: a $50,000 cap with
//! prices in multiples of $100, stored scaled down by 100 so the DP's
//! salary axis stays small (cap 500), six roster slots, captain at 1.5x.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTEST_PATH: &str = "data/contest.yaml";

pub const DEFAULT_SALARY_CAP: u32 = 500;
pub const DEFAULT_ROSTER_SIZE: u32 = 6;
pub const DEFAULT_CAPTAIN_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_SALARY_DIVISOR: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestRules {
    /// Maximum total scaled salary (the knapsack weight budget).
    pub salary_cap: u32,
    /// Maximum number of players, captain included (the count budget).
    pub roster_size: u32,
    /// Captain projection and salary scale factor.
    #[serde(default = "default_captain_multiplier")]
    pub captain_multiplier: f64,
    /// Divisor applied to raw site salaries at import time.
    #[serde(default = "default_salary_divisor")]
    pub salary_divisor: u32,
}

fn default_captain_multiplier() -> f64 {
    DEFAULT_CAPTAIN_MULTIPLIER
}

fn default_salary_divisor() -> u32 {
    DEFAULT_SALARY_DIVISOR
}

impl Default for ContestRules {
    fn default() -> Self {
        Self {
            salary_cap: DEFAULT_SALARY_CAP,
            roster_size: DEFAULT_ROSTER_SIZE,
            captain_multiplier: DEFAULT_CAPTAIN_MULTIPLIER,
            salary_divisor: DEFAULT_SALARY_DIVISOR,
        }
    }
}

/// Load rules from a YAML file.
pub fn load_contest_rules(
    path: impl AsRef<Path>,
) -> Result<ContestRules, Box<dyn std::error::Error + Send + Sync>> {
    let raw = fs::read_to_string(path)?;
    let parsed: ContestRules = serde_yaml::from_str(&raw)?;
    Ok(parsed)
}

/// Rules from `path` when it exists, defaults otherwise. Parse failures
/// in an existing file are still reported.
pub fn load_contest_rules_or_default(
    path: impl AsRef<Path>,
) -> Result<ContestRules, Box<dyn std::error::Error + Send + Sync>> {
    if path.as_ref().is_file() {
        load_contest_rules(path)
    } else {
        Ok(ContestRules::default())
    }
}
