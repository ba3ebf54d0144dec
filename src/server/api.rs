//! JSON payload builders for the HTTP surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::contest::ContestRules;
use crate::data::player::{load_catalog, Player, DEFAULT_CATALOG_PATH};
use crate::optimizer::{optimize_lineup_with_mode, LineupResult, OptimizeError, SweepMode};
use crate::parallel::WorkerPool;

#[derive(Debug, Clone, Deserialize)]
pub struct OptimizeRequest {
    /// Inline catalog; takes precedence over `catalog`.
    pub players: Option<Vec<Player>>,
    /// Path to a canonical catalog file. Defaults to the import output.
    pub catalog: Option<String>,
    pub salary_cap: Option<u32>,
    pub roster_size: Option<u32>,
    pub captain_multiplier: Option<f64>,
    /// Evaluate captain candidates across the rayon pool.
    pub parallel: Option<bool>,
    /// Thread budget for this request; falls back to `GAFFER_WORKERS`,
    /// then to the global pool.
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizeResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub rules: ContestRules,
    pub result: LineupResult,
}

#[derive(Debug)]
pub enum OptimizePayloadError {
    Parse(serde_json::Error),
    Validation(String),
    Catalog(std::io::Error),
    Optimize(OptimizeError),
    Serialize(serde_json::Error),
}

impl fmt::Display for OptimizePayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Catalog(err) => write!(f, "catalog unavailable: {err}"),
            Self::Optimize(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for OptimizePayloadError {}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "gaffer-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Parse `?catalog=path` from the request path.
fn parse_catalog_query(path: &str) -> Option<String> {
    let query = path.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        pair.strip_prefix("catalog=").map(str::to_string)
    })
}

pub fn players_payload(path: &str) -> Result<String, serde_json::Error> {
    let catalog_path =
        parse_catalog_query(path).unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
    let players = load_catalog(&catalog_path).unwrap_or_default();
    serde_json::to_string_pretty(&serde_json::json!({
        "catalog": catalog_path,
        "players": players
    }))
}

pub fn optimize_payload(body: &str) -> Result<String, OptimizePayloadError> {
    let request: OptimizeRequest =
        serde_json::from_str(body).map_err(OptimizePayloadError::Parse)?;

    let players = match (&request.players, &request.catalog) {
        (Some(players), _) => players.clone(),
        (None, Some(path)) => load_catalog(path).map_err(OptimizePayloadError::Catalog)?,
        (None, None) => {
            load_catalog(DEFAULT_CATALOG_PATH).map_err(OptimizePayloadError::Catalog)?
        }
    };

    let defaults = ContestRules::default();
    let rules = ContestRules {
        salary_cap: request.salary_cap.unwrap_or(defaults.salary_cap),
        roster_size: request.roster_size.unwrap_or(defaults.roster_size),
        captain_multiplier: request
            .captain_multiplier
            .unwrap_or(defaults.captain_multiplier),
        salary_divisor: defaults.salary_divisor,
    };
    if !rules.captain_multiplier.is_finite() || rules.captain_multiplier < 1.0 {
        return Err(OptimizePayloadError::Validation(format!(
            "captain_multiplier {} must be a finite number >= 1.0",
            rules.captain_multiplier
        )));
    }

    let mode = if request.parallel.unwrap_or(false) {
        SweepMode::Parallel
    } else {
        SweepMode::Sequential
    };
    let pool = match request.workers {
        Some(workers) => WorkerPool::with_workers(workers),
        None => WorkerPool::from_env(),
    };
    let solution = pool
        .install(|| optimize_lineup_with_mode(&players, &rules, mode))
        .map_err(OptimizePayloadError::Optimize)?;

    let response = OptimizeResponse {
        status: "ok",
        engine: "captain_sweep_v1",
        rules,
        result: solution.result,
    };
    serde_json::to_string_pretty(&response).map_err(OptimizePayloadError::Serialize)
}
