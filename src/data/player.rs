use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_PATH: &str = "data/players/catalog.json";

/// One catalog entry. Salary is the contest-scaled integer price (see
/// `ContestRules::salary_divisor`); projection is the expected fantasy
/// score. Catalog order is significant: the optimizer's "players
/// considered so far" dimension is defined over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub projection: f64,
    pub salary: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    players: Vec<Player>,
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Player>, io::Error> {
    let raw = fs::read_to_string(path)?;
    let parsed: CatalogFile = serde_json::from_str(&raw).map_err(io::Error::other)?;
    Ok(parsed.players)
}

pub fn save_catalog(path: impl AsRef<Path>, players: &[Player]) -> Result<(), io::Error> {
    let file = CatalogFile {
        players: players.to_vec(),
    };
    let payload = serde_json::to_string_pretty(&file).map_err(io::Error::other)?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, payload)
}
