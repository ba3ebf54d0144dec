//! Catalog import: normalize site exports (CSV, XLSX, JSON) into the
//! canonical player catalog.
//!
//! Raw salaries are divided by the contest's salary divisor so the DP's
//! salary axis stays small. Rows that cannot be used (blank names,
//! negative or non-numeric figures) are skipped and reported, never
//! silently clamped.

use std::fmt;
use std::fs;
use std::path::Path;

use calamine::Reader;
use serde::{Deserialize, Serialize};

use crate::data::contest::ContestRules;
use crate::data::player::{save_catalog, Player};

pub const DEFAULT_IMPORT_OUTPUT_PATH: &str = "data/players/catalog.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    pub row_index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    pub source_path: String,
    pub output_path: String,
    pub total_rows: usize,
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug)]
pub enum ImportError {
    Read(std::io::Error),
    Csv(csv::Error),
    Workbook(calamine::Error),
    Parse(serde_json::Error),
    Write(std::io::Error),
    UnsupportedFormat(String),
    MissingColumns(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read import file: {err}"),
            Self::Csv(err) => write!(f, "failed to parse CSV: {err}"),
            Self::Workbook(err) => write!(f, "failed to open workbook: {err}"),
            Self::Parse(err) => write!(f, "failed to parse JSON: {err}"),
            Self::Write(err) => write!(f, "failed to write catalog: {err}"),
            Self::UnsupportedFormat(ext) => {
                write!(
                    f,
                    "unsupported import format '{ext}' (expected csv, xlsx, xls, or json)"
                )
            }
            Self::MissingColumns(sheet) => {
                write!(f, "sheet '{sheet}' has no name/projection/salary header row")
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// A source row before scaling and validation.
#[derive(Debug, Clone, Deserialize)]
struct RawRow {
    name: String,
    projection: f64,
    salary: f64,
}

/// Import `source` and write the canonical catalog to `output`.
pub fn import_catalog(
    source: impl AsRef<Path>,
    output: impl AsRef<Path>,
    rules: &ContestRules,
) -> Result<ImportReport, ImportError> {
    let source = source.as_ref();
    let extension = source
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let rows = match extension.as_str() {
        "csv" => read_csv_rows(source)?,
        "xlsx" | "xls" => read_xlsx_rows(source)?,
        "json" => read_json_rows(source)?,
        other => return Err(ImportError::UnsupportedFormat(other.to_string())),
    };

    let total_rows = rows.len();
    let mut players = Vec::with_capacity(total_rows);
    let mut skipped = Vec::new();
    for (row_index, row) in rows.into_iter().enumerate() {
        match normalize_row(&row, rules) {
            Ok(player) => players.push(player),
            Err(reason) => skipped.push(SkippedRow { row_index, reason }),
        }
    }

    save_catalog(output.as_ref(), &players).map_err(ImportError::Write)?;

    Ok(ImportReport {
        source_path: source.display().to_string(),
        output_path: output.as_ref().display().to_string(),
        total_rows,
        imported: players.len(),
        skipped,
    })
}

fn normalize_row(row: &RawRow, rules: &ContestRules) -> Result<Player, String> {
    let name = row.name.trim();
    if name.is_empty() {
        return Err("blank player name".to_string());
    }
    if !row.projection.is_finite() || row.projection < 0.0 {
        return Err(format!(
            "projection {} is not a non-negative number",
            row.projection
        ));
    }
    if !row.salary.is_finite() || row.salary < 0.0 {
        return Err(format!("salary {} is not a non-negative number", row.salary));
    }
    let salary = (row.salary / rules.salary_divisor as f64).round() as u32;
    Ok(Player {
        name: name.to_string(),
        projection: row.projection,
        salary,
    })
}

fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(ImportError::Csv)?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<RawRow>() {
        rows.push(record.map_err(ImportError::Csv)?);
    }
    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct JsonExport {
    players: Vec<RawRow>,
}

fn read_json_rows(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    let raw = fs::read_to_string(path).map_err(ImportError::Read)?;
    // Accept either a bare array or a {"players": [...]} wrapper.
    if let Ok(rows) = serde_json::from_str::<Vec<RawRow>>(&raw) {
        return Ok(rows);
    }
    let parsed: JsonExport = serde_json::from_str(&raw).map_err(ImportError::Parse)?;
    Ok(parsed.players)
}

fn read_xlsx_rows(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    let mut workbook = calamine::open_workbook_auto(path).map_err(ImportError::Workbook)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::MissingColumns("<none>".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(ImportError::Workbook)?;

    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .ok_or_else(|| ImportError::MissingColumns(sheet_name.clone()))?;
    let columns =
        header_columns(header).ok_or_else(|| ImportError::MissingColumns(sheet_name.clone()))?;

    let mut rows = Vec::new();
    for row in rows_iter {
        let name = row.get(columns.name).map(cell_str).unwrap_or_default();
        if name.trim().is_empty() {
            continue;
        }
        let projection = row.get(columns.projection).and_then(cell_f64);
        let salary = row.get(columns.salary).and_then(cell_f64);
        rows.push(RawRow {
            name,
            projection: projection.unwrap_or(f64::NAN),
            salary: salary.unwrap_or(f64::NAN),
        });
    }
    Ok(rows)
}

struct HeaderColumns {
    name: usize,
    projection: usize,
    salary: usize,
}

fn header_columns(header: &[calamine::Data]) -> Option<HeaderColumns> {
    let mut name = None;
    let mut projection = None;
    let mut salary = None;
    for (index, cell) in header.iter().enumerate() {
        match cell_str(cell).trim().to_ascii_lowercase().as_str() {
            "name" | "player" => name = Some(index),
            "projection" | "proj" | "fppg" => projection = Some(index),
            "salary" | "price" => salary = Some(index),
            _ => {}
        }
    }
    Some(HeaderColumns {
        name: name?,
        projection: projection?,
        salary: salary?,
    })
}

fn cell_str(data: &calamine::Data) -> String {
    match data {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Float(f) => format!("{}", f),
        calamine::Data::Int(i) => format!("{}", i),
        calamine::Data::Bool(b) => format!("{}", b),
        _ => format!("{:?}", data),
    }
}

fn cell_f64(data: &calamine::Data) -> Option<f64> {
    match data {
        calamine::Data::Float(f) => Some(*f),
        calamine::Data::Int(i) => Some(*i as f64),
        calamine::Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
