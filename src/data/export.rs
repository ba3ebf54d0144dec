//! Result export: the winning lineup as CSV, and the winning DP table
//! as a tier-by-tier CSV dump for inspection.

use std::fmt;
use std::path::Path;

use crate::optimizer::table::DpTable;
use crate::optimizer::LineupResult;

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Write(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "failed to write CSV: {err}"),
            Self::Write(err) => write!(f, "failed to write export file: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Write the lineup as CSV: one row per slot (CPT for the captain,
/// FLEX for the rest), then summary rows. Stamped with the UTC date.
pub fn write_lineup_csv(path: impl AsRef<Path>, result: &LineupResult) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;

    writer.write_record(["slot", "player"])?;
    let captain_name = result.captain.as_ref().map(|captain| captain.name.as_str());
    // There is exactly one captain slot; a namesake in the lineup must
    // not claim a second one.
    let mut captain_marked = false;
    for name in &result.lineup {
        let slot = if !captain_marked && captain_name == Some(name.as_str()) {
            captain_marked = true;
            "CPT"
        } else {
            "FLEX"
        };
        writer.write_record([slot, name])?;
    }
    writer.write_record::<_, &str>([])?;
    writer.write_record(["top_score", &format!("{}", result.top_score)])?;
    writer.write_record(["salary_spent", &format!("{}", result.salary_spent)])?;
    writer.write_record([
        "generated",
        &chrono::Utc::now().format("%Y-%m-%d").to_string(),
    ])?;
    writer.flush().map_err(ExportError::Write)?;
    Ok(())
}

/// Dump every tier of the table as a matrix of `[value, count]` cells,
/// one block per tier: a header row with the tier index and salary
/// columns, then one row per catalog prefix length.
pub fn write_table_csv(path: impl AsRef<Path>, table: &DpTable) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;

    for tier in 0..table.tiers() {
        let mut header = vec![format!("tier {tier}")];
        header.extend((0..table.cols()).map(|col| col.to_string()));
        writer.write_record(&header)?;

        for row in 0..table.rows() {
            let mut record = vec![row.to_string()];
            for col in 0..table.cols() {
                let cell = table.get(tier, row, col);
                record.push(format!("[{}, {}]", cell.best_value, cell.best_count));
            }
            writer.write_record(&record)?;
        }
        writer.write_record::<_, &str>([])?;
    }
    writer.flush().map_err(ExportError::Write)?;
    Ok(())
}
