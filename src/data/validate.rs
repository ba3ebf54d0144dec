//! Catalog validation: severity-tagged diagnostics over a player file.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::Path;

use crate::data::contest::ContestRules;
use crate::data::player::{load_catalog, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate a catalog file on disk.
pub fn validate_catalog_file(
    path: impl AsRef<Path>,
    rules: &ContestRules,
) -> Result<ValidationReport, io::Error> {
    let players = load_catalog(path)?;
    Ok(validate_catalog(&players, rules))
}

/// Validate an in-memory catalog against the contest rules.
///
/// Errors make the catalog unusable by the optimizer; warnings flag
/// entries that are legal but suspicious (a salary above the cap can
/// never be picked, duplicates usually mean a bad import).
pub fn validate_catalog(players: &[Player], rules: &ContestRules) -> ValidationReport {
    let mut report = ValidationReport::default();
    if players.is_empty() {
        report.push(ValidationSeverity::Error, "catalog", "no players");
        return report;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for (index, player) in players.iter().enumerate() {
        let context = if player.name.trim().is_empty() {
            format!("player #{index}")
        } else {
            player.name.clone()
        };

        if player.name.trim().is_empty() {
            report.push(ValidationSeverity::Error, &context, "blank name");
        } else if !seen.insert(player.name.as_str()) {
            report.push(ValidationSeverity::Warning, &context, "duplicate name");
        }

        if !player.projection.is_finite() {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("projection {} is not finite", player.projection),
            );
        } else if player.projection < 0.0 {
            report.push(
                ValidationSeverity::Error,
                &context,
                format!("projection {} is negative", player.projection),
            );
        } else if player.projection == 0.0 {
            report.push(ValidationSeverity::Info, &context, "zero projection");
        }

        if player.salary == 0 {
            report.push(ValidationSeverity::Warning, &context, "zero salary");
        }
        let inflated = (player.salary as f64 * rules.captain_multiplier).floor() as u32;
        if player.salary > rules.salary_cap {
            report.push(
                ValidationSeverity::Warning,
                &context,
                format!(
                    "salary {} exceeds the cap {}, never selectable",
                    player.salary, rules.salary_cap
                ),
            );
        } else if inflated > rules.salary_cap {
            report.push(
                ValidationSeverity::Info,
                &context,
                format!(
                    "inflated salary {} exceeds the cap {}, never captain",
                    inflated, rules.salary_cap
                ),
            );
        }
    }

    report
}
