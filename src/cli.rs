use std::env;

use crate::data::contest::{load_contest_rules_or_default, DEFAULT_CONTEST_PATH};
use crate::data::export::{write_lineup_csv, write_table_csv};
use crate::data::import::{import_catalog, DEFAULT_IMPORT_OUTPUT_PATH};
use crate::data::player::{load_catalog, DEFAULT_CATALOG_PATH};
use crate::data::validate::validate_catalog_file;
use crate::optimizer::{optimize_lineup_with_mode, SweepMode};
use crate::parallel::{run_sweep_batched, WorkerPool};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Optimize,
    Import,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("optimize") => Some(Command::Optimize),
        Some("import") => Some(Command::Import),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Optimize) => handle_optimize(args),
        Some(Command::Import) => handle_import(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: gaffer <optimize|import|validate|serve>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("GAFFER_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_optimize(args: &[String]) -> i32 {
    let positional = positional_args(&args[2..]);
    let catalog_path = positional.first().copied().unwrap_or(DEFAULT_CATALOG_PATH);

    let mut rules = match load_contest_rules_or_default(DEFAULT_CONTEST_PATH) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("failed to load contest rules: {err}");
            return 1;
        }
    };
    if let Some(&cap) = positional.get(1) {
        rules.salary_cap = parse_u32_arg(Some(cap), "salary_cap", rules.salary_cap);
    }
    if let Some(&roster) = positional.get(2) {
        rules.roster_size = parse_u32_arg(Some(roster), "roster_size", rules.roster_size);
    }

    let players = match load_catalog(catalog_path) {
        Ok(players) => players,
        Err(err) => {
            eprintln!("failed to load catalog '{catalog_path}': {err}");
            return 1;
        }
    };

    // --workers N runs the sweep batched on a private pool of N threads
    // and reports progress on stderr; otherwise --parallel selects the
    // global rayon pool and the default stays sequential.
    let workers = flag_value(args, "--workers")
        .map(|value| parse_u32_arg(Some(value), "workers", 0) as usize);
    let run = match workers {
        Some(workers) => {
            let pool = WorkerPool::with_workers(workers);
            run_sweep_batched(&players, &rules, &pool, |done, total| {
                eprintln!("swept {done}/{total} captain candidates");
            })
        }
        None => {
            let mode = if args.iter().any(|arg| arg == "--parallel") {
                SweepMode::Parallel
            } else {
                SweepMode::Sequential
            };
            optimize_lineup_with_mode(&players, &rules, mode)
        }
    };
    let solution = match run {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("optimization failed: {err}");
            return 1;
        }
    };

    if let Some(path) = flag_value(args, "--lineup-csv") {
        if let Err(err) = write_lineup_csv(path, &solution.result) {
            eprintln!("lineup export failed: {err}");
            return 1;
        }
    }
    if let Some(path) = flag_value(args, "--table-csv") {
        match &solution.table {
            Some(table) => {
                if let Err(err) = write_table_csv(path, table) {
                    eprintln!("table export failed: {err}");
                    return 1;
                }
            }
            None => eprintln!("no winning table to export (degenerate result)"),
        }
    }

    match serde_json::to_string_pretty(&solution.result) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize optimization result: {err}");
            1
        }
    }
}

fn handle_import(args: &[String]) -> i32 {
    let Some(source) = args.get(2) else {
        eprintln!("usage: gaffer import <players.csv|players.xlsx|players.json> [output.json]");
        return 2;
    };
    let output = args
        .get(3)
        .map(String::as_str)
        .unwrap_or(DEFAULT_IMPORT_OUTPUT_PATH);

    let rules = match load_contest_rules_or_default(DEFAULT_CONTEST_PATH) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("failed to load contest rules: {err}");
            return 1;
        }
    };

    match import_catalog(source, output, &rules) {
        Ok(report) => {
            println!(
                "import complete: rows={}, imported={}, skipped={}, output='{}'",
                report.total_rows,
                report.imported,
                report.skipped.len(),
                report.output_path
            );
            for skip in &report.skipped {
                eprintln!("- row {}: {}", skip.row_index, skip.reason);
            }
            0
        }
        Err(err) => {
            eprintln!("import failed: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_CATALOG_PATH);

    let rules = match load_contest_rules_or_default(DEFAULT_CONTEST_PATH) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("failed to load contest rules: {err}");
            return 1;
        }
    };

    match validate_catalog_file(path, &rules) {
        Ok(report) if !report.has_errors() => {
            println!("validation passed: {path}");
            for diag in &report.diagnostics {
                println!("- {diag}");
            }
            0
        }
        Ok(report) => {
            eprintln!("validation failed: {} issue(s)", report.diagnostics.len());
            for diag in &report.diagnostics {
                eprintln!("- {diag}");
            }
            1
        }
        Err(err) => {
            eprintln!("validation failed to read '{path}': {err}");
            1
        }
    }
}

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["--lineup-csv", "--table-csv", "--workers"];

/// Arguments that are neither flags nor values of value-taking flags.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg.starts_with("--") {
            skip_next = VALUE_FLAGS.contains(&arg.as_str());
            continue;
        }
        positional.push(arg.as_str());
    }
    positional
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}

fn parse_u32_arg(raw: Option<&str>, name: &str, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};

    #[test]
    fn known_subcommands_parse() {
        let args = |cmd: &str| vec!["gaffer".to_string(), cmd.to_string()];
        assert_eq!(parse_command(&args("optimize")), Some(Command::Optimize));
        assert_eq!(parse_command(&args("import")), Some(Command::Import));
        assert_eq!(parse_command(&args("validate")), Some(Command::Validate));
        assert_eq!(parse_command(&args("serve")), Some(Command::Serve));
    }

    #[test]
    fn unknown_subcommand_is_none() {
        let args = vec!["gaffer".to_string(), "lineup".to_string()];
        assert_eq!(parse_command(&args), None);
    }

    #[test]
    fn positional_args_skip_flags_and_their_values() {
        let args: Vec<String> = [
            "catalog.json",
            "--table-csv",
            "table.csv",
            "450",
            "--parallel",
            "5",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(
            super::positional_args(&args),
            vec!["catalog.json", "450", "5"]
        );
    }
}
