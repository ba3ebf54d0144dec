use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_gaffer")
}

fn unique_temp_path(name: &str, ext: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("gaffer-{name}-{stamp}.{ext}"))
}

fn write_catalog(name: &str) -> PathBuf {
    let path = unique_temp_path(name, "json");
    fs::write(
        &path,
        r#"{"players":[
            {"name":"Diallo","projection":20.6,"salary":74},
            {"name":"Ajorque","projection":23.4,"salary":80},
            {"name":"Mitrovic","projection":11.0,"salary":28}
        ]}"#,
    )
    .expect("fixture should be written");
    path
}

#[test]
fn optimize_command_emits_lineup_json() {
    let catalog = write_catalog("optimize");
    let output = Command::new(bin())
        .args([
            "optimize",
            catalog.to_string_lossy().as_ref(),
            "200",
            "2",
        ])
        .output()
        .expect("optimize should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("optimize should emit json");
    assert!(payload["top_score"].as_f64().unwrap_or(0.0) > 0.0);
    assert!(payload["captain"]["name"].as_str().is_some());
    assert!(payload["lineup"].as_array().is_some());

    let _ = fs::remove_file(catalog);
}

#[test]
fn optimize_command_exports_table_csv_when_asked() {
    let catalog = write_catalog("optimize-table");
    let table_path = unique_temp_path("table", "csv");
    let output = Command::new(bin())
        .args([
            "optimize",
            catalog.to_string_lossy().as_ref(),
            "200",
            "2",
            "--table-csv",
            table_path.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("optimize should run");

    assert_eq!(output.status.code(), Some(0));
    let contents = fs::read_to_string(&table_path).expect("table csv should exist");
    assert!(contents.contains("tier 0"));

    let _ = fs::remove_file(catalog);
    let _ = fs::remove_file(table_path);
}

#[test]
fn optimize_command_with_workers_reports_progress() {
    let catalog = write_catalog("optimize-workers");
    let output = Command::new(bin())
        .args([
            "optimize",
            catalog.to_string_lossy().as_ref(),
            "200",
            "2",
            "--workers",
            "2",
        ])
        .output()
        .expect("optimize should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("optimize should emit json");
    assert!(payload["top_score"].as_f64().unwrap_or(0.0) > 0.0);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("swept 3/3 captain candidates"));

    let _ = fs::remove_file(catalog);
}

#[test]
fn missing_subcommand_prints_usage() {
    let output = Command::new(bin()).output().expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: gaffer"));
}

#[test]
fn import_command_returns_usage_without_path() {
    let output = Command::new(bin())
        .arg("import")
        .output()
        .expect("import should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: gaffer import"));
}

#[test]
fn import_command_writes_the_canonical_catalog() {
    let source = unique_temp_path("import", "csv");
    let output_path = unique_temp_path("imported", "json");
    fs::write(
        &source,
        "name,projection,salary\nDiallo,20.6,7400\nAjorque,23.4,8000\n",
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args([
            "import",
            source.to_string_lossy().as_ref(),
            output_path.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("import should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("import complete: rows=2, imported=2"));

    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).expect("catalog"))
            .expect("catalog should be json");
    assert_eq!(catalog["players"].as_array().map(Vec::len), Some(2));

    let _ = fs::remove_file(source);
    let _ = fs::remove_file(output_path);
}

#[test]
fn validate_command_returns_non_zero_on_invalid_data() {
    let path = unique_temp_path("invalid-catalog", "json");
    fs::write(
        &path,
        r#"{"players":[{"name":"","projection":-1.0,"salary":10}]}"#,
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_passes_a_clean_catalog() {
    let path = write_catalog("valid");
    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed"));

    let _ = fs::remove_file(path);
}
