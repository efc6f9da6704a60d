/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file into `dir` under `name` and return its path.
fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Config that removes all waiting from the search session.
const INSTANT_SEARCH: &str = r#"
search_debounce_ms: 0
range_debounce_ms: 0
latency_ms: 0
"#;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Profile defaults
// ============================================================================

#[test]
fn test_config_profile_fills_analyze() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "rigcheck.config.yml",
        r#"
format: json
profile:
  ram: 16
  cpu: high
  storage: ssd
  usage: video-editing
"#,
    );

    let output = cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .arg("analyze")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["score"], 71);
    assert_eq!(json["tier"], "high-end");
    assert_eq!(json["profile"]["usage"], "videoediting");
}

#[test]
fn test_cli_flags_override_config_profile() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "custom.yml",
        r#"
profile:
  ram: 32
  cpu: high
  storage: ssd
  usage: gaming
"#,
    );

    let output = cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(["analyze", "--storage", "hdd", "--format", "json", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["profile"]["storage"], "hdd");
    assert_eq!(json["profile"]["ram_gb"], 32);
    // (35 + 35 + 8) * 0.95 = 74.1
    assert_eq!(json["score"], 74);
    assert_eq!(json["tier"], "low-end");
}

#[test]
fn test_partial_config_profile_still_reports_missing_fields() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "rigcheck.config.yml",
        "profile:\n  ram: 8\n  cpu: medium\n",
    );

    cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(["analyze", "--usage", "coding"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing: storage"));
}

// ============================================================================
// Format merging
// ============================================================================

#[test]
fn test_config_format_used_and_cli_overrides() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "rigcheck.config.yml", "format: markdown\n");

    let args = [
        "analyze", "--ram", "8", "--cpu", "low", "--storage", "ssd", "--usage", "browsing",
    ];

    cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# PC Performance Report"));

    let output = cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["tier"], "low-end");
}

// ============================================================================
// Search settings
// ============================================================================

#[test]
fn test_config_platforms_sort_and_seed() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "rigcheck.config.yml",
        &format!(
            "{}\nformat: json\nplatforms:\n  - myntra\nsort: discount\nseed: 5\n",
            INSTANT_SEARCH
        ),
    );

    let output = cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(["search", "saree"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["generated"], 5);
    assert_eq!(json["criteria"]["sort"], "discount");

    let listings = json["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 5);
    assert!(listings.iter().all(|l| l["platform"] == "myntra"));
    let discounts: Vec<u64> = listings
        .iter()
        .map(|l| l["discount_percent"].as_u64().unwrap())
        .collect();
    assert!(discounts.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_cli_seed_and_sort_override_config() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "rigcheck.config.yml",
        &format!("{}\nsort: discount\nseed: 5\n", INSTANT_SEARCH),
    );

    let output = cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(["search", "saree", "--sort", "price-low", "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["criteria"]["sort"], "price-low");
    let prices: Vec<u64> = json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["price"].as_u64().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

// ============================================================================
// Validation and warnings
// ============================================================================

#[test]
fn test_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "rigcheck.config.yml",
        "format: json\ntheme: dark\n",
    );

    cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(FULL_ARGS)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'theme' will be ignored",
        ));
}

#[test]
fn test_invalid_config_value_is_application_error() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "rigcheck.config.yml", "sort: cheapest-first\n");

    cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(FULL_ARGS)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_out_of_range_delay_is_application_error() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "rigcheck.config.yml", "latency_ms: 999999\n");

    cargo_bin_cmd!("rigcheck")
        .current_dir(dir.path())
        .args(["search", "tv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("latency_ms must be at most"));
}

const FULL_ARGS: [&str; 9] = [
    "analyze", "--ram", "16", "--cpu", "medium", "--storage", "ssd", "--usage", "coding",
];
