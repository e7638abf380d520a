mod common;

use std::fs;

use assert_cmd::Command;
use common::snapshot_file;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "expense_core_cli";

/// Runs the CLI with its config home pointed at an isolated directory.
fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_CORE_HOME", home.path());
    cmd
}

#[test]
fn totals_prints_aggregates() {
    let (dir, path) = snapshot_file();
    cli(&dir)
        .arg("totals")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("\"totalSpent\": 160.0").and(contains("\"totalOutstanding\": 50.0")))
        .stdout(contains("\"2024-01-01\": 160.0"));
}

#[test]
fn summary_formats_with_configured_currency() {
    let (dir, path) = snapshot_file();
    cli(&dir)
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Total spent: ₹160.00"))
        .stdout(contains("Total to be received: ₹50.00"))
        .stdout(contains("Pending: A owes ₹50.00 for Food on 2024-01-01 (Dinner)"));
}

#[test]
fn toggle_rewrites_snapshot_and_prints_request() {
    let (dir, path) = snapshot_file();
    cli(&dir)
        .args(["toggle", path.to_str().unwrap(), "e1", "0"])
        .assert()
        .success()
        .stdout(contains("\"method\": \"PUT\""))
        .stdout(contains("expenses/update-status"))
        .stdout(contains("\"hasPaid\": true"));

    let saved = fs::read_to_string(&path).unwrap();
    let records = expense_core::utils::persistence::parse_snapshot(&saved).unwrap();
    assert!(records[0].split_details[0].has_paid);
}

#[test]
fn toggle_leaves_snapshot_untouched_when_config_is_unreadable() {
    let (dir, path) = snapshot_file();
    let original = fs::read_to_string(&path).unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "plain file").unwrap();

    Command::cargo_bin(BIN_NAME)
        .expect("binary exists")
        .env("EXPENSE_CORE_HOME", blocker.join("home"))
        .args(["toggle", path.to_str().unwrap(), "e1", "0"])
        .assert()
        .failure()
        .stderr(contains("Error:"));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn analyze_prints_monthly_totals_and_extremes() {
    let (dir, path) = snapshot_file();
    cli(&dir)
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("\"monthlyWise\"").and(contains("\"2024-01\": 160.0")))
        .stdout(contains("\"category\": \"Food\"").and(contains("\"category\": \"Travel\"")));
}

#[test]
fn version_reports_package_version() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(contains(format!("expense_core {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn toggle_unknown_expense_fails() {
    let (dir, path) = snapshot_file();
    cli(&dir)
        .args(["toggle", path.to_str().unwrap(), "missing", "0"])
        .assert()
        .failure()
        .stderr(contains("Expense not found: missing"));
}

#[test]
fn report_writes_csv_sheets() {
    let (dir, path) = snapshot_file();
    let out = dir.path().join("out");
    cli(&dir)
        .arg("report")
        .arg(&path)
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("CategoryWise.csv"));

    let categories = fs::read_to_string(out.join("CategoryWise.csv")).unwrap();
    assert_eq!(categories, "Category,AmountSpent\nFood,100\nTravel,60\n");
    assert!(out.join("expenses.csv").exists());
}

#[test]
fn draft_builds_post_body() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["draft", "250", "Shopping", "Shoes", "Asha, Ravi"])
        .assert()
        .success()
        .stdout(contains("\"method\": \"POST\""))
        .stdout(contains("\"category\": \"Shopping\""))
        .stdout(contains("\"name\": \"Ravi\""));
}

#[test]
fn missing_command_prints_usage() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .assert()
        .failure()
        .stderr(contains("Usage: expense_core_cli"));
}
