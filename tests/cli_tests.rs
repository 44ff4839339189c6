//! Integration tests for the `expense` binary
//!
//! Each test runs the binary against its own temporary data directory and
//! checks both the printed output and the files left on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd.env_remove("EXPENSE_LEDGER_DATA_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn ledger_json(dir: &TempDir) -> serde_json::Value {
    let text = fs::read_to_string(dir.path().join("expense_data.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn income_and_expense_update_the_balance() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["income", "5000", "Salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income: ₹5,000.00 (Salary)"));

    expense(&dir)
        .args(["expense", "1200", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wallet balance: ₹3,800.00"));

    let json = ledger_json(&dir);
    assert_eq!(json["balance"].as_f64(), Some(3800.0));
    assert_eq!(json["transactions"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["transactions"][1]["type"], "expense");

    expense(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹3,800.00"));
}

#[test]
fn lending_and_repayment_flow() {
    let dir = TempDir::new().unwrap();

    expense(&dir).args(["lend", "Amit", "500"]).assert().success();

    expense(&dir)
        .arg("people")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amit: ₹500.00"));

    expense(&dir)
        .args(["repay", "amit", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amit has fully paid you back!"));

    let json = ledger_json(&dir);
    assert_eq!(json["balance"].as_f64(), Some(0.0));
    assert_eq!(json["assets"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["transactions"][1]["category"], "Repayment from Amit");
}

#[test]
fn over_return_fails_without_changes() {
    let dir = TempDir::new().unwrap();

    expense(&dir).args(["borrow", "Priya", "3000"]).assert().success();

    expense(&dir)
        .args(["return", "Priya", "4000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds"));

    let json = ledger_json(&dir);
    assert_eq!(json["balance"].as_f64(), Some(3000.0));
    assert_eq!(json["liabilities"][0]["amount"].as_f64(), Some(3000.0));
}

#[test]
fn unknown_person_is_reported() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["repay", "Nobody", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nobody is not in your lending list"));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["income", "lots", "Gift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number"));

    assert!(!dir.path().join("expense_data.json").exists());
}

#[test]
fn export_writes_report_file() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to export."));
    assert!(!dir.path().join("expense_report.csv").exists());

    expense(&dir).args(["income", "100", "Gift"]).assert().success();
    expense(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let csv = fs::read_to_string(dir.path().join("expense_report.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Date,Type,Category,Amount"));
    assert!(lines.next().unwrap().ends_with(",Income,Gift,100.00"));
}

#[test]
fn reset_with_yes_clears_everything() {
    let dir = TempDir::new().unwrap();

    expense(&dir).args(["income", "100", "Gift"]).assert().success();
    expense(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data has been reset to 0."));

    let json = ledger_json(&dir);
    assert_eq!(json["balance"].as_f64(), Some(0.0));
    assert_eq!(json["transactions"].as_array().map(Vec::len), Some(0));
}

#[test]
fn reset_without_confirmation_keeps_data() {
    let dir = TempDir::new().unwrap();

    expense(&dir).args(["income", "100", "Gift"]).assert().success();
    expense(&dir)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset cancelled."));

    assert_eq!(ledger_json(&dir)["balance"].as_f64(), Some(100.0));
}

#[test]
fn menu_runs_from_stdin() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .write_stdin("1\n5000\nSalary\n9\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("NET WORTH"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert_eq!(ledger_json(&dir)["balance"].as_f64(), Some(5000.0));
}

#[test]
fn legacy_debts_field_is_migrated() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expense_data.json"),
        r#"{"balance": 0, "transactions": [], "debts": [{"name": "Ravi", "amount": 250}], "liabilities": []}"#,
    )
    .unwrap();

    expense(&dir)
        .arg("net-worth")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹250.00"));

    expense(&dir).args(["income", "1", "Tip"]).assert().success();
    let json = ledger_json(&dir);
    assert!(json.get("debts").is_none());
    assert_eq!(json["assets"][0]["name"], "Ravi");
}

#[test]
fn config_shows_data_directory() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense_data.json"))
        .stdout(predicate::str::contains("Currency symbol: ₹"));
}

#[test]
fn config_changes_are_saved_and_used() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["config", "--currency", "$", "--date-format", "%d/%m/%Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."))
        .stdout(predicate::str::contains("Currency symbol: $"));

    let saved = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(saved.contains("%d/%m/%Y"));

    expense(&dir)
        .args(["income", "1250", "Salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income: $1,250.00 (Salary)"));
}

#[test]
fn config_rejects_bad_date_format() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["config", "--date-format", "%Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date format"));

    assert!(!dir.path().join("config.json").exists());
}
