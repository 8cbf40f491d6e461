//! End-to-end tests driving the spendlog binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn interactive_add_then_exit_persists_the_expense() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .write_stdin("1\n12.50\nfood\n2024-01-05\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("Thank you for using spendlog!"));

    let content =
        std::fs::read_to_string(data_dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["amount"], serde_json::json!(12.5));
    assert_eq!(records[0]["category"], "Food");
    assert_eq!(records[0]["date"], "2024-01-05");
}

#[test]
fn report_total_reads_the_persisted_file() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .write_stdin("1\n12.50\nfood\n2024-01-05\n1\n7.00\nfood\n2024-02-01\n5\n")
        .assert()
        .success();

    spendlog(&data_dir)
        .args(["report", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spending: $19.50"))
        .stdout(predicate::str::contains("Number of transactions: 2"));

    spendlog(&data_dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01: $12.50"))
        .stdout(predicate::str::contains("2024-02: $7.00"));
}

#[test]
fn report_category_normalizes_the_query() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .write_stdin("1\n12.50\nfood\n2024-01-05\n5\n")
        .assert()
        .success();

    spendlog(&data_dir)
        .args(["report", "category", "FOOD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spending on FOOD: $12.50"));
}

#[test]
fn corrupt_expense_file_is_fatal_with_message() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("expenses.json"), "not json").unwrap();

    spendlog(&data_dir)
        .args(["report", "total"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}
