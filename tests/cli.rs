use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn init_creates_ledger_files() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert_eq!(
        fs::read_to_string(dir.path().join("expenses.csv")).unwrap(),
        "date,description,category,amount\n"
    );
    assert!(dir.path().join("categories.txt").exists());
    assert!(dir.path().join("currency.txt").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn init_twice_keeps_existing_files() {
    let dir = TempDir::new().unwrap();

    expense(&dir).arg("init").assert().success();
    fs::write(dir.path().join("currency.txt"), "EUR").unwrap();

    expense(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    assert_eq!(
        fs::read_to_string(dir.path().join("currency.txt")).unwrap(),
        "EUR"
    );
}

#[test]
fn config_reports_initialization() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    no"));

    expense(&dir).arg("init").assert().success();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    yes"));
}

#[test]
fn bad_date_format_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    expense(&dir)
        .args(["add", "3", "Coffee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}

#[test]
fn list_survives_invalid_utf8_row() {
    let dir = TempDir::new().unwrap();
    let mut contents = b"date,description,category,amount\n2024-01-02,".to_vec();
    contents.extend_from_slice(&[0xFF, 0xFE]);
    contents.extend_from_slice(b",Food,1.00\n2024-01-03,Bus,Transport,2.50\n");
    fs::write(dir.path().join("expenses.csv"), contents).unwrap();

    expense(&dir)
        .args(["add", "4", "Tea", "-c", "Food"])
        .assert()
        .success();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus"))
        .stdout(predicate::str::contains("Tea"))
        .stderr(predicate::str::contains("Skipped line 2"));
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["currency", "set", "USD"])
        .assert()
        .success();

    expense(&dir)
        .args(["add", "12.5", "Lunch", "-c", "Food", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("12.50 USD"))
        .stdout(predicate::str::contains("Total Expenses: 12.50 USD"));

    let contents = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
    assert!(contents.ends_with("2024-03-01,Lunch,Food,12.50\n"));
}

#[test]
fn add_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-5", "Refund", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));

    expense(&dir)
        .args(["add", "abc", "Refund", "-c", "Food"])
        .assert()
        .failure();

    let contents = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
    assert_eq!(contents, "date,description,category,amount\n");
}

#[test]
fn add_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "5", "Boat", "-c", "Yachts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Yachts'"));
}

#[test]
fn add_defaults_category_and_date() {
    let dir = TempDir::new().unwrap();

    expense(&dir).args(["add", "3", "Coffee"]).assert().success();

    let contents = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
    let row = contents.lines().nth(1).unwrap();
    assert!(row.ends_with(",Coffee,Food,3.00"));
    assert!(!row.starts_with(','));
}

#[test]
fn category_add_and_duplicate() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["category", "add", "Health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category 'Health' added!"));

    expense(&dir)
        .args(["category", "add", "Health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category 'Health' already exists!"));

    expense(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout("Entertainment\nFood\nHealth\nShopping\nTransport\nUtilities\n");
}

#[test]
fn summary_groups_by_category() {
    let dir = TempDir::new().unwrap();

    for (amount, description, category) in [
        ("30", "Groceries", "Food"),
        ("20", "Snacks", "Food"),
        ("50", "Train", "Transport"),
    ] {
        expense(&dir)
            .args(["add", amount, description, "-c", category])
            .assert()
            .success();
    }

    let output = expense(&dir).arg("summary").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Total: 100.00"));
    assert!(stdout.contains("50.00 (50.0%)"));
    assert!(stdout.find("Food").unwrap() < stdout.find("Transport").unwrap());
}

#[test]
fn summary_of_empty_ledger() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn list_skips_malformed_rows() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expenses.csv"),
        "date,description,category,amount\n2024-01-01,Tea,Food,oops\n2024-01-02,Bus,Transport,2.50\n",
    )
    .unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus"))
        .stdout(predicate::str::contains("Tea").not())
        .stderr(predicate::str::contains("Skipped line 2"));
}

#[test]
fn currency_show_and_history() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["currency", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency: Not set"));

    expense(&dir).args(["currency", "set", "EUR"]).assert().success();

    expense(&dir)
        .args(["currency", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency: EUR"));

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("SET Currency (EUR)"));
}
