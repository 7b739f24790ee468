use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("EXPENSE_LEDGER_DATA_DIR", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_writes_header_only_file() {
    let home = TempDir::new().unwrap();

    ledger(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ledger"));

    let contents =
        std::fs::read_to_string(home.path().join("data").join("transactions.csv")).unwrap();
    assert_eq!(contents, "Date,Category,Description,Amount,Type\n");
    assert!(home.path().join("config.json").exists());
}

#[test]
fn add_then_summary() {
    let home = TempDir::new().unwrap();
    ledger(&home).arg("init").assert().success();

    ledger(&home)
        .args(["add", "expense", "200", "-c", "food", "-d", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense of ₹200.00 in 🍔 Food"));
    ledger(&home)
        .args(["add", "income", "5000", "-c", "Salary"])
        .assert()
        .success();

    ledger(&home)
        .args(["summary", "-p", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹4,800.00"))
        .stdout(predicate::str::contains("96.0%"));
}

#[test]
fn list_filters_by_type() {
    let home = TempDir::new().unwrap();
    ledger(&home)
        .args(["add", "expense", "12.50", "-c", "food", "-d", "coffee"])
        .assert()
        .success();
    ledger(&home)
        .args(["add", "income", "100", "-c", "gifts", "-d", "birthday"])
        .assert()
        .success();

    ledger(&home)
        .args(["list", "-p", "all", "-t", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("-₹12.50"))
        .stdout(predicate::str::contains("birthday").not())
        .stdout(predicate::str::contains("Showing 1 transaction(s)"));
}

#[test]
fn old_transaction_excluded_from_last_week() {
    let home = TempDir::new().unwrap();
    ledger(&home)
        .args(["add", "expense", "40", "-c", "food", "-d", "ancient", "--date", "2000-01-01"])
        .assert()
        .success();

    ledger(&home)
        .args(["list", "-p", "7d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
    ledger(&home)
        .args(["list", "-p", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ancient"));
}

#[test]
fn rejects_non_positive_amount() {
    let home = TempDir::new().unwrap();

    ledger(&home)
        .args(["add", "expense", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn init_refuses_to_reset_without_force() {
    let home = TempDir::new().unwrap();
    ledger(&home).args(["add", "income", "10"]).assert().success();

    ledger(&home)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    ledger(&home).args(["init", "--force"]).assert().success();
    ledger(&home)
        .args(["list", "-p", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn malformed_ledger_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join("data")).unwrap();
    std::fs::write(
        home.path().join("data").join("transactions.csv"),
        "When,What\n2024-01-01,x\n",
    )
    .unwrap();

    ledger(&home)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed ledger"));
}

#[test]
fn export_writes_json() {
    let home = TempDir::new().unwrap();
    ledger(&home)
        .args(["add", "expense", "200", "-c", "food"])
        .assert()
        .success();

    ledger(&home)
        .args(["export", "-p", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("\"🍔 Food\""));
}

#[test]
fn categories_lists_registry() {
    let home = TempDir::new().unwrap();

    ledger(&home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("🚌 Transportation"))
        .stdout(predicate::str::contains("No categories used yet."));
}
