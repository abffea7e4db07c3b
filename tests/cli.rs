//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! `FINTRACK_DATA_DIR`, so nothing touches the user's real ledger.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_init_creates_config_and_data_dir() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized fintrack"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").exists());
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir).arg("init").assert().success();
    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledger.csv"))
        .stdout(predicate::str::contains("Initialized:     yes"));
}

#[test]
fn test_init_demo_seeds_ledger() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["init", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 7 demo entries."));

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("7 transactions"))
        .stdout(predicate::str::contains("Monthly salary"));
}

#[test]
fn test_dashboard_october_demo_numbers() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).args(["init", "--demo"]).assert().success();

    // October 2023 demo data: 5000 in, 2650 out.
    fintrack(&dir)
        .args(["dashboard", "--year", "2023", "--month", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard: October 2023"))
        .stdout(predicate::str::contains("Balance:      $2,350.00"))
        .stdout(predicate::str::contains("Inflow:       $5,000.00"))
        .stdout(predicate::str::contains("Outflow:      $2,650.00"))
        .stdout(predicate::str::contains("Savings rate: 47.0%"))
        .stdout(predicate::str::contains("Housing"))
        .stdout(predicate::str::contains("$1,500.00"));
}

#[test]
fn test_dashboard_whole_year() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).args(["init", "--demo"]).assert().success();

    fintrack(&dir)
        .args(["dashboard", "--year", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023 (all months)"))
        .stdout(predicate::str::contains("October"))
        .stdout(predicate::str::contains("November"));
}

#[test]
fn test_dashboard_empty_period_reports_no_data() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).args(["init", "--demo"]).assert().success();

    fintrack(&dir)
        .args(["dashboard", "--year", "2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for the selected period."));
}

#[test]
fn test_dashboard_rejects_bad_month() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();

    fintrack(&dir)
        .args(["dashboard", "--year", "2023", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month"));
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();

    fintrack(&dir)
        .args([
            "add",
            "Coffee",
            "4.50",
            "--category",
            "food",
            "--date",
            "12/10/2023",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved: 12/10/2023 Coffee Outflow 4.50"));

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("-$4.50"))
        .stdout(predicate::str::contains("1 transactions"));
}

#[test]
fn test_add_accepts_portuguese_labels() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();

    fintrack(&dir)
        .args([
            "add",
            "Aluguel",
            "1500.00",
            "--category",
            "habitação",
            "--kind",
            "saída",
            "--payment",
            "pix",
            "--date",
            "05/10/2023",
        ])
        .assert()
        .success();

    // Canonical names on disk, regardless of input labels.
    let ledger = std::fs::read_to_string(dir.path().join("data").join("ledger.csv")).unwrap();
    assert!(ledger.contains("05/10/2023,Aluguel,Housing,Outflow,1500.00,InstantTransfer"));
}

#[test]
fn test_add_accepts_two_digit_year() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();

    fintrack(&dir)
        .args(["add", "Coffee", "4.50", "--date", "12/10/23"])
        .assert()
        .success();

    let ledger = std::fs::read_to_string(dir.path().join("data").join("ledger.csv")).unwrap();
    assert!(ledger.contains("12/10/2023,Coffee"));
}

#[test]
fn test_list_honors_configured_date_format() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();

    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "schema_version": 1, "currency_symbol": "$", "date_format": "%Y-%m-%d" }"#,
    )
    .unwrap();

    fintrack(&dir)
        .args(["add", "Coffee", "4.50", "--date", "12/10/2023"])
        .assert()
        .success();

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-10-12"));
}

#[test]
fn test_add_rejects_bad_amount_and_saves_nothing() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();

    fintrack(&dir)
        .args(["add", "Groceries", "abc", "--date", "10/10/2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded."));
}

#[test]
fn test_export_to_stdout() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).args(["init", "--demo"]).assert().success();

    fintrack(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "date,description,category,kind,amount,payment_method",
        ))
        .stdout(predicate::str::contains(
            "05/10/2023,Rent,Housing,Outflow,1500.00,Invoice",
        ));
}

#[test]
fn test_export_to_file() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).args(["init", "--demo"]).assert().success();

    let out = dir.path().join("export.csv");
    fintrack(&dir)
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 7 transactions"));

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("date,description,category,kind,amount,payment_method"));
    assert_eq!(contents.lines().count(), 8);
}

#[test]
fn test_reload_skips_malformed_rows_with_warning() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir).arg("init").assert().success();

    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data").join("ledger.csv"),
        "date,description,category,kind,amount,payment_method\n\
         01/10/2023,Salary,Income,Inflow,5000.00,InstantTransfer\n\
         not-a-date,Broken,Food,Outflow,1.00,Cash\n",
    )
    .unwrap();

    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped row 2"))
        .stdout(predicate::str::contains("1 transactions"));
}

#[test]
fn test_list_without_init_is_empty() {
    let dir = TempDir::new().unwrap();

    // Missing ledger file means an empty store, not a failure.
    fintrack(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded."));
}
