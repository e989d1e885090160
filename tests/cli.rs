use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DIR", dir.path())
        .env("RUST_LOG", "warn");
    cmd
}

fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("entries.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_batch_prints_summary_and_rows() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "type,amount,description\ninc,100,salary\nexp,40,food\nexp,10,bus\n",
    );

    budget(&dir)
        .arg("batch")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ $50.00"))
        .stdout(predicate::str::contains("+ $100.00"))
        .stdout(predicate::str::contains("- $50.00"))
        .stdout(predicate::str::contains("80%"))
        .stdout(predicate::str::contains("20%"));
}

#[test]
fn test_batch_delete_option() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "type,amount,description\ninc,100,salary\nexp,40,food\nexp,10,bus\n",
    );

    budget(&dir)
        .args(["batch", "--delete", "2"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("food").not())
        .stdout(predicate::str::contains("+ $90.00"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn test_batch_reports_invalid_kind_without_failing() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "type,amount,description\nloan,10,bank\ninc,5,tip\n");

    budget(&dir)
        .arg("batch")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 1 line(s):"))
        .stdout(predicate::str::contains("Invalid transaction kind: 'loan'"))
        .stderr(predicate::str::contains("submission rejected"));
}

#[test]
fn test_batch_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["batch", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_init_then_config() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));
    assert!(dir.path().join("config.json").exists());

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:     $"));
}

#[test]
fn test_currency_symbol_from_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "€"}"#,
    )
    .unwrap();
    let csv = write_csv(&dir, "type,amount,description\ninc,12.5,gift\n");

    budget(&dir)
        .arg("batch")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ €12.50"));
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("budget tui"));
}
