use assert_cmd::Command;
use predicates::prelude::*;

/// Connection-refused locally, so no test falls through to a live fetch.
const DEAD_URL: &str = "http://127.0.0.1:9/sheet.csv";

fn findash() -> Command {
    let mut cmd = Command::cargo_bin("findash").unwrap();
    cmd.env("GOOGLE_SHEET_URL", DEAD_URL);
    cmd
}

#[test]
fn demo_prints_dataset_and_kpis() {
    findash()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("August2025"))
        .stdout(predicate::str::contains("$12,700.00"))
        .stdout(predicate::str::contains("62.4%"));
}

#[test]
fn template_writes_file_that_checks_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.csv");
    let path_str = path.to_str().unwrap();

    findash()
        .args(["template", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("template written"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Month,Type,Category,Description,Amount"));

    findash()
        .args(["check", path_str])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid:"))
        .stdout(predicate::str::contains("Transactions: 6"));
}

#[test]
fn kpis_json_from_uploaded_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.csv");
    let path_str = path.to_str().unwrap();
    findash().args(["template", path_str]).assert().success();

    findash()
        .args(["kpis", "--file", path_str, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"provenance\": \"uploaded\""))
        .stdout(predicate::str::contains("\"total_income\": 10000.0"));
}

#[test]
fn kpis_unmatched_filter_emits_notice_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.csv");
    let path_str = path.to_str().unwrap();
    findash().args(["template", path_str]).assert().success();

    findash()
        .args(["kpis", "--file", path_str, "--month", "Nope2099", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No data matches your filters"))
        .stdout(predicate::str::contains("\"total_income\": 0.0"));
}

#[test]
fn check_reports_unsupported_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "Month,Type,Category,Amount\n").unwrap();

    findash()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid:"))
        .stdout(predicate::str::contains("Unsupported file format"));
}

#[test]
fn show_unmatched_filter_is_a_notice_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("template.csv");
    let path_str = path.to_str().unwrap();
    findash().args(["template", path_str]).assert().success();

    findash()
        .args(["show", "--file", path_str, "--month", "Nope2099"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data matches your filters"));
}

#[test]
fn config_persists_and_reloads_settings() {
    let home = tempfile::tempdir().unwrap();
    let home_str = home.path().to_str().unwrap().to_string();

    findash()
        .env("HOME", &home_str)
        .args(["config", "--cache-ttl", "60", "--fetch-timeout", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings saved"));

    assert!(home.path().join(".config/findash/settings.json").exists());

    findash()
        .env("HOME", &home_str)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("cache_ttl_secs:     60"))
        .stdout(predicate::str::contains("fetch_timeout_secs: 3"));
}

#[test]
fn show_oversize_upload_falls_back_instead_of_erroring() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.csv");
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(11 * 1024 * 1024).unwrap();

    findash()
        .args(["show", "--file", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using demo data."))
        .stderr(predicate::str::contains("File too large"));
}

#[test]
fn show_falls_back_to_demo_when_offline() {
    findash()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using demo data."))
        .stdout(predicate::str::contains("Key Performance Indicators"));
}
