use predicates::str::contains;
use std::fs;

mod common;
use common::{cur, setup_test_config, write_offline_config};

#[test]
fn test_init_writes_config_file() {
    let cfg_path = setup_test_config("init");

    cur()
        .args([
            "--config",
            &cfg_path,
            "init",
            "--api-key",
            "pk_test_key",
            "--team-id",
            "1234567",
        ])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&cfg_path).expect("config written");
    assert!(content.contains("api_key: pk_test_key"));
    assert!(content.contains("timezone: Europe/Madrid"));
}

#[test]
fn test_init_without_credentials_warns() {
    let cfg_path = setup_test_config("init_empty");

    cur()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success()
        .stdout(contains("still empty"));
}

#[test]
fn test_init_rejects_unknown_timezone() {
    let cfg_path = setup_test_config("init_tz");

    cur()
        .args(["--config", &cfg_path, "init", "--timezone", "Mars/Olympus"])
        .assert()
        .failure()
        .stderr(contains("Unknown time zone"));
}

#[test]
fn test_config_print() {
    let cfg_path = write_offline_config("config_print");

    cur()
        .args(["--config", &cfg_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("team_id"))
        .stdout(contains("1234567"));
}

#[test]
fn test_day_requires_credentials() {
    let cfg_path = setup_test_config("day_no_creds");

    cur()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success();

    cur()
        .args(["--config", &cfg_path, "day", "2024-02-03"])
        .assert()
        .failure()
        .stderr(contains("api_key/team_id not set"));
}

#[test]
fn test_day_rejects_invalid_date() {
    let cfg_path = write_offline_config("day_bad_date");

    cur()
        .args(["--config", &cfg_path, "day", "03-02-2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_summary_rejects_invalid_period() {
    let cfg_path = write_offline_config("summary_bad_period");

    cur()
        .args(["--config", &cfg_path, "summary", "--period", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_export_requires_day_or_month() {
    let cfg_path = write_offline_config("export_no_target");
    let out = common::temp_out("export_no_target", "csv");

    cur()
        .args(["--config", &cfg_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--day or --month"));
}

#[test]
fn test_report_commands_surface_remote_failure() {
    // base_url points at an unroutable endpoint: the page-0 task fetch
    // is a hard error, not a silent empty report
    let cfg_path = write_offline_config("day_offline");

    cur()
        .args(["--config", &cfg_path, "day", "2024-02-03"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}
