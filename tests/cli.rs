//! Integration tests for CLI commands

#![allow(deprecated)]

use assert_cmd::{assert::OutputAssertExt, cargo::CommandCargoExt};
use chrono::{Duration, Utc};
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn ridecare(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ridecare").unwrap();
    cmd.env("RIDECARE_DATA_DIR", home.path());
    cmd.env_remove("RIDECARE_LOG");
    cmd
}

/// A data directory with default service types and one vehicle
fn initialized() -> TempDir {
    let home = TempDir::new().unwrap();
    ridecare(&home).arg("init").assert().success();
    ridecare(&home)
        .args(["vehicle", "create", "KA-01-1234", "--owner", "Asha Rao", "--model", "Honda City"])
        .assert()
        .success();
    home
}

fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[test]
fn test_main_command_help() {
    let mut cmd = Command::cargo_bin("ridecare").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vehicle maintenance"));
}

#[test]
fn test_init_seeds_service_types() {
    let home = TempDir::new().unwrap();

    ridecare(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Oil Change (every 90 days)"));

    assert!(home.path().join("config.json").exists());

    ridecare(&home)
        .args(["service-type", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tire Rotation"))
        .stdout(predicate::str::contains("180d"));
}

#[test]
fn test_duplicate_vehicle_fails() {
    let home = initialized();

    ridecare(&home)
        .args(["vehicle", "create", "ka-01-1234", "--owner", "Ravi", "--model", "Nexon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_record_and_list_overdue() {
    let home = initialized();

    ridecare(&home)
        .args(["record", "add", "KA-01-1234", "oil change", "--date"])
        .arg(days_ago(100))
        .args(["--notes", "5W-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Oil Change for KA-01-1234"));

    ridecare(&home)
        .args(["record", "overdue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERDUE"))
        .stdout(predicate::str::contains("1 overdue service(s)"));

    ridecare(&home)
        .args(["record", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No service records found."));
}

#[test]
fn test_upcoming_window() {
    let home = initialized();

    // Due in about 20 days
    ridecare(&home)
        .args(["record", "add", "KA-01-1234", "Oil Change", "--date"])
        .arg(days_ago(70))
        .assert()
        .success();

    ridecare(&home)
        .args(["record", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPCOMING"));

    ridecare(&home)
        .args(["record", "upcoming", "--days", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No service records found."));
}

#[test]
fn test_record_for_unknown_vehicle() {
    let home = initialized();

    ridecare(&home)
        .args(["record", "add", "XX-00-0000", "Oil Change"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vehicle not found: XX-00-0000"));
}

#[test]
fn test_invalid_service_date() {
    let home = initialized();

    ridecare(&home)
        .args(["record", "add", "KA-01-1234", "Oil Change", "--date", "15/06/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid service date"));
}

#[test]
fn test_history_json() {
    let home = initialized();
    ridecare(&home)
        .args(["record", "add", "KA-01-1234", "Brake Inspection"])
        .assert()
        .success();

    let output = ridecare(&home)
        .args(["history", "KA-01-1234", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let history: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(history["vehicle"]["owner_name"], "Asha Rao");
    let records = history["service_records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["service_type_name"], "Brake Inspection");
    assert_eq!(records[0]["status"], "UPCOMING");
}

#[test]
fn test_export_csv_to_stdout() {
    let home = initialized();
    ridecare(&home)
        .args(["record", "add", "KA-01-1234", "Oil Change", "--notes", "first, with comma"])
        .assert()
        .success();

    ridecare(&home)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Service ID,Vehicle Number,Owner Name,Model,Service Type,Service Date,Next Service Date,Status,Days Until Due,Notes\r\n",
        ))
        .stdout(predicate::str::contains("\"first, with comma\""));
}

#[test]
fn test_export_vehicle_to_directory() {
    let home = initialized();
    let out = TempDir::new().unwrap();
    ridecare(&home)
        .args(["record", "add", "KA-01-1234", "Tire Rotation"])
        .assert()
        .success();

    ridecare(&home)
        .args(["export", "vehicle", "KA-01-1234", "--output"])
        .arg(out.path())
        .assert()
        .success();

    let exported = out.path().join("vehicle_KA-01-1234_services.csv");
    let text = std::fs::read_to_string(exported).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("Tire Rotation"));
}

#[test]
fn test_delete_vehicle_cascades() {
    let home = initialized();
    ridecare(&home)
        .args(["record", "add", "KA-01-1234", "Oil Change"])
        .assert()
        .success();

    ridecare(&home)
        .args(["vehicle", "delete", "KA-01-1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("and 1 service record(s)"));

    ridecare(&home)
        .args(["record", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No service records found."));

    ridecare(&home)
        .args(["audit", "--count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn test_status_reports_counts() {
    let home = initialized();

    ridecare(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicles:        1"))
        .stdout(predicate::str::contains("Service types:   4"));
}

#[test]
fn test_status_detects_corrupt_file() {
    let home = initialized();
    std::fs::write(home.path().join("data").join("vehicles.json"), "{ not json").unwrap();

    ridecare(&home)
        .arg("status")
        .assert()
        .failure()
        .stdout(predicate::str::contains("CORRUPT"));
}

#[test]
fn test_status_reports_corrupt_settings() {
    let home = initialized();
    std::fs::write(home.path().join("config.json"), "{ not json").unwrap();

    ridecare(&home)
        .arg("status")
        .assert()
        .failure()
        .stdout(predicate::str::contains("settings"))
        .stdout(predicate::str::contains("CORRUPT"))
        .stdout(predicate::str::contains("vehicles         ok"));

    ridecare(&home)
        .args(["vehicle", "list"])
        .assert()
        .failure();
}

#[test]
fn test_record_show_by_printed_id() {
    let home = initialized();

    let output = ridecare(&home)
        .args(["record", "add", "KA-01-1234", "Tire Rotation", "--notes", "front to back"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .map(|id| id.trim().to_string())
        .unwrap();

    ridecare(&home)
        .args(["record", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tire Rotation for KA-01-1234"))
        .stdout(predicate::str::contains("Notes:    front to back"))
        .stdout(predicate::str::contains("UPCOMING"));

    ridecare(&home)
        .args(["history", "KA-01-1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()));

    ridecare(&home)
        .args(["record", "show", "svc-1234abcd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid service record ID"));
}
