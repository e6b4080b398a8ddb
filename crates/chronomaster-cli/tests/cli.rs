//! End-to-end tests for the `chronomaster` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn chronomaster() -> Command {
    Command::cargo_bin("chronomaster").unwrap()
}

#[test]
fn add_hours_across_leap_day() {
    chronomaster()
        .args(["add", "February 29 2004 9:15pm EST", "--hours", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 1 2004 9:15am EST"));
}

#[test]
fn add_negative_hours() {
    chronomaster()
        .args(["add", "January 1 2021 1:45am EST", "--hours", "-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 31 2020 1:45pm EST"));
}

#[test]
fn add_response_shape() {
    let output = chronomaster()
        .args(["add", "March 6 2009 7:30pm EST", "--hours", "12"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["original"], "March 6 2009 7:30pm EST");
    assert_eq!(v["result"], "March 7 2009 7:30am EST");
    assert_eq!(v["hours_added"], 12);
    assert_eq!(v["timezone"], "EST");
}

#[test]
fn add_rejects_malformed_input() {
    chronomaster()
        .args(["add", "March 6 2009", "--hours", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed input"));
}

#[test]
fn convert_est_to_pst() {
    let output = chronomaster()
        .args(["convert", "March 6 2009 7:30pm EST", "--to", "PST"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["converted"], "March 6 2009 4:30pm PST");
    assert_eq!(v["source_timezone"], "EST");
    assert_eq!(v["target_timezone"], "PST");
}

#[test]
fn convert_rejects_unknown_zone() {
    chronomaster()
        .args(["convert", "March 6 2009 7:30pm EST", "--to", "XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported timezone: XYZ"));
}

#[test]
fn validate_accepts_canonical_date() {
    let output = chronomaster()
        .args(["validate", "March 6 2009 7:30pm EST"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["valid"], true);
    assert_eq!(v["parsed"]["month"], 2);
    assert_eq!(v["parsed"]["hour"], 19);
    assert_eq!(v["parsed"]["zone"], "EST");
}

#[test]
fn validate_reports_impossible_day_as_data() {
    // Invalidity is a result, not a failure: the process still exits 0.
    let output = chronomaster()
        .args(["validate", "February 31 2021 9:00am EST"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["valid"], false);
    assert!(v["message"].as_str().unwrap().contains("only 28 days"));
    assert!(v.get("parsed").is_none());
}
