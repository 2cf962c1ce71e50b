//! Integration tests for the check_graylog binary

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use check_graylog_testkit::{
    FakeGraylog, GraylogFixture, Reply, TEST_PASSWORD, TEST_USER, collectors_json, system_json,
};
use predicates::prelude::*;
use std::process::Command;

const ZERO_PERF: &str = "|time=0.000000;;;; total=0;;;; sources=0;;;; throughput=0;;;; \
                         index_failures=0;;;; collectors=0;;;; collector_failure=0;;;; \
                         collector_offline=0;;;;";

/// Command with debug output disabled, whatever the caller's environment
fn check_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin!("check_graylog"));
    cmd.env_remove("NCG2").env_remove("RUST_LOG");
    cmd
}

/// Command pointed at `fake` with valid credentials
fn check_against(fake: &FakeGraylog) -> Command {
    let url = fake.url();
    let mut cmd = check_cmd();
    cmd.args(["-l", url.as_str(), "-u", TEST_USER, "-p", TEST_PASSWORD]);
    cmd
}

#[test]
fn test_missing_credentials_print_usage_and_exit_unknown() {
    check_cmd()
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Usage:"));

    check_cmd()
        .args(["-u", "admin"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("-p <PASSWORD>"));
}

#[test]
fn test_version_flag_exits_unknown() {
    for flag in ["--version", "-version"] {
        check_cmd()
            .arg(flag)
            .assert()
            .code(3)
            .stdout(predicate::str::starts_with("Version: "))
            .stdout(predicate::str::contains("License: BSD"));
    }
}

#[test]
fn test_bad_argument_exits_unknown() {
    check_cmd()
        .args(["-u", "admin", "-p", "secret", "-wt", "many"])
        .assert()
        .code(3);
}

#[test]
fn test_invalid_url_is_unknown_with_zero_perf() {
    check_cmd()
        .args(["-l", "http://localhost", "-u", "admin", "-p", "secret"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN - Port is not a number."))
        .stdout(predicate::str::contains(ZERO_PERF));
}

#[test]
fn test_healthy_cluster_exits_ok() {
    let fake = FakeGraylog::healthy();

    check_against(&fake)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("OK - Service is running!\n"))
        .stdout(predicate::str::contains("4 collectors detected"))
        .stdout(predicate::str::contains("0 collectors offline"))
        .stdout(predicate::str::contains("0 index failures"))
        .stdout(predicate::str::contains("collectors=4;;;;"));
}

#[test]
fn test_single_dash_thresholds() {
    let fixture =
        GraylogFixture::default().with_collectors(collectors_json(&[(true, 2), (true, 0)]));
    let fake = FakeGraylog::start(&fixture);

    // Default thresholds: one failing collector warns
    check_against(&fake)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("WARNING - 1 collectors are failing|"));

    // Critical threshold lowered to one
    check_against(&fake)
        .args(["-ct", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("CRITICAL - 1 collectors are failing|"))
        .stdout(predicate::str::contains("collector_failure=1;;;;"));
}

#[test]
fn test_expected_collectors_mismatch_is_critical() {
    let fake = FakeGraylog::healthy();

    check_against(&fake)
        .args(["-ex", "5"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with(
            "CRITICAL - Expecting 5 collectors but 4 reported in|",
        ));
}

#[test]
fn test_lifecycle_warning() {
    let fixture = GraylogFixture {
        system: Reply::json(system_json(true, "halting", "alive")),
        ..GraylogFixture::default()
    };
    let fake = FakeGraylog::start(&fixture);

    check_against(&fake)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("WARNING - lifecycle: halting|"))
        .stdout(predicate::str::contains(ZERO_PERF));
}

#[test]
fn test_http_error_is_critical() {
    let fixture = GraylogFixture {
        throughput: Reply::status(500, "{}"),
        ..GraylogFixture::default()
    };
    let fake = FakeGraylog::start(&fixture);

    check_against(&fake)
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with(
            "CRITICAL - Graylog2 API replied with HTTP code 500|",
        ));
}

#[test]
fn test_unreachable_api_is_critical() {
    check_cmd()
        .args(["-l", "http://127.0.0.1:1", "-u", "admin", "-p", "secret"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with(
            "CRITICAL - Can not connect to Graylog2 API|",
        ));
}

#[test]
fn test_debug_env_logs_to_stderr_only() {
    let fake = FakeGraylog::healthy();

    let output = check_against(&fake)
        .env("NCG2", "debug")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.starts_with("OK - "));
    assert!(!stdout.contains("\"lb_status\""));
    assert!(stderr.contains("\"lb_status\":\"alive\""));
}

#[test]
fn test_rust_log_does_not_control_debug_output() {
    let fake = FakeGraylog::healthy();

    let output = check_against(&fake)
        .env("RUST_LOG", "debug")
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let output = check_against(&fake)
        .env("NCG2", "1")
        .env("RUST_LOG", "error")
        .output()
        .expect("binary should run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"lb_status\":\"alive\""));
    assert!(!stderr.contains("hyper"));
    assert!(!stderr.contains("reqwest::"));
}
