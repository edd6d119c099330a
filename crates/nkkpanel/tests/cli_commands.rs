#![cfg(feature = "cli")]

use std::process::Command;

fn nkkpanel() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nkkpanel"));
    cmd.arg("--log-level").arg("error");
    cmd
}

fn encode_json(args: &[&str]) -> serde_json::Value {
    let output = nkkpanel()
        .arg("--format")
        .arg("json")
        .arg("encode")
        .args(args)
        .output()
        .expect("encode should run");

    assert!(output.status.success(), "encode {args:?} failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("encode should emit json")
}

#[test]
fn encode_select_blank_on_switch_one() {
    let payload = encode_json(&["select", "--button", "1", "--slot", "empty"]);
    assert_eq!(payload["command"], "select_image");
    assert_eq!(payload["length"], 6);
    assert_eq!(payload["hex"], "2E3130303033");
}

#[test]
fn encode_greeting_text() {
    let payload = encode_json(&["text", "Select"]);
    assert_eq!(payload["command"], "print_text");
    assert_eq!(payload["length"], 20);
    assert_eq!(payload["hex"], "2751303631373137353336353663363536333734");
}

#[test]
fn encode_reset_raw_bytes() {
    let output = nkkpanel()
        .arg("--format")
        .arg("raw")
        .arg("encode")
        .arg("reset")
        .output()
        .expect("encode should run");

    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x24]);
}

#[test]
fn encode_blank_on_switch_two_is_invalid_data() {
    let output = nkkpanel()
        .arg("encode")
        .arg("select")
        .arg("--button")
        .arg("2")
        .arg("--slot")
        .arg("empty")
        .output()
        .expect("encode should run");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not selectable on button 2"));
}

#[test]
fn encode_rejects_button_three() {
    let output = nkkpanel()
        .arg("encode")
        .arg("next")
        .arg("--button")
        .arg("3")
        .output()
        .expect("encode should run");

    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn encode_rejects_long_text() {
    let output = nkkpanel()
        .arg("encode")
        .arg("text")
        .arg("x".repeat(100))
        .output()
        .expect("encode should run");

    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn run_against_missing_port_fails_to_open() {
    let output = nkkpanel()
        .arg("run")
        .arg("--port")
        .arg("/dev/nkkpanel-missing-port")
        .output()
        .expect("run should start");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("open failed"));
    assert!(stderr.contains("/dev/nkkpanel-missing-port"));
}

#[test]
fn version_reports_package_version() {
    let output = nkkpanel()
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("nkkpanel {}", env!("CARGO_PKG_VERSION"))
    );
}
