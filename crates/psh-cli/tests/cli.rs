//! Binary-level tests for the psh CLI.

use assert_cmd::Command;

fn psh() -> Command {
    Command::cargo_bin("psh").unwrap()
}

#[test]
fn help_describes_the_tool() {
    let output = psh().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Polyglot Shell"));
    assert!(stdout.contains("--timeout-secs"));
}

#[test]
fn version_is_reported() {
    let output = psh().arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn a_missing_url_prints_usage() {
    // Point --config at a path that does not exist so a developer's real
    // ~/.psh/config.toml cannot supply a URL.
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    let output = psh().arg("--config").arg(&config).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: psh"));
}

#[test]
fn an_unreachable_service_fails_with_context() {
    let output = psh()
        .args(["http://127.0.0.1:9/shell", "-c", "1 + 1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("psh: failed to establish shell session"));
}

#[test]
fn the_config_file_supplies_the_service_url() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[default]\nurl = \"http://127.0.0.1:9/shell\"\n").unwrap();

    let output = psh()
        .arg("--config")
        .arg(&config)
        .args(["-c", "1 + 1"])
        .output()
        .unwrap();

    // The URL came from the config, so the run gets as far as a connection
    // failure instead of the usage message.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Usage: psh"));
    assert!(stderr.contains("psh:"));
}
