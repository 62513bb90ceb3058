#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the calc-server binary
//!
//! These run the real binary: help and version output, config validation
//! through `check`, `--print-config`, and a short-lived `run`.

use std::process::{Command, Stdio};
use std::time::Duration;

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn run_calc_server(args: &[&str]) -> std::process::Output {
    run_calc_server_with_env(args, &[])
}

fn run_calc_server_with_env(args: &[&str], env: &[(&str, &str)]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_calc-server"));
    cmd.args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute calc-server")
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_calc_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calc-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--port"), "Should mention port option");
}

#[test]
fn test_cli_version_command() {
    let output = run_calc_server(&["--version"]);
    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calc-server"), "Should contain binary name");
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_calc_server(&["invalid-command"]);
    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should contain error message about invalid command: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_calc_server(&["--config", "/nonexistent/config.yaml", "check"]);
    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_flag_short_form() {
    let output = run_calc_server(&["-c", "/nonexistent/config.yaml", "check"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file does not exist"),
        "Should indicate config file not found using short flag: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid.yaml", "invalid: yaml: content: [unclosed");

    let output = run_calc_server(&["--config", &config_path, "check"]);
    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
    assert!(
        stderr.contains("yaml") || stderr.contains("parse"),
        "Should mention YAML parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "valid.yaml",
        r#"
api_gateway:
  bind_addr: "127.0.0.1:18080"
  cors_enabled: true
  request_timeout_secs: 10
calculator:
  base_path: "/api/calc"
logging:
  console_level: warn
  format: json
"#,
    );

    let output = run_calc_server(&["--config", &config_path, "check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "Should succeed with valid config: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("127.0.0.1:18080"));
}

#[test]
fn test_cli_check_rejects_unknown_section() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "typo.yaml", "calculater:\n  base_path: /x\n");

    let output = run_calc_server(&["--config", &config_path, "check"]);
    assert!(!output.status.success(), "Unknown top-level keys should fail");
}

#[test]
fn test_cli_check_rejects_bad_base_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "base.yaml",
        "calculator:\n  base_path: \"api/calc\"\n",
    );

    let output = run_calc_server(&["--config", &config_path, "check"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_run_command_invalid_bind_address() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "bad_bind.yaml",
        "api_gateway:\n  bind_addr: \"not-an-address\"\n",
    );

    let output = run_calc_server(&["--config", &config_path, "run"]);
    assert!(
        !output.status.success(),
        "Should fail with invalid bind address"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid bind address"),
        "Should mention address parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_env_override_is_applied() {
    let output = run_calc_server_with_env(
        &["check"],
        &[("APP__API_GATEWAY__BIND_ADDR", "not-an-address")],
    );
    assert!(!output.status.success(), "Env override should be validated");

    let output = run_calc_server_with_env(
        &["--print-config"],
        &[("APP__CALCULATOR__BASE_PATH", "/env/calc")],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("/env/calc"));
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let output = run_calc_server(&["--port", "9191", "--print-config"]);
    assert!(output.status.success(), "Print config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration:"));
    assert!(stdout.contains("127.0.0.1:9191"), "Port override missing: {stdout}");
    assert!(stdout.contains("base_path"));
}

#[test]
fn test_cli_verbose_flag() {
    let output = run_calc_server(&["-vv", "check"]);
    assert!(output.status.success(), "Verbose check should succeed");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Checking configuration"),
        "Should log at info level or above: {stderr}"
    );
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_calc_server(&["run", "--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Start the server"));

    let output = run_calc_server(&["check", "--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Validate configuration"));
}

#[tokio::test]
async fn test_cli_run_serves_calculator() {
    let port = {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        probe.local_addr().unwrap().port()
    };

    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_calc-server"))
        .args(["--port", &port.to_string(), "run"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn calc-server");

    let mut stream = None;
    for _ in 0..100 {
        if let Ok(s) = tokio::net::TcpStream::connect(("127.0.0.1", port)).await {
            stream = Some(s);
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    let mut stream = stream.expect("server did not start listening");

    stream
        .write_all(
            b"GET /api/calc/add?a=2&b=3 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK"), "unexpected response: {raw}");
    assert!(raw.to_lowercase().contains("x-request-id"));
    assert!(raw.ends_with("5.0"), "unexpected body: {raw}");

    child.kill().await.unwrap();
}
