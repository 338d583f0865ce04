//! CLI smoke tests for the usuarios-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, environment overrides and help output.

use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

/// Run the binary inside `dir` with a clean view of the variables it reads.
fn server_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_usuarios-server"));
    cmd.current_dir(dir)
        .env_remove("DATABASE_URL")
        .env_remove("PORT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

fn run_usuarios_server(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    server_cmd(dir.path())
        .args(args)
        .output()
        .expect("Failed to execute usuarios-server")
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help_command() {
    let output = run_usuarios_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usuarios-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--port"), "Should mention port option");
}

#[test]
fn test_cli_version_command() {
    let output = run_usuarios_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usuarios-server 0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_usuarios_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Should report the bad subcommand: {stderr}");
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_usuarios_server(&["-c", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config file not found"),
        "Should mention config file issue: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&dir, "invalid.yaml", "invalid: yaml: content: [unclosed");

    let output = server_cmd(dir.path())
        .args(["--config", &config, "check"])
        .output()
        .expect("Failed to execute usuarios-server");

    assert!(!output.status.success(), "Should fail with invalid YAML");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config"), "Should mention config issue: {stderr}");
}

#[test]
fn test_cli_config_validation_valid_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(
        &dir,
        "valid.yaml",
        r#"
server:
  host: "127.0.0.1"
  port: 8088

database:
  url: "sqlite::memory:"

logging:
  default:
    console_level: info
    file: ""
"#,
    );

    let output = server_cmd(dir.path())
        .args(["--config", &config, "check"])
        .output()
        .expect("Failed to execute usuarios-server");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "Should succeed with valid config: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("port: 8088"));
}

#[test]
fn test_cli_print_config_applies_env_and_cli_overrides() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let output = server_cmd(dir.path())
        .env("DATABASE_URL", "postgres://app:pw@db/usuarios")
        .env("PORT", "4321")
        .arg("--print-config")
        .output()
        .expect("Failed to execute usuarios-server");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("postgres://app:pw@db/usuarios"), "{stdout}");
    assert!(stdout.contains("port: 4321"), "{stdout}");

    let output = server_cmd(dir.path())
        .env("PORT", "4321")
        .args(["--port", "5555", "--print-config"])
        .output()
        .expect("Failed to execute usuarios-server");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 5555"), "{stdout}");
}

#[test]
fn test_cli_bad_port_env_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = server_cmd(dir.path())
        .env("PORT", "not-a-port")
        .arg("check")
        .output()
        .expect("Failed to execute usuarios-server");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid PORT value"), "{stderr}");
}

#[test]
fn test_cli_dotenv_file_is_loaded() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(".env"), "PORT=6060\n").expect("Failed to write .env");

    let output = server_cmd(dir.path())
        .arg("--print-config")
        .output()
        .expect("Failed to execute usuarios-server");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 6060"), "{stdout}");
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_usuarios_server(&["run", "--help"]);
    assert!(output.status.success(), "Run subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Start the server"));

    let output = run_usuarios_server(&["check", "--help"]);
    assert!(output.status.success(), "Check subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Check configuration"));
}

#[tokio::test]
async fn test_cli_run_command_with_memory_database() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut cmd = tokio::process::Command::from(server_cmd(dir.path()));
    cmd.env("DATABASE_URL", "sqlite::memory:")
        .args(["--port", "0", "run"])
        .kill_on_drop(true);

    // Server should start and keep running until the timeout hits
    match timeout(Duration::from_secs(5), cmd.output()).await {
        Err(_) => {}
        Ok(output) => {
            let output = output.expect("Failed to execute usuarios-server");
            panic!(
                "Server exited early:\nSTDOUT: {}\nSTDERR: {}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
    }
}
