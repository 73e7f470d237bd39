//! CLI integration tests
//!
//! Each test writes a configuration into a scratch directory and runs the
//! binary there, so the default `setup-tools.toml` lookup and the relative
//! database path both land inside the temp dir.

use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"
[settings]
database = "state/db.sqlite3"
allowed_hosts = ["localhost"]

[settings.site]
id = 1
domain = "app.example.com"
name = "App"

[commands.""]
on_initial = [["migrate", "--no-input"]]
always_run = ["setup_tools.scripts.sync_site_id"]

[commands.staging]
always_run = [["check"]]
"#;

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setup-tools"))
        .current_dir(dir)
        .env_remove("SETUP_TOOLS_ENV")
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("setup-tools.toml"), content).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_first_run_migrates_then_second_run_skips() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, CONFIG);

    let first = run_cli(dir.path(), &["run"]);
    assert!(first.status.success(), "Stderr: {}", stderr(&first));
    let out = stdout(&first);
    assert!(out.contains("Running initialization scripts (setup-tools):"));
    assert!(out.contains("Applying 001_initial_schema... OK"));
    assert!(out.contains("Created site: App"));

    let second = run_cli(dir.path(), &["run"]);
    assert!(second.status.success(), "Stderr: {}", stderr(&second));
    let out = stdout(&second);
    assert!(out.contains("Database already initialized... skipping."));
    assert!(!out.contains("Applying"));
    assert!(out.contains("Updated site: App"));

    let conn = Connection::open(dir.path().join("state/db.sqlite3")).unwrap();
    let domain: String = conn
        .query_row("SELECT domain FROM sites WHERE id = 1", [], |row| row.get(0))
        .unwrap();
    assert_eq!(domain, "app.example.com");
}

#[test]
fn test_env_flag_appends_environment_commands() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, CONFIG);

    let output = run_cli(dir.path(), &["run", "--env", "staging"]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("System check identified no issues"));
}

#[test]
fn test_env_var_selects_environment() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, CONFIG);

    let output = Command::new(env!("CARGO_BIN_EXE_setup-tools"))
        .current_dir(dir.path())
        .env("SETUP_TOOLS_ENV", "staging")
        .env("RUST_LOG", "off")
        .args(["plan", "--phase", "always_run"])
        .output()
        .unwrap();

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Environment: staging"));
    assert!(out.contains("setup_tools.scripts.sync_site_id [function]"));
    assert!(out.contains("check [command]"));
}

#[test]
fn test_plan_does_not_touch_database() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, CONFIG);

    let output = run_cli(dir.path(), &["plan"]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Environment: (default)"));
    assert!(out.contains("on_initial:"));
    assert!(out.contains("migrate --no-input [command]"));
    assert!(!dir.path().join("state").exists());
}

#[test]
fn test_missing_default_config_is_a_noop_run() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &["run"]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("No setup-tools configuration found; nothing to run."));
    assert!(out.contains("No always_run commands configured."));
    assert!(!dir.path().join(".setup-tools").exists());
}

#[test]
fn test_unreadable_database_counts_as_initialized() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        r#"
[settings]
database = "db.sqlite3"

[commands.""]
on_initial = ["migrate"]
always_run = ["setup_tools.scripts.verify_environment_config"]
"#,
    );
    fs::write(dir.path().join("db.sqlite3"), vec![b'x'; 4096]).unwrap();

    let output = run_cli(dir.path(), &["run"]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Could not determine initialization state"));
    assert!(out.contains("Database already initialized... skipping."));
    assert!(!out.contains("Operations to perform:"));
    assert!(out.contains("Verifying environment configuration..."));
    assert!(out.contains("SECRET_KEY is not set"));
    assert!(out.contains("Setup complete (1 command(s) run)"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(dir.path(), &["run", "--config", "absent.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error:"));
    assert!(stderr(&output).contains("absent.toml"));
}

#[test]
fn test_failing_command_exits_with_error() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        r#"
[settings]
database = "db.sqlite3"

[commands.""]
always_run = ["collectstatic", "migrate"]
"#,
    );

    let output = run_cli(dir.path(), &["run"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error executing management command 'collectstatic'"));
    assert!(err.contains("Unknown command: collectstatic"));
    assert!(!stdout(&output).contains("Applying"));
}

#[test]
fn test_unknown_function_path_reports_import_failure() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        r#"
[settings]
database = "db.sqlite3"

[commands.""]
always_run = ["myapp.scripts.missing"]
"#,
    );

    let output = run_cli(dir.path(), &["run"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Could not import function 'myapp.scripts.missing'"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[commands.\"\"]\nalways-run = [\"check\"]\n");

    let output = run_cli(dir.path(), &["plan"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_commands_lists_builtins() {
    let dir = TempDir::new().unwrap();

    let output = run_cli(dir.path(), &["commands"]);

    assert!(output.status.success(), "Stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("createsuperuser"));
    assert!(out.contains("setup_tools.scripts.clear_cache"));
}
