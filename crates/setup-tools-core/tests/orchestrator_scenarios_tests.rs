//! End-to-end orchestration scenarios against fake collaborators

mod common;

use common::{identifiers, new_log, FakeResolver, FakeState, RecordingRegistry};
use setup_tools_core::{
    BufferedOutput, CommandDescriptor, Configuration, Orchestrator, Phase, SetupConfig,
    SetupError, Style,
};

fn config_with(commands: Configuration, environment: &str) -> SetupConfig {
    SetupConfig {
        environment: environment.to_string(),
        commands,
        ..SetupConfig::default()
    }
}

fn migrate_then_sync() -> Configuration {
    let mut commands = Configuration::new();
    commands
        .push("", Phase::OnInitial, CommandDescriptor::bare("migrate"))
        .push("", Phase::AlwaysRun, CommandDescriptor::bare("sync_site"));
    commands
}

#[test]
fn test_fresh_database_runs_both_phases() {
    let config = config_with(migrate_then_sync(), "");
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let state = FakeState::Initialized(false);
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);
    let mut out = BufferedOutput::new();

    let report = orchestrator.run(&mut out).unwrap();

    assert!(!report.initialized);
    assert_eq!(identifiers(&log), vec!["migrate", "sync_site"]);
    assert_eq!(report.dispatched, vec!["migrate", "sync_site"]);
    assert!(out.contains(Style::Notice, "Running initialization scripts (setup-tools):"));
    assert!(out.contains(Style::MigrateHeading, "Running setup scripts (setup-tools):"));
}

#[test]
fn test_initialized_database_skips_on_initial() {
    let config = config_with(migrate_then_sync(), "");
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let state = FakeState::Initialized(true);
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);
    let mut out = BufferedOutput::new();

    let report = orchestrator.run(&mut out).unwrap();

    assert!(report.initialized);
    assert_eq!(identifiers(&log), vec!["sync_site"]);
    assert!(out.contains(Style::HttpInfo, "Database already initialized... skipping."));
}

#[test]
fn test_environment_scope_appended_to_defaults() {
    let mut commands = Configuration::new();
    commands
        .push("", Phase::AlwaysRun, CommandDescriptor::bare("a"))
        .push("dev", Phase::AlwaysRun, CommandDescriptor::bare("b"));
    let config = config_with(commands, "dev");
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let state = FakeState::Initialized(true);
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);
    let mut out = BufferedOutput::new();

    orchestrator.run(&mut out).unwrap();

    assert_eq!(identifiers(&log), vec!["a", "b"]);
}

#[test]
fn test_failed_state_query_assumes_initialized() {
    let config = config_with(migrate_then_sync(), "");
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let state = FakeState::Broken;
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);
    let mut out = BufferedOutput::new();

    let report = orchestrator.run(&mut out).unwrap();

    assert!(report.initialized);
    assert_eq!(identifiers(&log), vec!["sync_site"]);
    assert!(out.contains(Style::Warning, "DB Error"));
}

#[test]
fn test_empty_configuration_warns_and_dispatches_nothing() {
    let config = SetupConfig::default();
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let state = FakeState::Initialized(false);
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);
    let mut out = BufferedOutput::new();

    let report = orchestrator.run(&mut out).unwrap();

    assert!(report.dispatched.is_empty());
    assert!(log.borrow().is_empty());
    assert!(out.contains(Style::Warning, "No setup-tools configuration found"));
    assert!(out.contains(Style::HttpInfo, "No on_initial commands configured."));
    assert!(out.contains(Style::HttpInfo, "No always_run commands configured."));
}

#[test]
fn test_on_initial_failure_stops_before_always_run() {
    let mut commands = Configuration::new();
    commands
        .push("", Phase::OnInitial, CommandDescriptor::bare("migrate"))
        .push("", Phase::OnInitial, CommandDescriptor::bare("createsuperuser"))
        .push("", Phase::AlwaysRun, CommandDescriptor::bare("check"));
    let config = config_with(commands, "");
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone()).failing_on("migrate");
    let resolver = FakeResolver::new();
    let state = FakeState::Initialized(false);
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);
    let mut out = BufferedOutput::new();

    let err = orchestrator.run(&mut out).unwrap_err();

    assert!(matches!(err, SetupError::Execution { ref name, .. } if name == "migrate"));
    assert_eq!(identifiers(&log), vec!["migrate"]);
    assert!(!out.has_style(Style::MigrateHeading));
}

#[test]
fn test_function_and_command_mix_across_phases() {
    let mut commands = Configuration::new();
    commands
        .push("", Phase::OnInitial, CommandDescriptor::new("migrate", ["--no-input"]))
        .push(
            "",
            Phase::AlwaysRun,
            CommandDescriptor::bare("myapp.scripts.sync_site_id"),
        );
    let config = config_with(commands, "");
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new().recording("myapp.scripts.sync_site_id", log.clone());
    let state = FakeState::Initialized(false);
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);
    let mut out = BufferedOutput::new();

    orchestrator.run(&mut out).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            ("migrate".to_string(), vec!["--no-input".to_string()]),
            ("myapp.scripts.sync_site_id".to_string(), vec![]),
        ]
    );
}

#[test]
fn test_plan_matches_dispatch_order() {
    let mut commands = Configuration::new();
    commands
        .push("", Phase::AlwaysRun, CommandDescriptor::bare("a"))
        .push("staging", Phase::AlwaysRun, CommandDescriptor::bare("b"))
        .push("staging", Phase::AlwaysRun, CommandDescriptor::bare("c"));
    let config = config_with(commands, "staging");
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let state = FakeState::Initialized(true);
    let orchestrator = Orchestrator::new(&config, &state, &resolver, &registry);

    let planned: Vec<String> = orchestrator
        .plan(Phase::AlwaysRun)
        .iter()
        .map(|c| c.identifier().to_string())
        .collect();
    let mut out = BufferedOutput::new();
    orchestrator.run(&mut out).unwrap();

    assert_eq!(planned, identifiers(&log));
}
