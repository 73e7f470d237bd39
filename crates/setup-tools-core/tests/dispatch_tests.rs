//! Dispatcher behaviour: routing, argument passing and failure translation

mod common;

use common::{identifiers, new_log, FakeResolver, RecordingRegistry};
use setup_tools_core::errors::ExErrorKind;
use setup_tools_core::{
    BufferedOutput, CommandDescriptor, CommandKind, Dispatcher, Handler, SetupError, Settings,
    Style,
};

#[test]
fn test_bare_name_dispatches_registered_command_without_args() {
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    dispatcher
        .dispatch_one(&CommandDescriptor::bare("migrate"), &mut handler)
        .unwrap();

    assert_eq!(
        *log.borrow(),
        vec![("migrate".to_string(), Vec::<String>::new())]
    );
}

#[test]
fn test_sequence_descriptor_passes_positional_args_in_order() {
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    dispatcher
        .dispatch_one(
            &CommandDescriptor::new("loaddata", ["users", "groups"]),
            &mut handler,
        )
        .unwrap();

    assert_eq!(
        *log.borrow(),
        vec![(
            "loaddata".to_string(),
            vec!["users".to_string(), "groups".to_string()]
        )]
    );
}

#[test]
fn test_dotted_path_calls_function_with_handler_and_args() {
    let command_log = new_log();
    let function_log = new_log();
    let registry = RecordingRegistry::new(command_log.clone());
    let resolver = FakeResolver::new().recording("myapp.scripts.my_function", function_log.clone());
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();

    {
        let mut handler = Handler::new(&mut out, &settings);
        dispatcher
            .dispatch_one(
                &CommandDescriptor::new("myapp.scripts.my_function", ["arg1", "arg2"]),
                &mut handler,
            )
            .unwrap();
    }

    assert_eq!(
        *function_log.borrow(),
        vec![(
            "myapp.scripts.my_function".to_string(),
            vec!["arg1".to_string(), "arg2".to_string()]
        )]
    );
    assert!(command_log.borrow().is_empty(), "registry must not be touched");
    // The function wrote through the handler it was given
    assert!(out.contains(Style::HttpInfo, "called myapp.scripts.my_function"));
}

#[test]
fn test_failing_command_surfaces_execution_error_with_name() {
    let log = new_log();
    let registry = RecordingRegistry::new(log).failing_on("badcommand");
    let resolver = FakeResolver::new();
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    let err = dispatcher
        .dispatch_one(&CommandDescriptor::bare("badcommand"), &mut handler)
        .unwrap_err();

    match &err {
        SetupError::Execution { name, kind, source } => {
            assert_eq!(name, "badcommand");
            assert_eq!(*kind, CommandKind::RegisteredCommand);
            assert_eq!(source.message(), "Command failed");
        }
        other => panic!("expected Execution, got {:?}", other),
    }
    assert!(err.to_string().contains("Error executing management command 'badcommand'"));
}

#[test]
fn test_unknown_path_surfaces_resolution_error_with_path() {
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    let err = dispatcher
        .dispatch_one(
            &CommandDescriptor::bare("nonexistent.module.function"),
            &mut handler,
        )
        .unwrap_err();

    match &err {
        SetupError::Resolution { path, source } => {
            assert_eq!(path, "nonexistent.module.function");
            assert_eq!(source.kind(), ExErrorKind::NotFound);
        }
        other => panic!("expected Resolution, got {:?}", other),
    }
    assert!(err.to_string().contains("Could not import function"));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_failing_function_surfaces_execution_error_with_path() {
    let log = new_log();
    let registry = RecordingRegistry::new(log);
    let resolver = FakeResolver::new().failing("myapp.scripts.broken");
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    let err = dispatcher
        .dispatch_one(&CommandDescriptor::bare("myapp.scripts.broken"), &mut handler)
        .unwrap_err();

    assert!(matches!(
        &err,
        SetupError::Execution { name, kind: CommandKind::FunctionReference, .. }
            if name == "myapp.scripts.broken"
    ));
    assert_eq!(err.target(), Some("myapp.scripts.broken"));
}

#[test]
fn test_dispatch_all_halts_on_first_failure() {
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone()).failing_on("bad_cmd");
    let resolver = FakeResolver::new();
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    let commands = vec![
        CommandDescriptor::bare("ok_cmd"),
        CommandDescriptor::bare("bad_cmd"),
        CommandDescriptor::bare("ok_cmd_2"),
    ];

    let err = dispatcher.dispatch_all(&commands, &mut handler).unwrap_err();

    assert_eq!(err.target(), Some("bad_cmd"));
    assert_eq!(identifiers(&log), vec!["ok_cmd", "bad_cmd"]);
}

#[test]
fn test_dispatch_all_empty_list_is_noop() {
    let log = new_log();
    let registry = RecordingRegistry::new(log.clone());
    let resolver = FakeResolver::new();
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    dispatcher.dispatch_all(&[], &mut handler).unwrap();

    assert!(log.borrow().is_empty());
}

#[test]
fn test_mixed_descriptor_formats_run_in_order() {
    let command_log = new_log();
    let registry = RecordingRegistry::new(command_log.clone());
    let resolver = FakeResolver::new().recording("app.scripts.sync", command_log.clone());
    let dispatcher = Dispatcher::new(&resolver, &registry);
    let settings = Settings::default();
    let mut out = BufferedOutput::new();
    let mut handler = Handler::new(&mut out, &settings);

    let commands = vec![
        CommandDescriptor::bare("check"),
        CommandDescriptor::new("check", ["--deploy"]),
        CommandDescriptor::bare("app.scripts.sync"),
    ];
    dispatcher.dispatch_all(&commands, &mut handler).unwrap();

    assert_eq!(
        *command_log.borrow(),
        vec![
            ("check".to_string(), vec![]),
            ("check".to_string(), vec!["--deploy".to_string()]),
            ("app.scripts.sync".to_string(), vec![]),
        ]
    );
}
