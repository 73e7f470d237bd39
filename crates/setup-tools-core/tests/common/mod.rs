use setup_tools_core::errors::{ExError, ExErrorKind};
use setup_tools_core::{
    CommandRegistry, FunctionResolver, Handler, InitializationState, ScriptFunction,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Shared call log: (identifier, args) in invocation order
pub type CallLog = Rc<RefCell<Vec<(String, Vec<String>)>>>;

pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

#[allow(dead_code)]
pub fn identifiers(log: &CallLog) -> Vec<String> {
    log.borrow().iter().map(|(id, _)| id.clone()).collect()
}

/// Registry that records every call and fails the configured names
pub struct RecordingRegistry {
    pub log: CallLog,
    pub failing: HashSet<String>,
}

impl RecordingRegistry {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            failing: HashSet::new(),
        }
    }

    #[allow(dead_code)]
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }
}

impl CommandRegistry for RecordingRegistry {
    fn call_command(
        &self,
        name: &str,
        args: &[String],
        handler: &mut Handler<'_>,
    ) -> Result<(), ExError> {
        self.log
            .borrow_mut()
            .push((name.to_string(), args.to_vec()));
        handler.plain(format!("ran {}", name));
        if self.failing.contains(name) {
            return Err(ExError::new(ExErrorKind::Persistence)
                .with_op("call_command")
                .with_message("Command failed"));
        }
        Ok(())
    }
}

/// Fake dotted-path resolver backed by recording closures
pub struct FakeResolver {
    functions: HashMap<String, Box<dyn ScriptFunction>>,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function that records its call and succeeds
    #[allow(dead_code)]
    pub fn recording(mut self, path: &str, log: CallLog) -> Self {
        let name = path.to_string();
        self.functions.insert(
            path.to_string(),
            boxed(move |handler: &mut Handler<'_>, args: &[String]| {
                log.borrow_mut().push((name.clone(), args.to_vec()));
                handler.info(format!("called {}", name));
                Ok(())
            }),
        );
        self
    }

    /// Register a function that fails
    #[allow(dead_code)]
    pub fn failing(mut self, path: &str) -> Self {
        self.functions.insert(
            path.to_string(),
            boxed(|_handler: &mut Handler<'_>, _args: &[String]| {
                Err(ExError::new(ExErrorKind::Persistence).with_message("Database error"))
            }),
        );
        self
    }
}

fn boxed<F>(f: F) -> Box<dyn ScriptFunction>
where
    F: Fn(&mut Handler<'_>, &[String]) -> Result<(), ExError> + 'static,
{
    Box::new(f)
}

impl FunctionResolver for FakeResolver {
    fn resolve(&self, path: &str) -> Result<&dyn ScriptFunction, ExError> {
        self.functions.get(path).map(|f| &**f).ok_or_else(|| {
            ExError::new(ExErrorKind::NotFound)
                .with_target(path)
                .with_message("Module not found")
        })
    }
}

/// Initialization state with a fixed answer
pub enum FakeState {
    Initialized(bool),
    Broken,
}

impl InitializationState for FakeState {
    fn is_initialized(&self) -> Result<bool, ExError> {
        match self {
            FakeState::Initialized(value) => Ok(*value),
            FakeState::Broken => Err(ExError::new(ExErrorKind::Persistence)
                .with_op("has_table")
                .with_message("DB Error")),
        }
    }
}
