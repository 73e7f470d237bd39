//! Environment configuration audit

use setup_tools_core::errors::ExError;
use setup_tools_core::Handler;

/// Audit against the process environment
pub fn verify_environment_config(handler: &mut Handler<'_>, _args: &[String]) -> Result<(), ExError> {
    audit_environment(handler, |key| std::env::var(key).ok());
    Ok(())
}

/// Report missing required settings as errors and unset recommended
/// variables as warnings
///
/// Returns true when every required setting is present.
pub fn audit_environment(handler: &mut Handler<'_>, lookup: impl Fn(&str) -> Option<String>) -> bool {
    handler.info("Verifying environment configuration...");

    let settings = handler.settings();
    let mut errors = Vec::new();
    if settings.secret_key.expose().is_empty() {
        errors.push("SECRET_KEY is not set");
    }
    if settings.allowed_hosts.is_empty() {
        errors.push("ALLOWED_HOSTS is not set");
    }

    let unset: Vec<String> = settings
        .recommended_env
        .iter()
        .filter(|key| lookup(key).map_or(true, |value| value.is_empty()))
        .cloned()
        .collect();

    for key in &unset {
        handler.warning(format!("Environment variable {} is not set", key));
    }

    if errors.is_empty() {
        handler.success("Required configuration is present");
        true
    } else {
        for error in &errors {
            handler.error(*error);
        }
        false
    }
}
