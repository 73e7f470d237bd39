//! Phase resolution
//!
//! Flattens the environment-scoped configuration into the ordered command
//! list for one phase. Missing scopes and missing phases resolve to nothing;
//! resolution never fails.

use crate::config::{CommandDescriptor, Configuration, Phase, DEFAULT_SCOPE};

/// Resolve the ordered commands for `phase` under `environment`
///
/// Default-scope commands come first, followed by the environment's own
/// commands when `environment` is non-empty. Order is preserved and
/// duplicates are kept.
pub fn resolve(config: &Configuration, environment: &str, phase: Phase) -> Vec<CommandDescriptor> {
    let mut commands = scope_commands(config, DEFAULT_SCOPE, phase).to_vec();

    if !environment.is_empty() {
        commands.extend_from_slice(scope_commands(config, environment, phase));
    }

    commands
}

fn scope_commands<'a>(
    config: &'a Configuration,
    scope: &str,
    phase: Phase,
) -> &'a [CommandDescriptor] {
    config
        .scope(scope)
        .map(|commands| commands.commands(phase))
        .unwrap_or(&[])
}
