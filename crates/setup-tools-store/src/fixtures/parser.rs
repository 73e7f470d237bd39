//! Fixture parser with validation
//!
//! Parses YAML and validates model labels and key uniqueness

use crate::errors::{fixture_not_found, fixture_validation, Result};
use crate::fixtures::format::{Fixture, FixtureRecord};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions tried, in order, when a fixture is named without one
pub const FIXTURE_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Parse a fixture file from a path
pub fn parse_fixture_file(path: &Path) -> Result<Fixture> {
    let content = fs::read_to_string(path).map_err(|e| {
        fixture_validation(&format!(
            "Failed to read fixture file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_fixture_str(&content)
}

/// Parse a fixture from a string
///
/// An empty document is an empty fixture.
pub fn parse_fixture_str(content: &str) -> Result<Fixture> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let fixture: Fixture = serde_yaml::from_str(content)
        .map_err(|e| fixture_validation(&format!("YAML parse error: {}", e)))?;

    validate_fixture(&fixture)?;

    Ok(fixture)
}

fn validate_fixture(fixture: &[FixtureRecord]) -> Result<()> {
    let mut seen = HashSet::new();

    for record in fixture {
        let valid_label = record
            .model
            .split_once('.')
            .map(|(app, model)| !app.is_empty() && !model.is_empty() && !model.contains('.'))
            .unwrap_or(false);
        if !valid_label {
            return Err(fixture_validation(&format!(
                "Invalid model label '{}': expected 'app_label.model_name'",
                record.model
            )));
        }

        if !seen.insert((record.model.as_str(), record.pk.to_string())) {
            return Err(fixture_validation(&format!(
                "Duplicate record {} pk={} in fixture",
                record.model, record.pk
            )));
        }
    }

    Ok(())
}

/// Locate a fixture by path or by name
///
/// An existing path is used as-is. Otherwise each directory in `dirs` is
/// searched for `name`, then `name.yaml`, then `name.yml`.
pub fn find_fixture(name: &str, dirs: &[PathBuf]) -> Result<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    for dir in dirs {
        let exact = dir.join(name);
        if exact.is_file() {
            return Ok(exact);
        }
        for ext in FIXTURE_EXTENSIONS {
            let candidate = dir.join(format!("{}.{}", name, ext));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(fixture_not_found(name))
}
