//! Static files settings audit

use setup_tools_core::errors::ExError;
use setup_tools_core::Handler;

pub fn check_static_files_config(
    handler: &mut Handler<'_>,
    _args: &[String],
) -> Result<(), ExError> {
    handler.info("Checking static files configuration...");

    let settings = handler.settings();
    let mut issues = Vec::new();
    if settings.static_url.is_empty() {
        issues.push("STATIC_URL is not configured".to_string());
    }
    if settings.static_root.is_empty() {
        issues.push("STATIC_ROOT is not configured".to_string());
    }
    for dir in &settings.staticfiles_dirs {
        if !dir.path().exists() {
            issues.push(format!(
                "Static files directory does not exist: {}",
                dir.path().display()
            ));
        }
    }

    if issues.is_empty() {
        handler.success("Static files configuration looks good");
    } else {
        for issue in issues {
            handler.error(issue);
        }
    }
    Ok(())
}
