//! Log directory preparation

use setup_tools_core::errors::ExError;
use setup_tools_core::Handler;
use std::fs;

/// Create the parent directory of every configured log file
pub fn setup_log_directories(handler: &mut Handler<'_>, _args: &[String]) -> Result<(), ExError> {
    handler.info("Setting up log directories...");

    let log_files = handler.settings().log_files.clone();
    if log_files.is_empty() {
        handler.warning("No file-based log handlers configured");
        return Ok(());
    }

    for file in &log_files {
        let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
            continue;
        };
        match fs::create_dir_all(parent) {
            Ok(()) => handler.success(format!("Log directory ready: {}", parent.display())),
            Err(e) => handler.error(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            )),
        }
    }
    Ok(())
}
