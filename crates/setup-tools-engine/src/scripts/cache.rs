//! File cache clearing

use setup_tools_core::errors::ExError;
use setup_tools_core::Handler;
use std::fs;
use std::io;
use std::path::Path;

pub fn clear_cache(handler: &mut Handler<'_>, _args: &[String]) -> Result<(), ExError> {
    handler.info("Clearing cache...");

    let Some(dir) = handler.settings().cache_dir.clone() else {
        handler.warning("No cache directory configured; nothing to clear.");
        return Ok(());
    };

    match remove_entries(&dir) {
        Ok(removed) => handler.success(format!("Cache cleared successfully ({} entries)", removed)),
        Err(e) => handler.error(format!("Error clearing cache: {}", e)),
    }
    Ok(())
}

/// Remove everything under `dir`, keeping `dir` itself
fn remove_entries(dir: &Path) -> io::Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }
    Ok(removed)
}
