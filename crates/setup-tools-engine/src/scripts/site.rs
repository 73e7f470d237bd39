//! Keep the configured site record in sync

use setup_tools_core::errors::ExError;
use setup_tools_core::Handler;
use setup_tools_store::repo::{Site, SiteRepo};
use setup_tools_store::Database;

/// Upsert the site named by `settings.site`
///
/// Database errors propagate and stop the run.
pub fn sync_site_id(db: &Database, handler: &mut Handler<'_>, _args: &[String]) -> Result<(), ExError> {
    handler.info("Synchronizing site object...");

    let configured = &handler.settings().site;
    let site = Site {
        id: configured.id,
        domain: configured.domain.clone(),
        name: configured.name.clone(),
    };

    let created = db.with_conn(|conn| SiteRepo::upsert(conn, &site))?;

    let verb = if created { "Created" } else { "Updated" };
    handler.plain(format!("{} site: {}", verb, site.name));
    handler.plain(format!("Domain: {}", site.domain));
    Ok(())
}
