//! `check`: inspect settings and database for problems

use crate::commands::parse_args;
use clap::Parser;
use setup_tools_core::errors::{ExError, ExErrorKind};
use setup_tools_core::{Handler, ManagementCommand, Settings};
use setup_tools_store::errors::from_rusqlite;
use setup_tools_store::Database;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "check")]
struct CheckArgs {
    /// Also apply deployment checks
    #[arg(long)]
    deploy: bool,
}

pub struct Check {
    db: Rc<Database>,
}

impl Check {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

/// Settings problems, general checks first
pub fn settings_issues(settings: &Settings, deploy: bool) -> Vec<String> {
    let mut issues = Vec::new();

    if settings.site.domain.trim().is_empty() {
        issues.push("(sites.E001) The site domain must not be empty.".to_string());
    }
    if !settings.debug && settings.allowed_hosts.is_empty() {
        issues.push("(hosts.E001) ALLOWED_HOSTS must not be empty when DEBUG is off.".to_string());
    }

    if deploy {
        if settings.debug {
            issues.push(
                "(security.W018) DEBUG should not be set to true in deployment.".to_string(),
            );
        }
        if settings.secret_key.expose().is_empty() {
            issues.push("(security.W009) SECRET_KEY must not be empty in deployment.".to_string());
        }
    }

    issues
}

impl ManagementCommand for Check {
    fn name(&self) -> &str {
        "check"
    }

    fn help(&self) -> &str {
        "Check settings and database; --deploy adds deployment checks"
    }

    fn handle(&self, handler: &mut Handler<'_>, args: &[String]) -> Result<(), ExError> {
        let args = parse_args::<CheckArgs>(self.name(), args)?;

        let mut issues = settings_issues(handler.settings(), args.deploy);
        let reachable = self.db.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(from_rusqlite)
        });
        if let Err(e) = reachable {
            issues.push(format!("(database.E001) Database is not reachable: {}", e.message()));
        }

        if issues.is_empty() {
            handler.success("System check identified no issues (0 silenced).");
            return Ok(());
        }

        handler.error("System check identified some issues:");
        for issue in &issues {
            handler.error(format!("  {}", issue));
        }
        Err(ExError::new(ExErrorKind::InvalidConfig)
            .with_op("check")
            .with_message(format!(
                "System check identified {} issue(s)",
                issues.len()
            )))
    }
}
