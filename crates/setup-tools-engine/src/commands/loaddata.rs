//! `loaddata`: install YAML fixtures

use crate::commands::parse_args;
use clap::Parser;
use setup_tools_core::errors::ExError;
use setup_tools_core::{Handler, ManagementCommand};
use setup_tools_store::fixtures::{find_fixture, parse_fixture_file};
use setup_tools_store::repo::FixtureRepo;
use setup_tools_store::Database;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "loaddata")]
struct LoadDataArgs {
    /// Fixture paths, or names looked up in `fixture_dirs`
    #[arg(required = true)]
    fixtures: Vec<String>,
}

pub struct LoadData {
    db: Rc<Database>,
}

impl LoadData {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

impl ManagementCommand for LoadData {
    fn name(&self) -> &str {
        "loaddata"
    }

    fn help(&self) -> &str {
        "Install records from YAML fixtures"
    }

    fn handle(&self, handler: &mut Handler<'_>, args: &[String]) -> Result<(), ExError> {
        let args = parse_args::<LoadDataArgs>(self.name(), args)?;

        // Resolve and parse everything before writing anything
        let mut fixtures = Vec::with_capacity(args.fixtures.len());
        for name in &args.fixtures {
            let path = find_fixture(name, &handler.settings().fixture_dirs)?;
            let records = parse_fixture_file(&path).map_err(|e| e.with_target(name.clone()))?;
            fixtures.push((path, records));
        }

        let mut installed = 0;
        for (path, records) in &fixtures {
            let source = path.display().to_string();
            installed += self
                .db
                .with_conn_mut(|conn| FixtureRepo::upsert_all(conn, records, Some(&source)))?;
        }

        handler.success(format!(
            "Installed {} object(s) from {} fixture(s)",
            installed,
            fixtures.len()
        ));
        Ok(())
    }
}
