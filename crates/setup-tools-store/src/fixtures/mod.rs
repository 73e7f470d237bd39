//! YAML fixtures
//!
//! A fixture is a list of records, each naming a model label, a primary key
//! and a map of field values:
//!
//! ```yaml
//! - model: auth.group
//!   pk: 1
//!   fields:
//!     name: editors
//! ```

pub mod format;
pub mod parser;

pub use format::{Fixture, FixtureRecord, PrimaryKey};
pub use parser::{find_fixture, parse_fixture_file, parse_fixture_str, FIXTURE_EXTENSIONS};
