//! Configuration model and loader
//!
//! The whole configuration lives in one TOML file, read once at process
//! start and never mutated afterwards:
//!
//! ```toml
//! environment = "development"
//!
//! [settings]
//! database = ".setup-tools/db.sqlite3"
//!
//! [commands.""]
//! on_initial = [["migrate", "--no-input"], ["createsuperuser", "--no-input"]]
//! always_run = ["setup_tools.scripts.sync_site_id"]
//!
//! [commands.development]
//! on_initial = [["loaddata", "dev_fixtures"]]
//! ```

pub mod descriptor;
pub mod loader;
pub mod phase;
pub mod settings;

pub use descriptor::{CommandDescriptor, CommandKind};
pub use loader::{select_environment, SetupConfig, DEFAULT_CONFIG_FILE, ENVIRONMENT_VAR};
pub use phase::{Configuration, Phase, PhaseCommands, DEFAULT_SCOPE};
pub use settings::{Settings, SiteSettings, StaticDir};
