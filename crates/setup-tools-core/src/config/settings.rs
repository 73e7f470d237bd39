//! Host application settings consumed by the built-in commands and scripts

use serde::Deserialize;
use setup_tools_core_types::Sensitive;
use std::path::{Path, PathBuf};

/// Database file used when `settings.database` is not set
pub const DEFAULT_DATABASE_PATH: &str = ".setup-tools/db.sqlite3";

/// Settings table of the configuration file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite database file
    pub database: PathBuf,
    pub secret_key: Sensitive<String>,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub site: SiteSettings,
    pub static_url: String,
    pub static_root: String,
    pub staticfiles_dirs: Vec<StaticDir>,
    /// Directory backing the file cache cleared by `clear_cache`
    pub cache_dir: Option<PathBuf>,
    /// Log files whose parent directories `setup_log_directories` creates
    pub log_files: Vec<PathBuf>,
    /// Directories searched by `loaddata` for fixtures given by name
    pub fixture_dirs: Vec<PathBuf>,
    /// Environment variables reported as warnings when unset
    pub recommended_env: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            secret_key: Sensitive::default(),
            debug: false,
            allowed_hosts: Vec::new(),
            site: SiteSettings::default(),
            static_url: String::new(),
            static_root: String::new(),
            staticfiles_dirs: Vec::new(),
            cache_dir: None,
            log_files: Vec::new(),
            fixture_dirs: Vec::new(),
            recommended_env: vec![
                "DATABASE_URL".to_string(),
                "REDIS_URL".to_string(),
                "EMAIL_HOST".to_string(),
            ],
        }
    }
}

/// The site record kept in sync by `sync_site_id`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub id: i64,
    pub domain: String,
    pub name: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: 1,
            domain: "example.com".to_string(),
            name: "example.com".to_string(),
        }
    }
}

/// An extra static files directory, optionally namespaced
///
/// Written either as `"assets"` or as `["vendor", "third_party/static"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StaticDir {
    Path(PathBuf),
    Namespaced(String, PathBuf),
}

impl StaticDir {
    /// The directory on disk, ignoring any namespace
    pub fn path(&self) -> &Path {
        match self {
            StaticDir::Path(path) | StaticDir::Namespaced(_, path) => path,
        }
    }
}
