//! Fixture file schema

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parsed fixture file
pub type Fixture = Vec<FixtureRecord>;

/// Record primary key, integer or string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKey::Int(n) => write!(f, "{}", n),
            PrimaryKey::Text(s) => f.write_str(s),
        }
    }
}

/// One record of a fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureRecord {
    /// `app_label.model_name`
    pub model: String,

    pub pk: PrimaryKey,

    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
}
