use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::directory::SortKey;
use crate::output::OutputFormat;

pub const DEFAULT_DATASET: &str = "institutions_sample.csv";
pub const DEFAULT_TOP: i64 = 5;

/// Query defaults read from `config.yaml`. Every key is optional; command-line
/// flags take precedence over anything set here.
///
/// Example YAML:
/// ```yaml
/// dataset: /srv/data/lagos_institutions.csv
/// top: 10
/// sort_by: accreditation
/// ascending: false
/// format: table
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    #[serde(default)]
    pub top: Option<i64>,

    /// One of rank, tuition, accreditation, name, population.
    /// Unknown names fall back to rank.
    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde(default)]
    pub ascending: Option<bool>,

    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn dataset(&self) -> PathBuf {
        self.dataset
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
    }

    pub fn top(&self) -> i64 {
        self.top.unwrap_or(DEFAULT_TOP)
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn ascending(&self) -> bool {
        self.ascending.unwrap_or(false)
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Resolve a user-supplied sort key name, warning when it falls back to rank.
pub fn resolve_sort_key(name: Option<&str>) -> SortKey {
    match name {
        None => SortKey::default(),
        Some(name) => name.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to '{}'", e, SortKey::default());
            SortKey::default()
        }),
    }
}
