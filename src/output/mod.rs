pub mod formatter;

pub use formatter::{
    format_detail, format_institution_line, format_json, format_naira, format_table, format_tsv,
    group_thousands, should_use_colors, summarize, NO_MATCHES,
};

use serde::{Deserialize, Serialize};

/// How query results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered summary with banner
    #[default]
    Table,
    /// Tab-separated rows for scripting
    Tsv,
    /// JSON array
    Json,
}
