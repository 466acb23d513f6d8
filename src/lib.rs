//! Lagos tertiary institution directory.
//!
//! Loads institutions from CSV, scores each one with category-specific
//! weights, and answers filter / sort / top-N queries over the collection.

pub mod config;
pub mod directory;
pub mod institution;
pub mod loader;
pub mod logging;
pub mod output;
pub mod scoring;

pub use directory::{Directory, FilterCriteria, Query, SortKey};
pub use institution::{Category, Institution, Ownership};
pub use loader::LoadError;
