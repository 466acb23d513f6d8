pub mod types;

pub use types::{Category, Institution, Ownership, ParseLabelError};
