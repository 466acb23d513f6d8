pub mod filter;
pub mod sort;

pub use filter::{filter, FilterCriteria};
pub use sort::{sort_institutions, top_n, SortKey};

use std::path::Path;

use crate::institution::Institution;
use crate::loader::{self, LoadError};

/// A full query: filter, then sort, then keep the first `limit` results.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub criteria: FilterCriteria,
    pub sort_by: SortKey,
    pub descending: bool,
    pub limit: i64,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort_by: SortKey::Rank,
            descending: true,
            limit: 5,
        }
    }
}

/// Immutable, in-memory collection of institutions.
///
/// Every query method is a pure function of its arguments and the backing
/// collection, so a `&Directory` can be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    institutions: Vec<Institution>,
}

impl Directory {
    pub fn new(institutions: Vec<Institution>) -> Self {
        Self { institutions }
    }

    pub fn from_csv(path: &Path) -> Result<Self, LoadError> {
        loader::load_csv(path).map(Self::new)
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Institution> {
        let matched = filter(&self.institutions, criteria);
        tracing::debug!(
            total = self.institutions.len(),
            matched = matched.len(),
            "applied filter criteria"
        );
        matched
    }

    pub fn sort<'a>(
        &self,
        institutions: Vec<&'a Institution>,
        key: SortKey,
        descending: bool,
    ) -> Vec<&'a Institution> {
        sort_institutions(institutions, key, descending)
    }

    pub fn top_n<'a>(&self, institutions: &[&'a Institution], n: i64) -> Vec<&'a Institution> {
        top_n(institutions, n)
    }

    pub fn summarize(&self, institutions: &[&Institution]) -> String {
        crate::output::summarize(institutions)
    }

    /// Runs filter → sort → top-N.
    pub fn query(&self, query: &Query) -> Vec<&Institution> {
        let filtered = self.filter(&query.criteria);
        let sorted = self.sort(filtered, query.sort_by, query.descending);
        self.top_n(&sorted, query.limit)
    }
}
