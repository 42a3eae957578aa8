//! Listing view: filter, search, sort, limit
//!
//! # Execution order
//!
//! 1. Keep records passing the filter preset
//! 2. Keep records whose name contains the search term, ignoring case
//! 3. Stable sort by the ordering policy, if any
//! 4. Truncate to the limit, if any

use crate::ordering::{contains_ignore_case, OrderingPolicy};
use crate::record::Employee;

use super::filters::FilterPreset;

/// A listing request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewQuery {
    /// Narrowing applied first
    pub filter: FilterPreset,
    /// Name substring; blank terms are ignored
    pub search: Option<String>,
    /// Sort policy; `None` keeps store order
    pub sort: Option<OrderingPolicy>,
    /// Maximum number of records returned
    pub limit: Option<usize>,
}

impl ViewQuery {
    /// A view of every record in store order
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: FilterPreset) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_sort(mut self, policy: OrderingPolicy) -> Self {
        self.sort = Some(policy);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The trimmed search term, or `None` if blank
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Runs the view over records in store order
    pub fn run<'a, K, I>(&self, records: I) -> Vec<Employee<K>>
    where
        K: Clone + 'a,
        I: IntoIterator<Item = &'a Employee<K>>,
    {
        let term = self.search_term();

        let mut results: Vec<Employee<K>> = records
            .into_iter()
            .filter(|e| self.filter.matches(e))
            .filter(|e| term.map_or(true, |t| contains_ignore_case(e.name(), t)))
            .cloned()
            .collect();

        if let Some(policy) = self.sort {
            policy.sort(&mut results);
        }

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }
}
