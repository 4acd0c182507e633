//! Query parameters for the defense log listing

use std::collections::BTreeMap;

/// Filters for `GET /logs`
///
/// `limit` is optional; the server applies its own default when it is left
/// out. Any other filter is passed through as a plain string parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    limit: Option<u32>,
    filters: BTreeMap<String, String>,
}

impl LogQuery {
    /// Query with no limit or filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap on the number of entries returned.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.filters.remove("limit");
        self.limit = Some(limit);
        self
    }

    /// Add a filter parameter. `limit` set through here and through
    /// [`LogQuery::limit`] replace each other.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key == "limit" {
            self.limit = None;
        }
        self.filters.insert(key, value.into());
        self
    }

    /// Whether neither a limit nor a filter is set.
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.filters.is_empty()
    }

    /// Query pairs in a stable order: `limit` first, then filters by key.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 1);
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs.extend(self.filters.iter().map(|(key, value)| (key.clone(), value.clone())));
        pairs
    }
}
