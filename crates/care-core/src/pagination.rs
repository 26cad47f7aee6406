//! List queries and pagination.
//!
//! The server pages with `page`, `limit`, `search`, `sortBy`, and
//! `sortOrder`, and answers with
//! `{ data, pagination: { currentPage, totalPages, totalItems, itemsPerPage } }`.
//! Clients work with the shorter [`Pagination`] shape
//! (`page`, `pages`, `total`, `limit`).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SortOrder;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Parameters for one list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    /// Resource-specific filters (`status`, `severity`, `includeDeleted`, ...).
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
            sort_by: None,
            sort_order: None,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(order);
        self
    }

    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Query parameters in wire order. Blank search strings are dropped.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = self.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder".to_string(), order.as_str().to_string()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }
}

/// Client-side pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            pages: 0,
            total: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Metadata for an unpaginated response holding `len` items.
    #[must_use]
    pub fn single_page(len: usize) -> Self {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        Self {
            page: 1,
            pages: 1,
            total: u64::from(len),
            limit: len,
        }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Account for one record removed from the current page.
    pub fn record_removed(&mut self) {
        self.total = self.total.saturating_sub(1);
        if self.limit > 0 {
            let pages = self.total.div_ceil(u64::from(self.limit));
            self.pages = u32::try_from(pages).unwrap_or(u32::MAX);
        }
    }
}

/// Pagination block as the server sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerPagination {
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items_per_page: u32,
}

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

impl From<ServerPagination> for Pagination {
    fn from(p: ServerPagination) -> Self {
        Self {
            page: p.current_page,
            pages: p.total_pages,
            total: p.total_items,
            limit: p.items_per_page,
        }
    }
}

/// `{ data: [...], pagination? }` list envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<ServerPagination>,
}

/// One page of records with client-side pagination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl<T> From<ListEnvelope<T>> for Page<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        let pagination = envelope
            .pagination
            .map_or_else(|| Pagination::single_page(envelope.data.len()), Pagination::from);
        Self {
            items: envelope.data,
            pagination,
        }
    }
}
