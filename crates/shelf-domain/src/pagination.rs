//! Page-number pagination with clamping.
//!
//! A requested page outside `1..=total_pages` is never an error: it clamps to
//! the nearest valid page. An empty collection still has one (empty) page.

use serde::Serialize;

/// Pagination parameters for a list query. `per_page` is fixed by the view,
/// `page` comes from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Parse the raw `page` query value leniently.
    ///
    /// - missing, empty or non-numeric → page 1
    /// - zero or negative → page 1
    /// - a numeric value too large for `u64` → `u64::MAX` (clamped later to the last page)
    pub fn from_query(raw: Option<&str>, per_page: u64) -> Self {
        let page = match raw.map(str::trim) {
            None | Some("") => 1,
            Some(s) => match s.parse::<i64>() {
                Ok(n) if n < 1 => 1,
                Ok(n) => n as u64,
                Err(_) if s.chars().all(|c| c.is_ascii_digit()) => u64::MAX,
                Err(_) => 1,
            },
        };
        Self::new(page, per_page)
    }

    /// Resolve the requested page against the number of pages that actually exist.
    pub fn resolve(self, total_pages: u64) -> u64 {
        self.page.clamp(1, total_pages.max(1))
    }
}

/// Number of pages needed for `total_items`; at least one.
pub fn total_pages(total_items: u64, per_page: u64) -> u64 {
    let per_page = per_page.max(1);
    total_items.div_ceil(per_page).max(1)
}

/// One page of results plus the metadata list views need to render pagers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// `page` must already be resolved via [`PageRequest::resolve`].
    pub fn new(items: Vec<T>, page: u64, per_page: u64, total_items: u64) -> Self {
        let total_pages = total_pages(total_items, per_page);
        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Whether the collection spans more than one page.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
