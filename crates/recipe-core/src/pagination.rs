// ABOUTME: Offset pagination for recipe listings
// ABOUTME: Slices ordered results and reports totals for page-count rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use serde::{Deserialize, Serialize};

/// Pagination parameters for offset-based queries
///
/// Both fields are optional; with neither set, [`paginate`] returns the
/// whole input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginationParams {
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<usize>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: Option<usize>,
}

impl PaginationParams {
    /// No pagination: return everything
    #[must_use]
    pub const fn all() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    /// A page of `limit` items starting at `offset`
    #[must_use]
    pub const fn page(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Whether neither limit nor offset is set
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }

    /// Clamp the requested limit to `max`
    #[must_use]
    pub fn capped(self, max: usize) -> Self {
        Self {
            limit: self.limit.map(|limit| limit.min(max)),
            offset: self.offset,
        }
    }
}

/// Take the `[offset, offset + limit)` slice of `items`
///
/// A missing offset means zero; a missing limit extends to the end. Bounds
/// past the end of the input yield a shorter (possibly empty) slice.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], params: PaginationParams) -> Vec<T> {
    if params.is_unbounded() {
        return items.to_vec();
    }

    let start = params.offset.unwrap_or(0).min(items.len());
    let end = params
        .limit
        .map_or(items.len(), |limit| start.saturating_add(limit))
        .min(items.len());

    items[start..end].to_vec()
}

/// One page of results plus the pre-pagination total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Number of matching items before pagination
    pub total: usize,
    /// Number of items in this page
    pub count: usize,
    /// Whether there are more items after this page
    pub has_more: bool,
    /// Pagination applied to produce this page
    pub params: PaginationParams,
}

impl<T> Page<T> {
    /// Create a page from its items, the unpaginated total, and the params used
    #[must_use]
    pub fn new(items: Vec<T>, total: usize, params: PaginationParams) -> Self {
        let count = items.len();
        let consumed = params.offset.unwrap_or(0).saturating_add(count);
        Self {
            items,
            total,
            count,
            has_more: consumed < total,
            params,
        }
    }

    /// Number of pages, `ceil(total / limit)`
    ///
    /// `None` when no positive limit was requested.
    #[must_use]
    pub fn page_count(&self) -> Option<usize> {
        match self.params.limit {
            Some(limit) if limit > 0 => Some(self.total.div_ceil(limit)),
            _ => None,
        }
    }

    /// Map the items of this page, keeping its metadata
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            count: self.count,
            has_more: self.has_more,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_returns_input() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, PaginationParams::all()), vec![1, 2, 3]);
    }

    #[test]
    fn test_slice_in_middle() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, PaginationParams::page(3, 3)), vec![4, 5, 6]);
    }

    #[test]
    fn test_offset_only_extends_to_end() {
        let items: Vec<u32> = (1..=5).collect();
        let params = PaginationParams {
            limit: None,
            offset: Some(3),
        };
        assert_eq!(paginate(&items, params), vec![4, 5]);
    }

    #[test]
    fn test_limit_only_starts_at_zero() {
        let items: Vec<u32> = (1..=5).collect();
        let params = PaginationParams {
            limit: Some(2),
            offset: None,
        };
        assert_eq!(paginate(&items, params), vec![1, 2]);
    }

    #[test]
    fn test_out_of_range_offset_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, PaginationParams::page(5, 10)).is_empty());
        assert!(paginate(&items, PaginationParams::page(0, 0)).is_empty());
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![4, 5, 6], 10, PaginationParams::page(3, 3));
        assert_eq!(page.count, 3);
        assert!(page.has_more);
        assert_eq!(page.page_count(), Some(4));

        let last = Page::new(vec![10], 10, PaginationParams::page(3, 9));
        assert!(!last.has_more);
    }

    #[test]
    fn test_page_count_without_limit() {
        let page = Page::new(vec![1, 2], 2, PaginationParams::all());
        assert_eq!(page.page_count(), None);
        let zero = Page::<u8>::new(Vec::new(), 2, PaginationParams::page(0, 0));
        assert_eq!(zero.page_count(), None);
    }

    #[test]
    fn test_capped_limit() {
        let params = PaginationParams::page(500, 0).capped(100);
        assert_eq!(params.limit, Some(100));
    }
}
