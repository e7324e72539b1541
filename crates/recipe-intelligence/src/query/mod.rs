// ABOUTME: Recipe query engine: filter, sort, and paginate in-memory collections
// ABOUTME: Results must match the remote store's answer for the same query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

//! # Query Module
//!
//! Deterministic in-memory querying of recipe collections. A query is always
//! applied as filter → sort → paginate, and the pre-pagination match count is
//! reported alongside the page.
//!
//! ```rust
//! use recipe_core::models::Recipe;
//! use recipe_core::pagination::PaginationParams;
//! use recipe_intelligence::query::{execute_query, RecipeFilter, RecipeQuery};
//!
//! let recipes = vec![
//!     Recipe::new("1", "shepherds-pie", "Shepherd's Pie", "British"),
//!     Recipe::new("2", "pad-thai", "Pad Thai", "Thai"),
//! ];
//! let query = RecipeQuery {
//!     filter: RecipeFilter::any().with_search("pie"),
//!     sort: None,
//!     pagination: PaginationParams::page(10, 0),
//! };
//! let page = execute_query(&recipes, &query);
//! assert_eq!(page.total, 1);
//! assert_eq!(page.items[0].slug, "shepherds-pie");
//! ```

/// Distinct filterable values of a collection
pub mod facets;
/// Multi-field recipe filter
pub mod filter;
/// Similar-recipe ranking
pub mod related;
/// Field/direction sorting
pub mod sort;

pub use facets::{collect_facets, RecipeFacets};
pub use filter::{filter_recipes, RecipeFilter};
pub use related::related_recipes;
pub use sort::{sort_recipes, SortDirection, SortField, SortSpec};

use recipe_core::models::Recipe;
use recipe_core::pagination::{paginate, Page, PaginationParams};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Filter, optional sort, and pagination applied together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecipeQuery {
    /// Predicates narrowing the collection
    #[serde(default)]
    pub filter: RecipeFilter,
    /// Ordering; `None` keeps the input order
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// Page to return
    #[serde(default)]
    pub pagination: PaginationParams,
}

/// Run `query` against `recipes`: filter, then sort, then paginate
///
/// `total` on the returned page is the match count before pagination.
#[must_use]
pub fn execute_query<'a>(recipes: &'a [Recipe], query: &RecipeQuery) -> Page<&'a Recipe> {
    let matched = filter_recipes(recipes, &query.filter);
    let total = matched.len();

    let ordered = match query.sort {
        Some(spec) => sort_recipes(matched, spec),
        None => matched,
    };

    let items = paginate(&ordered, query.pagination);
    debug!(
        input = recipes.len(),
        total,
        returned = items.len(),
        "Executed recipe query"
    );

    Page::new(items, total, query.pagination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_counts_before_pagination() {
        let recipes: Vec<Recipe> = (1..=7)
            .map(|i| Recipe::new(i.to_string(), format!("r{i}"), format!("Pie {i}"), "British"))
            .collect();
        let query = RecipeQuery {
            filter: RecipeFilter::any().with_search("pie"),
            sort: Some(SortSpec::new(SortField::Title, SortDirection::Desc)),
            pagination: PaginationParams::page(3, 0),
        };

        let page = execute_query(&recipes, &query);
        assert_eq!(page.total, 7);
        assert_eq!(page.count, 3);
        assert_eq!(page.page_count(), Some(3));
        assert_eq!(page.items[0].title, "Pie 7");
        assert!(page.has_more);
    }

    #[test]
    fn test_query_deserializes_from_camel_case() {
        let query: RecipeQuery = serde_json::from_str(
            r#"{
                "filter": {"cuisine": ["British"], "maxPrepTimeMins": 30},
                "sort": {"field": "datePublished", "direction": "desc"},
                "pagination": {"limit": 12, "offset": 24}
            }"#,
        )
        .unwrap();
        assert_eq!(query.sort, Some(SortSpec::newest_first()));
        assert_eq!(query.pagination, PaginationParams::page(12, 24));
    }
}
