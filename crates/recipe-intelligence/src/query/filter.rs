// ABOUTME: Multi-field recipe filter with AND across fields and OR within a field
// ABOUTME: Mirrors the predicate the remote store applies for the same filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::collections::HashSet;

use recipe_core::models::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional predicates narrowing a recipe collection
///
/// Present fields are combined with logical AND; values inside one field are
/// combined with logical OR. An absent field, or a present but empty set,
/// imposes no constraint. Unknown fields are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecipeFilter {
    /// Case-insensitive substring matched against title, description and tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Accepted cuisines (exact match)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<HashSet<String>>,
    /// Accepted tags; a recipe matches if it has any of them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashSet<String>>,
    /// Inclusive upper bound on preparation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_prep_time_mins: Option<u32>,
    /// Accepted difficulties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<HashSet<Difficulty>>,
}

impl RecipeFilter {
    /// Filter that matches every recipe
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Set the search term
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Accept an additional cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine
            .get_or_insert_with(HashSet::new)
            .insert(cuisine.into());
        self
    }

    /// Accept an additional tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(HashSet::new).insert(tag.into());
        self
    }

    /// Set the maximum preparation time
    #[must_use]
    pub const fn with_max_prep_time(mut self, mins: u32) -> Self {
        self.max_prep_time_mins = Some(mins);
        self
    }

    /// Accept an additional difficulty
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty
            .get_or_insert_with(HashSet::new)
            .insert(difficulty);
        self
    }

    /// Whether this filter constrains anything at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compile().is_vacuous()
    }

    /// Check a single recipe against the filter
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.compile().matches(recipe)
    }

    fn compile(&self) -> Predicate<'_> {
        Predicate {
            needle: self
                .search
                .as_deref()
                .filter(|term| !term.trim().is_empty())
                .map(str::to_lowercase),
            cuisine: self.cuisine.as_ref().filter(|set| !set.is_empty()),
            tags: self
                .tags
                .as_ref()
                .filter(|set| !set.is_empty())
                .map(|set| set.iter().map(|tag| tag.to_lowercase()).collect()),
            max_prep_time_mins: self.max_prep_time_mins,
            difficulty: self.difficulty.as_ref().filter(|set| !set.is_empty()),
        }
    }
}

/// Filter normalized once per query: lowercased needle and tags, empty sets dropped
struct Predicate<'f> {
    needle: Option<String>,
    cuisine: Option<&'f HashSet<String>>,
    tags: Option<HashSet<String>>,
    max_prep_time_mins: Option<u32>,
    difficulty: Option<&'f HashSet<Difficulty>>,
}

impl Predicate<'_> {
    fn is_vacuous(&self) -> bool {
        self.needle.is_none()
            && self.cuisine.is_none()
            && self.tags.is_none()
            && self.max_prep_time_mins.is_none()
            && self.difficulty.is_none()
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe)
            && self
                .cuisine
                .is_none_or(|cuisines| cuisines.contains(&recipe.cuisine))
            && self
                .tags
                .as_ref()
                .is_none_or(|tags| recipe.tags.iter().any(|tag| tags.contains(tag)))
            && self
                .max_prep_time_mins
                .is_none_or(|max| recipe.prep_time_mins <= max)
            && self
                .difficulty
                .is_none_or(|levels| levels.contains(&recipe.difficulty))
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        recipe.title.to_lowercase().contains(needle)
            || recipe.description.to_lowercase().contains(needle)
            || recipe
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Keep the recipes matching `filter`, preserving input order
#[must_use]
pub fn filter_recipes<'a, I>(recipes: I, filter: &RecipeFilter) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let predicate = filter.compile();
    if predicate.is_vacuous() {
        return recipes.into_iter().collect();
    }

    let matched: Vec<&Recipe> = recipes
        .into_iter()
        .filter(|recipe| predicate.matches(recipe))
        .collect();

    debug!(matched = matched.len(), "Filtered recipes");
    matched
}
