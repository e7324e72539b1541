// ABOUTME: Distinct cuisines, tags, and difficulties of a recipe collection
// ABOUTME: Feeds the options offered by filter controls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::collections::BTreeSet;

use recipe_core::models::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};

/// Filterable values present in a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFacets {
    /// Distinct cuisines, sorted
    pub cuisines: BTreeSet<String>,
    /// Distinct tags, sorted
    pub tags: BTreeSet<String>,
    /// Difficulties present, in display order (Easy, Medium, Hard)
    pub difficulties: Vec<Difficulty>,
}

/// Collect the facets of `recipes`
#[must_use]
pub fn collect_facets<'a, I>(recipes: I) -> RecipeFacets
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut facets = RecipeFacets::default();
    let mut seen = [false; Difficulty::ALL.len()];

    for recipe in recipes {
        facets.cuisines.insert(recipe.cuisine.clone());
        facets.tags.extend(recipe.tags.iter().cloned());
        if let Some(index) = Difficulty::ALL.iter().position(|d| *d == recipe.difficulty) {
            seen[index] = true;
        }
    }

    facets.difficulties = Difficulty::ALL
        .into_iter()
        .zip(seen)
        .filter_map(|(difficulty, present)| present.then_some(difficulty))
        .collect();
    facets
}
