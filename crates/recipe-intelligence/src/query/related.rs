// ABOUTME: Ranks other recipes by similarity to a given recipe
// ABOUTME: Similarity is shared tag count plus one for a matching cuisine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::cmp::Reverse;

use recipe_core::models::Recipe;

fn similarity(target: &Recipe, candidate: &Recipe) -> usize {
    let shared_tags = candidate
        .tags
        .iter()
        .filter(|tag| target.tags.contains(tag))
        .count();
    shared_tags + usize::from(candidate.cuisine == target.cuisine)
}

/// Recipes most similar to `target`, best first, at most `limit`
///
/// The target itself (same id) and recipes with no similarity are excluded.
/// Equal scores keep collection order.
#[must_use]
pub fn related_recipes<'a, I>(target: &Recipe, recipes: I, limit: usize) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut scored: Vec<(usize, &'a Recipe)> = recipes
        .into_iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| (similarity(target, candidate), candidate))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by_key(|(score, _)| Reverse(*score));
    scored.truncate(limit);
    scored.into_iter().map(|(_, recipe)| recipe).collect()
}
