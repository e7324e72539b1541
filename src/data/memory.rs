// ABOUTME: In-memory recipe source holding a fixed collection
// ABOUTME: Used by tests, benchmarks, and callers that already hold the recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::sync::Arc;

use async_trait::async_trait;
use recipe_core::models::Recipe;

use super::RecipeSource;
use crate::errors::AppResult;

/// Recipe source over a shared, immutable collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeSource {
    recipes: Arc<[Recipe]>,
}

impl InMemoryRecipeSource {
    /// Wrap a collection; order is preserved
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into(),
        }
    }
}

impl From<Vec<Recipe>> for InMemoryRecipeSource {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}

#[async_trait]
impl RecipeSource for InMemoryRecipeSource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.recipes.to_vec())
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .find(|recipe| recipe.slug == slug)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_preserves_order_and_finds_by_slug() {
        let source = InMemoryRecipeSource::new(vec![
            Recipe::new("2", "b", "B", "Thai"),
            Recipe::new("1", "a", "A", "Thai"),
        ]);

        let ids: Vec<String> = source
            .list_recipes()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["2", "1"]);

        assert_eq!(source.find_by_slug("a").await.unwrap().unwrap().id, "1");
        assert!(source.find_by_slug("zzz").await.unwrap().is_none());
    }
}
