// ABOUTME: Recipe data source abstraction for the catalog
// ABOUTME: Defines the RecipeSource trait with in-memory and JSON file implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

//! # Recipe Data Sources
//!
//! The catalog reads recipes through [`RecipeSource`]. Every source returns
//! the full collection in a stable order; querying happens in memory.

/// JSON file backed source
pub mod json_file;
/// Fixed in-memory source
pub mod memory;

pub use json_file::JsonFileRecipeSource;
pub use memory::InMemoryRecipeSource;

use async_trait::async_trait;
use recipe_core::models::Recipe;

use crate::errors::AppResult;

/// A provider of the published recipe collection
///
/// Implementations must be `Send + Sync` so a catalog can be shared across
/// async tasks.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Load every recipe, in the source's stable order
    async fn list_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Find one recipe by slug
    ///
    /// The default scans [`RecipeSource::list_recipes`].
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Recipe>> {
        Ok(self
            .list_recipes()
            .await?
            .into_iter()
            .find(|recipe| recipe.slug == slug))
    }
}
