// ABOUTME: Recipe source that reads a JSON array of recipes from disk
// ABOUTME: Every record is validated on load so malformed data fails fast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::path::PathBuf;

use async_trait::async_trait;
use recipe_core::models::Recipe;
use tokio::fs;
use tracing::{info, warn};

use super::RecipeSource;
use crate::errors::{AppError, AppResult};

/// Recipe source backed by a JSON file containing an array of recipes
///
/// The file is read on every call; there is no cache.
#[derive(Debug, Clone)]
pub struct JsonFileRecipeSource {
    path: PathBuf,
}

impl JsonFileRecipeSource {
    /// Create a source for the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecipeSource for JsonFileRecipeSource {
    fn name(&self) -> &'static str {
        "json_file"
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Failed to read recipe file");
            AppError::storage(format!(
                "Failed to read recipe file {}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        let recipes: Vec<Recipe> = serde_json::from_str(&raw).map_err(|e| {
            AppError::serialization(format!(
                "Invalid recipe file {}: {e}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        for recipe in &recipes {
            recipe.validate().inspect_err(|e| {
                warn!(slug = %recipe.slug, error = %e.message, "Rejected invalid recipe record");
            })?;
        }

        info!(
            path = %self.path.display(),
            count = recipes.len(),
            "Loaded recipes from file"
        );
        Ok(recipes)
    }
}
