// ABOUTME: Recipe catalog service composing a data source with the query engine and unit converter
// ABOUTME: Handles search paging defaults, recipe lookup, ingredient display, facets, and related recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use recipe_core::models::Recipe;
use recipe_core::pagination::{Page, PaginationParams};
use recipe_intelligence::query::{
    collect_facets, execute_query, related_recipes, RecipeFacets, RecipeQuery,
};
use recipe_intelligence::units::{scale_and_convert, Measurement, UnitSystem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::data::RecipeSource;
use crate::errors::{AppError, AppResult};

/// An ingredient line ready for display at a chosen serving count and unit system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayIngredient {
    /// Ingredient name
    pub name: String,
    /// Scaled and converted quantity; `None` for unmeasured ingredients
    pub measurement: Option<Measurement>,
    /// Preparation note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Read-side recipe service over a [`RecipeSource`]
pub struct RecipeCatalog<S: RecipeSource> {
    source: S,
    config: CatalogConfig,
}

impl<S: RecipeSource> RecipeCatalog<S> {
    /// Create a catalog over `source`
    #[must_use]
    pub const fn new(source: S, config: CatalogConfig) -> Self {
        Self { source, config }
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Apply the default page size when no limit is given and cap the limit
    fn effective_pagination(&self, requested: PaginationParams) -> PaginationParams {
        PaginationParams {
            limit: Some(requested.limit.unwrap_or(self.config.default_page_size)),
            offset: requested.offset,
        }
        .capped(self.config.max_page_size)
    }

    /// Filter, sort, and paginate the collection
    ///
    /// A query without a limit receives the configured default page size, and
    /// any limit above the configured maximum is capped.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load recipes
    pub async fn search(&self, query: &RecipeQuery) -> AppResult<Page<Recipe>> {
        let recipes = self.source.list_recipes().await?;
        let effective = RecipeQuery {
            pagination: self.effective_pagination(query.pagination),
            ..query.clone()
        };

        let page = execute_query(&recipes, &effective).map(Recipe::clone);
        debug!(
            source = self.source.name(),
            total = page.total,
            count = page.count,
            "Recipe search completed"
        );
        Ok(page)
    }

    /// Look up one recipe by slug
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no recipe has the slug, or a source error
    pub async fn recipe(&self, slug: &str) -> AppResult<Recipe> {
        self.source
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe '{slug}'")))
    }

    /// Ingredients of a recipe scaled to `servings` and converted into `system`
    ///
    /// `servings` defaults to the recipe's base servings and `system` to the
    /// configured default unit system.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown slug, `InvalidInput` for zero
    /// servings, and `ValueOutOfRange` if an ingredient cannot be scaled
    pub async fn display_ingredients(
        &self,
        slug: &str,
        servings: Option<u32>,
        system: Option<UnitSystem>,
    ) -> AppResult<Vec<DisplayIngredient>> {
        let recipe = self.recipe(slug).await?;
        self.ingredients_for(&recipe, servings, system)
    }

    /// Ingredients of an already loaded recipe, scaled and converted
    ///
    /// Same defaults as [`Self::display_ingredients`]; the source is not read.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for zero servings and `ValueOutOfRange` if an
    /// ingredient cannot be scaled
    pub fn ingredients_for(
        &self,
        recipe: &Recipe,
        servings: Option<u32>,
        system: Option<UnitSystem>,
    ) -> AppResult<Vec<DisplayIngredient>> {
        let servings = servings.unwrap_or(recipe.base_servings);
        if servings == 0 {
            return Err(AppError::invalid_input("servings must be at least 1"));
        }
        let system = system.unwrap_or(self.config.default_unit_system);

        let mut lines = Vec::with_capacity(recipe.ingredients.len());
        for ingredient in &recipe.ingredients {
            let measurement = match ingredient.measurement() {
                Some((quantity, unit)) => Some(scale_and_convert(
                    quantity,
                    unit,
                    recipe.base_servings,
                    servings,
                    system,
                )?),
                None => None,
            };
            lines.push(DisplayIngredient {
                name: ingredient.name.clone(),
                measurement,
                note: ingredient.note.clone(),
            });
        }

        debug!(
            slug = %recipe.slug,
            servings,
            system = %system,
            lines = lines.len(),
            "Prepared ingredient display"
        );
        Ok(lines)
    }

    /// Distinct cuisines, tags, and difficulties across the collection
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load recipes
    pub async fn facets(&self) -> AppResult<RecipeFacets> {
        let recipes = self.source.list_recipes().await?;
        Ok(collect_facets(&recipes))
    }

    /// Up to `limit` recipes similar to the one with `slug`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown slug, or a source error
    pub async fn related(&self, slug: &str, limit: usize) -> AppResult<Vec<Recipe>> {
        let recipes = self.source.list_recipes().await?;
        let target = recipes
            .iter()
            .find(|recipe| recipe.slug == slug)
            .ok_or_else(|| AppError::not_found(format!("Recipe '{slug}'")))?;

        Ok(related_recipes(target, &recipes, limit)
            .into_iter()
            .cloned()
            .collect())
    }
}
