// ABOUTME: Catalog commands: search, show, related, and facets
// ABOUTME: Builds a RecipeQuery from CLI flags and prints catalog results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use anyhow::Result;
use recipe_book::data::RecipeSource;
use recipe_book::services::RecipeCatalog;
use recipe_core::pagination::PaginationParams;
use recipe_intelligence::query::{RecipeFilter, RecipeQuery, SortDirection, SortSpec};
use recipe_intelligence::units::UnitSystem;
use serde_json::json;

use super::{print_json, SearchArgs};

fn build_query(args: SearchArgs) -> RecipeQuery {
    let mut filter = RecipeFilter::any();
    if let Some(search) = args.search {
        filter = filter.with_search(search);
    }
    for cuisine in args.cuisines {
        filter = filter.with_cuisine(cuisine);
    }
    for tag in args.tags {
        filter = filter.with_tag(tag);
    }
    if let Some(mins) = args.max_prep {
        filter = filter.with_max_prep_time(mins);
    }
    for difficulty in args.difficulties {
        filter = filter.with_difficulty(difficulty);
    }

    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    RecipeQuery {
        filter,
        sort: args.sort.map(|field| SortSpec::new(field, direction)),
        pagination: PaginationParams {
            limit: args.limit,
            offset: args.offset,
        },
    }
}

pub async fn search<S: RecipeSource>(catalog: &RecipeCatalog<S>, args: SearchArgs) -> Result<()> {
    let page = catalog.search(&build_query(args)).await?;
    print_json(&json!({
        "total": page.total,
        "count": page.count,
        "hasMore": page.has_more,
        "pageCount": page.page_count(),
        "recipes": page.items,
    }))
}

pub async fn show<S: RecipeSource>(
    catalog: &RecipeCatalog<S>,
    slug: &str,
    servings: Option<u32>,
    units: Option<UnitSystem>,
) -> Result<()> {
    let recipe = catalog.recipe(slug).await?;
    let servings = servings.unwrap_or(recipe.base_servings);
    let units = units.unwrap_or(catalog.config().default_unit_system);
    let ingredients = catalog.ingredients_for(&recipe, Some(servings), Some(units))?;

    print_json(&json!({
        "slug": recipe.slug,
        "title": recipe.title,
        "cuisine": recipe.cuisine,
        "difficulty": recipe.difficulty,
        "prepTimeMins": recipe.prep_time_mins,
        "cookTimeMins": recipe.cook_time_mins,
        "totalTimeMins": recipe.total_time_mins,
        "servings": servings,
        "units": units,
        "ingredients": ingredients,
    }))
}

pub async fn related<S: RecipeSource>(
    catalog: &RecipeCatalog<S>,
    slug: &str,
    limit: usize,
) -> Result<()> {
    let recipes = catalog.related(slug, limit).await?;
    let summary: Vec<_> = recipes
        .iter()
        .map(|recipe| json!({ "slug": recipe.slug, "title": recipe.title }))
        .collect();
    print_json(&summary)
}

pub async fn facets<S: RecipeSource>(catalog: &RecipeCatalog<S>) -> Result<()> {
    print_json(&catalog.facets().await?)
}
