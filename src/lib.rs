// ABOUTME: Main library entry point for the recipe book catalog
// ABOUTME: Wires configuration, logging, recipe sources, and the catalog service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

#![deny(unsafe_code)]

//! # Recipe Book
//!
//! Browse, search, and display published recipes. The pure algorithms live
//! in the workspace crates:
//!
//! - **`recipe-core`**: recipe model, errors, pagination
//! - **`recipe-intelligence`**: unit conversion, serving scaling, query engine
//!
//! This crate adds the ambient pieces around them: environment configuration,
//! structured logging, the [`data::RecipeSource`] seam, and the
//! [`services::RecipeCatalog`] service used by the `recipe-cli` binary.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_book::config::CatalogConfig;
//! use recipe_book::data::JsonFileRecipeSource;
//! use recipe_book::errors::AppResult;
//! use recipe_book::services::RecipeCatalog;
//! use recipe_intelligence::query::RecipeQuery;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = CatalogConfig::from_env()?;
//!     let source = JsonFileRecipeSource::new(config.data_path.clone());
//!     let catalog = RecipeCatalog::new(source, config);
//!
//!     let page = catalog.search(&RecipeQuery::default()).await?;
//!     println!("{} of {} recipes", page.count, page.total);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Recipe data sources
pub mod data;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Catalog service layer
pub mod services;

pub use recipe_core::models::{Difficulty, Ingredient, Recipe};
pub use recipe_core::pagination::{Page, PaginationParams};
pub use recipe_intelligence::query::{RecipeFilter, RecipeQuery, SortDirection, SortField, SortSpec};
pub use recipe_intelligence::units::{Measurement, UnitSystem};
