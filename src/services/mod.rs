// ABOUTME: Domain service layer for recipe browsing and display
// ABOUTME: Provides source-agnostic services reused by the CLI and library callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

//! Domain service layer
//!
//! Services combine a [`crate::data::RecipeSource`] with the pure query and
//! unit algorithms so callers get the same results whatever the entry point.

/// Recipe catalog: search, detail, ingredient display, facets
pub mod recipes;

pub use recipes::{DisplayIngredient, RecipeCatalog};
