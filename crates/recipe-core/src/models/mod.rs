// ABOUTME: Recipe data models shared by the query engine and unit converter
// ABOUTME: Re-exports Recipe, Ingredient, Difficulty, and published-date parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

/// Published date parsing (`dd/mm/yyyy`)
pub mod date;
/// Recipe, ingredient and difficulty types
pub mod recipe;

pub use date::parse_published_date;
pub use recipe::{Difficulty, Ingredient, Recipe};
