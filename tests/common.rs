// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, fixture recipes, and temp JSON data files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_book`

use std::io::Write;
use std::sync::Once;

use recipe_book::{Difficulty, Ingredient, Recipe};
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A small published collection covering every cuisine/difficulty combination the tests need
pub fn fixture_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("1", "shepherds-pie", "Shepherd's Pie", "British")
            .with_description("Lamb mince under mashed potato")
            .with_tag("comfort")
            .with_tag("baked")
            .with_times(25, 45)
            .with_difficulty(Difficulty::Medium)
            .with_servings(4)
            .with_ingredient(Ingredient::measured("lamb mince", 500.0, "g"))
            .with_ingredient(Ingredient::measured("beef stock", 300.0, "ml"))
            .with_ingredient(Ingredient::measured("eggs", 2.0, "large"))
            .with_ingredient(Ingredient::unmeasured("salt").with_note("to taste"))
            .published("14/03/2024"),
        Recipe::new("2", "pad-thai", "Pad Thai", "Thai")
            .with_description("Stir-fried rice noodles")
            .with_tag("noodles")
            .with_tag("quick")
            .with_times(15, 10)
            .with_difficulty(Difficulty::Easy)
            .with_servings(2)
            .with_ingredient(Ingredient::measured("rice noodles", 200.0, "g"))
            .published("02/11/2024"),
        Recipe::new("3", "green-curry", "Thai Green Curry", "Thai")
            .with_description("Chicken in coconut milk")
            .with_tag("curry")
            .with_tag("spicy")
            .with_times(20, 25)
            .with_difficulty(Difficulty::Medium)
            .with_servings(4)
            .published("21/06/2023"),
        Recipe::new("4", "victoria-sponge", "Victoria Sponge", "British")
            .with_description("Jam and cream sandwich cake")
            .with_tag("baking")
            .with_tag("baked")
            .with_times(30, 25)
            .with_difficulty(Difficulty::Easy)
            .with_servings(8)
            .published("09/01/2025"),
        Recipe::new("5", "beef-wellington", "Beef Wellington", "British")
            .with_description("Fillet in puff pastry")
            .with_tag("beef")
            .with_tag("baked")
            .with_times(60, 40)
            .with_difficulty(Difficulty::Hard)
            .with_servings(6)
            .published("24/12/2023"),
        Recipe::new("6", "tom-yum", "Tom Yum Soup", "Thai")
            .with_description("Hot and sour prawn soup")
            .with_tag("soup")
            .with_tag("spicy")
            .with_tag("quick")
            .with_times(10, 15)
            .with_difficulty(Difficulty::Easy)
            .with_servings(4)
            .published("07/08/2024"),
    ]
}

/// Write `recipes` to a temporary JSON file
pub fn write_recipes_file(recipes: &[Recipe]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let json = serde_json::to_string_pretty(recipes).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Slugs of `recipes`, in order
pub fn slugs<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<&'a str> {
    recipes.into_iter().map(|recipe| recipe.slug.as_str()).collect()
}
