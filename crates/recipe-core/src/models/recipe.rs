// ABOUTME: Recipe, Ingredient, and Difficulty models as produced by the data layer
// ABOUTME: Read-only inputs to the query engine and unit converter, with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::date::parse_published_date;
use crate::errors::{AppError, AppResult};

/// Recipe difficulty, ordered by increasing complexity for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Few steps, basic techniques
    Easy,
    /// Some technique required
    Medium,
    /// Long or technique-heavy recipes
    Hard,
}

impl Difficulty {
    /// All difficulties in display order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Raw label as stored by the data layer
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown difficulty: {s}")))
    }
}

/// Single ingredient line of a recipe
///
/// `quantity` and `unit` are both present or both absent; "salt to taste"
/// has neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Amount in `unit`, calibrated to the recipe's base servings
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Free-text unit symbol (`g`, `ml`, `tsp`, `°C`, ...)
    #[serde(default)]
    pub unit: Option<String>,
    /// Optional preparation note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Ingredient {
    /// Create a measured ingredient
    #[must_use]
    pub fn measured(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
            unit: Some(unit.into()),
            note: None,
        }
    }

    /// Create an ingredient without a quantity (e.g. "salt to taste")
    #[must_use]
    pub fn unmeasured(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
            note: None,
        }
    }

    /// Add a preparation note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Quantity and unit together, when the ingredient is measured
    #[must_use]
    pub fn measurement(&self) -> Option<(f64, &str)> {
        match (self.quantity, self.unit.as_deref()) {
            (Some(quantity), Some(unit)) => Some((quantity, unit)),
            _ => None,
        }
    }

    /// Check the quantity/unit pairing invariant
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if only one of quantity and unit is set, or if
    /// the quantity is negative or not finite.
    pub fn validate(&self) -> AppResult<()> {
        match (self.quantity, &self.unit) {
            (Some(quantity), Some(_)) if !quantity.is_finite() || quantity < 0.0 => {
                Err(AppError::invalid_input(format!(
                    "ingredient '{}' has invalid quantity {quantity}",
                    self.name
                )))
            }
            (Some(_), Some(_)) | (None, None) => Ok(()),
            _ => Err(AppError::invalid_input(format!(
                "ingredient '{}' must have both quantity and unit, or neither",
                self.name
            ))),
        }
    }
}

/// A published recipe as supplied by the data-access layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Opaque unique identifier
    pub id: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Recipe title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Free-text cuisine category
    pub cuisine: String,
    /// Lowercase tags, display order preserved
    #[serde(default)]
    pub tags: Vec<String>,
    /// Preparation time in minutes
    pub prep_time_mins: u32,
    /// Cooking time in minutes
    pub cook_time_mins: u32,
    /// Preparation plus cooking time in minutes
    pub total_time_mins: u32,
    /// Difficulty label
    pub difficulty: Difficulty,
    /// Serving count the ingredient quantities assume
    pub base_servings: u32,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Publication date serialized as `dd/mm/yyyy`
    pub date_published: String,
    /// Descriptive and media fields the core does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Create a recipe with empty descriptive fields
    ///
    /// Intended for fixtures; production records come from the data layer.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            cuisine: cuisine.into(),
            tags: Vec::new(),
            prep_time_mins: 0,
            cook_time_mins: 0,
            total_time_mins: 0,
            difficulty: Difficulty::Easy,
            base_servings: 1,
            ingredients: Vec::new(),
            date_published: String::new(),
            extra: Map::new(),
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a tag (stored lowercase)
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into().to_lowercase());
        self
    }

    /// Set preparation and cooking times, keeping the total consistent
    #[must_use]
    pub const fn with_times(mut self, prep_mins: u32, cook_mins: u32) -> Self {
        self.prep_time_mins = prep_mins;
        self.cook_time_mins = cook_mins;
        self.total_time_mins = prep_mins.saturating_add(cook_mins);
        self
    }

    /// Set difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set base servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.base_servings = servings;
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Set the `dd/mm/yyyy` publication date
    #[must_use]
    pub fn published(mut self, date_published: impl Into<String>) -> Self {
        self.date_published = date_published.into();
        self
    }

    /// Publication date as a calendar date, if well formed
    #[must_use]
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_published_date(&self.date_published)
    }

    /// Check the invariants the data layer is expected to maintain
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the recipe slug when base servings is
    /// zero, a tag is not lowercase, the total time disagrees with
    /// prep + cook, or an ingredient violates its quantity/unit pairing.
    pub fn validate(&self) -> AppResult<()> {
        if self.base_servings == 0 {
            return Err(AppError::invalid_input(format!(
                "recipe '{}': baseServings must be >= 1",
                self.slug
            )));
        }

        if let Some(tag) = self.tags.iter().find(|tag| tag.to_lowercase() != **tag) {
            return Err(AppError::invalid_input(format!(
                "recipe '{}': tag '{tag}' must be lowercase",
                self.slug
            )));
        }

        let expected_total = self.prep_time_mins.saturating_add(self.cook_time_mins);
        if self.total_time_mins != expected_total {
            return Err(AppError::invalid_input(format!(
                "recipe '{}': totalTimeMins {} != prep {} + cook {}",
                self.slug, self.total_time_mins, self.prep_time_mins, self.cook_time_mins
            )));
        }

        for ingredient in &self.ingredients {
            ingredient.validate().map_err(|e| {
                AppError::invalid_input(format!("recipe '{}': {}", self.slug, e.message))
            })?;
        }

        Ok(())
    }
}
