// ABOUTME: Stable field/direction sorting of recipe collections
// ABOUTME: Published dates are compared as calendar dates after day/month/year parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use recipe_core::models::Recipe;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Field a recipe listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Lexicographic title order
    Title,
    /// Numeric total time
    TotalTimeMins,
    /// Chronological publication date
    DatePublished,
    /// Raw difficulty label order ("Easy" < "Hard" < "Medium")
    Difficulty,
}

impl SortField {
    /// Wire name of the field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TotalTimeMins => "totalTimeMins",
            Self::DatePublished => "datePublished",
            Self::Difficulty => "difficulty",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], "").as_str() {
            "title" => Ok(Self::Title),
            "totaltimemins" | "totaltime" => Ok(Self::TotalTimeMins),
            "datepublished" | "date" => Ok(Self::DatePublished),
            "difficulty" => Ok(Self::Difficulty),
            _ => Err(format!("Unknown sort field: {s}")),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort direction: {s}")),
        }
    }
}

/// Field and direction pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortSpec {
    /// Field to order by
    pub field: SortField,
    /// Direction of the order
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort spec
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Most recently published first
    #[must_use]
    pub const fn newest_first() -> Self {
        Self::new(SortField::DatePublished, SortDirection::Desc)
    }
}

/// Comparable projection of a recipe for one sort field
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Text(&'a str),
    Minutes(u32),
    Date(NaiveDate),
}

fn sort_key(recipe: &Recipe, field: SortField) -> SortKey<'_> {
    match field {
        SortField::Title => SortKey::Text(&recipe.title),
        SortField::TotalTimeMins => SortKey::Minutes(recipe.total_time_mins),
        SortField::Difficulty => SortKey::Text(recipe.difficulty.as_str()),
        SortField::DatePublished => {
            SortKey::Date(recipe.published_on().unwrap_or_else(|| {
                warn!(
                    recipe.slug = %recipe.slug,
                    date_published = %recipe.date_published,
                    "Malformed datePublished, sorting as earliest date"
                );
                NaiveDate::MIN
            }))
        }
    }
}

/// Order recipes by `spec`
///
/// The sort is stable in both directions: recipes comparing equal keep their
/// relative input order. Each key is computed once per recipe.
#[must_use]
pub fn sort_recipes<'a, I>(recipes: I, spec: SortSpec) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut keyed: Vec<(SortKey<'a>, &'a Recipe)> = recipes
        .into_iter()
        .map(|recipe| (sort_key(recipe, spec.field), recipe))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare(a, b, spec.direction));
    keyed.into_iter().map(|(_, recipe)| recipe).collect()
}

fn compare(a: &SortKey<'_>, b: &SortKey<'_>, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::models::Difficulty;

    fn dated(id: &str, date: &str) -> Recipe {
        Recipe::new(id, id, id, "British").published(date)
    }

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_title_ascending() {
        let recipes = vec![
            Recipe::new("1", "b", "Banoffee Pie", "British"),
            Recipe::new("2", "a", "Apple Crumble", "British"),
        ];
        let sorted = sort_recipes(&recipes, SortSpec::new(SortField::Title, SortDirection::Asc));
        assert_eq!(ids(&sorted), vec!["2", "1"]);
    }

    #[test]
    fn test_date_descending_uses_calendar_order() {
        let recipes = vec![dated("jan", "15/01/2024"), dated("feb", "01/02/2024")];
        let sorted = sort_recipes(&recipes, SortSpec::newest_first());
        assert_eq!(ids(&sorted), vec!["feb", "jan"]);
    }

    #[test]
    fn test_malformed_date_sorts_first_ascending() {
        let recipes = vec![
            dated("ok", "01/01/1990"),
            dated("bad", "someday"),
            dated("iso", "2024-01-01"),
        ];
        let sorted = sort_recipes(
            &recipes,
            SortSpec::new(SortField::DatePublished, SortDirection::Asc),
        );
        assert_eq!(ids(&sorted), vec!["bad", "iso", "ok"]);
    }

    #[test]
    fn test_difficulty_uses_label_order() {
        let recipes = vec![
            Recipe::new("m", "m", "M", "x").with_difficulty(Difficulty::Medium),
            Recipe::new("h", "h", "H", "x").with_difficulty(Difficulty::Hard),
            Recipe::new("e", "e", "E", "x").with_difficulty(Difficulty::Easy),
        ];
        let sorted = sort_recipes(
            &recipes,
            SortSpec::new(SortField::Difficulty, SortDirection::Asc),
        );
        assert_eq!(ids(&sorted), vec!["e", "h", "m"]);
    }

    #[test]
    fn test_descending_is_stable() {
        let recipes = vec![
            Recipe::new("1", "1", "One", "x").with_times(5, 5),
            Recipe::new("2", "2", "Two", "x").with_times(10, 10),
            Recipe::new("3", "3", "Three", "x").with_times(0, 10),
        ];
        let sorted = sort_recipes(
            &recipes,
            SortSpec::new(SortField::TotalTimeMins, SortDirection::Desc),
        );
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_parse_field_and_direction() {
        assert_eq!("total_time_mins".parse::<SortField>(), Ok(SortField::TotalTimeMins));
        assert_eq!("datePublished".parse::<SortField>(), Ok(SortField::DatePublished));
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("rating".parse::<SortField>().is_err());
    }
}
