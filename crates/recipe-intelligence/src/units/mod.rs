// ABOUTME: Unit conversion module for displaying ingredients in metric or imperial
// ABOUTME: Provides the conversion table, convert/scale functions, and Measurement type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

//! # Units Module
//!
//! Converts ingredient quantities between the metric and imperial systems and
//! rescales them when the serving count changes.
//!
//! ## Composed usage
//!
//! Scale first, then convert:
//!
//! ```rust
//! use recipe_intelligence::units::{convert_units, scale_ingredient_quantity, UnitSystem};
//!
//! let scaled = scale_ingredient_quantity(500.0, 4, 2).unwrap();
//! let shown = convert_units(scaled, "g", UnitSystem::Imperial);
//! assert_eq!(shown.to_string(), "8.8 oz");
//! ```

/// Metric/imperial conversion of a single quantity
pub mod conversion;
/// Proportional rescaling to a new serving count
pub mod scaling;
/// Fixed unit conversion table
pub mod table;

pub use conversion::convert_units;
pub use scaling::{scale_and_convert, scale_ingredient_quantity, ConversionError};
pub use table::{known_units, lookup_unit, UnitEntry, UnitEquivalent};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Measurement system a quantity is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Grams, millilitres, Celsius
    #[default]
    Metric,
    /// Ounces/pounds, fluid ounces/pints, Fahrenheit
    Imperial,
}

impl UnitSystem {
    /// Lowercase name of the system
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl Display for UnitSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(format!("Unknown unit system: {other}")),
        }
    }
}

/// A display-ready quantity with its unit label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Rounded quantity
    pub value: f64,
    /// Unit label, taken from the conversion table when converted
    pub unit: String,
}

impl Measurement {
    /// Create a measurement
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Round half up to `decimals` places, as `Math.round(x * 10^d) / 10^d`
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}
