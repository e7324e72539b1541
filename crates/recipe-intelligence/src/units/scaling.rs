// ABOUTME: Rescales ingredient quantities proportionally to a new serving count
// ABOUTME: Applies tiered rounding by the magnitude of the scaled result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use recipe_core::errors::{AppError, ErrorCode};

use super::conversion::convert_units;
use super::{round_to, Measurement, UnitSystem};

/// Scaling error types
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The recipe's base serving count is zero
    ZeroServings,
    /// Quantity is negative or not finite
    InvalidAmount(f64),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ZeroServings => write!(f, "Original servings must be greater than zero"),
            Self::InvalidAmount(amount) => {
                write!(f, "Invalid amount {amount} (must be a non-negative number)")
            }
        }
    }
}

impl Error for ConversionError {}

impl From<ConversionError> for AppError {
    fn from(error: ConversionError) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, error.to_string()).with_source(error)
    }
}

/// Scale a quantity from `original_servings` to `new_servings`
///
/// The result is rounded by its own magnitude: below 1 to 2 decimals, below
/// 10 to 1 decimal, otherwise to the nearest integer.
///
/// # Errors
///
/// Returns `ConversionError::ZeroServings` if `original_servings` is zero and
/// `ConversionError::InvalidAmount` if the quantity is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use recipe_intelligence::units::scale_ingredient_quantity;
///
/// assert_eq!(scale_ingredient_quantity(200.0, 4, 8), Ok(400.0));
/// assert_eq!(scale_ingredient_quantity(0.5, 4, 6), Ok(0.75));
/// ```
pub fn scale_ingredient_quantity(
    original_quantity: f64,
    original_servings: u32,
    new_servings: u32,
) -> Result<f64, ConversionError> {
    if original_servings == 0 {
        return Err(ConversionError::ZeroServings);
    }
    if !original_quantity.is_finite() || original_quantity < 0.0 {
        return Err(ConversionError::InvalidAmount(original_quantity));
    }

    let scale_factor = f64::from(new_servings) / f64::from(original_servings);
    let scaled = original_quantity * scale_factor;

    let rounded = if scaled < 1.0 {
        round_to(scaled, 2)
    } else if scaled < 10.0 {
        round_to(scaled, 1)
    } else {
        round_to(scaled, 0)
    };

    Ok(rounded)
}

/// Scale to a new serving count, then convert into `target`
///
/// Scaling always precedes conversion so the conversion rounding tiers see
/// the scaled magnitude.
///
/// # Errors
///
/// Propagates the errors of [`scale_ingredient_quantity`].
pub fn scale_and_convert(
    quantity: f64,
    unit: &str,
    base_servings: u32,
    servings: u32,
    target: UnitSystem,
) -> Result<Measurement, ConversionError> {
    let scaled = scale_ingredient_quantity(quantity, base_servings, servings)?;
    Ok(convert_units(scaled, unit, target))
}
