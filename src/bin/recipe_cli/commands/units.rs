// ABOUTME: Unit commands: convert a quantity and rescale to a new serving count
// ABOUTME: Pure calculations that do not read the recipe data file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use anyhow::Result;
use recipe_book::errors::AppError;
use recipe_intelligence::units::{convert_units, scale_ingredient_quantity, UnitSystem};
use serde_json::json;

use super::print_json;

pub fn convert(quantity: f64, unit: &str, to: UnitSystem) -> Result<()> {
    let measurement = convert_units(quantity, unit, to);
    print_json(&json!({
        "input": { "value": quantity, "unit": unit },
        "output": measurement,
        "display": measurement.to_string(),
    }))
}

pub fn scale(quantity: f64, from: u32, to: u32) -> Result<()> {
    let scaled = scale_ingredient_quantity(quantity, from, to).map_err(AppError::from)?;
    print_json(&json!({
        "quantity": quantity,
        "fromServings": from,
        "toServings": to,
        "scaled": scaled,
    }))
}
