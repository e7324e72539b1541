// ABOUTME: Converts a quantity and unit symbol into the requested unit system
// ABOUTME: Temperatures use exact formulas; other units go through the fixed table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use super::table::lookup_unit;
use super::{round_to, Measurement, UnitSystem};

/// Celsius label
pub const CELSIUS: &str = "°C";
/// Fahrenheit label
pub const FAHRENHEIT: &str = "°F";

/// Convert a quantity to the target unit system
///
/// Temperatures are handled first: `°C` into imperial becomes Fahrenheit and
/// `°F` into metric becomes Celsius, both rounded to the nearest integer.
/// Every other recognized unit is multiplied by its table entry for
/// `target` and rounded to 2 decimals below 1, otherwise to 1 decimal.
/// Unrecognized units (and temperatures already in the target system) are
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// use recipe_intelligence::units::{convert_units, Measurement, UnitSystem};
///
/// assert_eq!(
///     convert_units(100.0, "°C", UnitSystem::Imperial),
///     Measurement::new(212.0, "°F")
/// );
/// assert_eq!(
///     convert_units(3.0, "pieces", UnitSystem::Imperial),
///     Measurement::new(3.0, "pieces")
/// );
/// ```
#[must_use]
pub fn convert_units(quantity: f64, unit: &str, target: UnitSystem) -> Measurement {
    if let Some(converted) = convert_temperature(quantity, unit, target) {
        return converted;
    }

    let Some(entry) = lookup_unit(unit) else {
        return Measurement::new(quantity, unit);
    };

    let equivalent = match target {
        UnitSystem::Metric => entry.metric,
        UnitSystem::Imperial => entry.imperial,
    };

    let value = quantity * equivalent.multiplier;
    let rounded = if value < 1.0 {
        round_to(value, 2)
    } else {
        round_to(value, 1)
    };

    Measurement::new(rounded, equivalent.unit)
}

fn convert_temperature(quantity: f64, unit: &str, target: UnitSystem) -> Option<Measurement> {
    let unit = unit.trim();
    match target {
        UnitSystem::Imperial if unit.eq_ignore_ascii_case(CELSIUS) => Some(Measurement::new(
            round_to(quantity * 9.0 / 5.0 + 32.0, 0),
            FAHRENHEIT,
        )),
        UnitSystem::Metric if unit.eq_ignore_ascii_case(FAHRENHEIT) => Some(Measurement::new(
            round_to((quantity - 32.0) * 5.0 / 9.0, 0),
            CELSIUS,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(
            convert_units(0.0, "°C", UnitSystem::Imperial),
            Measurement::new(32.0, "°F")
        );
        assert_eq!(
            convert_units(180.0, "°c", UnitSystem::Imperial),
            Measurement::new(356.0, "°F")
        );
    }

    #[test]
    fn test_fahrenheit_to_celsius_rounds_to_integer() {
        // (350 - 32) * 5 / 9 = 176.67
        assert_eq!(
            convert_units(350.0, "°F", UnitSystem::Metric),
            Measurement::new(177.0, "°C")
        );
    }

    #[test]
    fn test_temperature_already_in_target_system() {
        assert_eq!(
            convert_units(200.0, "°C", UnitSystem::Metric),
            Measurement::new(200.0, "°C")
        );
        assert_eq!(
            convert_units(400.0, "°F", UnitSystem::Imperial),
            Measurement::new(400.0, "°F")
        );
    }

    #[test]
    fn test_large_values_round_to_one_decimal() {
        assert_eq!(
            convert_units(1.0, "kg", UnitSystem::Imperial),
            Measurement::new(2.2, "lb")
        );
        assert_eq!(
            convert_units(1000.0, "g", UnitSystem::Imperial),
            Measurement::new(35.3, "oz")
        );
    }

    #[test]
    fn test_small_values_round_to_two_decimals() {
        assert_eq!(
            convert_units(1.0, "g", UnitSystem::Imperial),
            Measurement::new(0.04, "oz")
        );
        assert_eq!(
            convert_units(10.0, "ml", UnitSystem::Imperial),
            Measurement::new(0.34, "fl oz")
        );
    }

    #[test]
    fn test_label_comes_from_table() {
        assert_eq!(
            convert_units(2.0, "TBSP", UnitSystem::Metric),
            Measurement::new(30.0, "ml")
        );
        assert_eq!(
            convert_units(2.0, "Cup", UnitSystem::Imperial),
            Measurement::new(2.0, "cup")
        );
    }

    #[test]
    fn test_unknown_unit_passthrough_is_unrounded() {
        assert_eq!(
            convert_units(1.234, "pinch", UnitSystem::Metric),
            Measurement::new(1.234, "pinch")
        );
    }
}
