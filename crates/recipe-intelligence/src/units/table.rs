// ABOUTME: Fixed metric/imperial equivalents for recognized unit symbols
// ABOUTME: Constants are specified per direction and are not derived from each other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::collections::HashMap;
use std::sync::LazyLock;

/// One side of a table entry: multiply by `multiplier` to get `unit`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEquivalent {
    /// Factor applied to the source quantity
    pub multiplier: f64,
    /// Unit label of the converted quantity
    pub unit: &'static str,
}

/// Metric and imperial equivalents of a recognized unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    /// Equivalent in the metric system
    pub metric: UnitEquivalent,
    /// Equivalent in the imperial system
    pub imperial: UnitEquivalent,
}

impl UnitEntry {
    const fn new(
        metric_multiplier: f64,
        metric_unit: &'static str,
        imperial_multiplier: f64,
        imperial_unit: &'static str,
    ) -> Self {
        Self {
            metric: UnitEquivalent {
                multiplier: metric_multiplier,
                unit: metric_unit,
            },
            imperial: UnitEquivalent {
                multiplier: imperial_multiplier,
                unit: imperial_unit,
            },
        }
    }
}

// `oz -> g` is 28.3495 while `g -> oz` is 0.035274; the pair is intentionally
// not an exact inverse and must stay bit-for-bit.
static UNIT_TABLE: LazyLock<HashMap<&'static str, UnitEntry>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // === Metric weight ===
    m.insert("g", UnitEntry::new(1.0, "g", 0.035_274, "oz"));
    m.insert("kg", UnitEntry::new(1.0, "kg", 2.204_62, "lb"));

    // === Metric volume ===
    m.insert("ml", UnitEntry::new(1.0, "ml", 0.033_814, "fl oz"));
    m.insert("l", UnitEntry::new(1.0, "l", 1.759_75, "pt"));

    // === Imperial weight ===
    m.insert("oz", UnitEntry::new(28.349_5, "g", 1.0, "oz"));
    m.insert("lb", UnitEntry::new(0.453_592, "kg", 1.0, "lb"));

    // === Imperial volume ===
    m.insert("fl oz", UnitEntry::new(29.573_5, "ml", 1.0, "fl oz"));
    m.insert("pt", UnitEntry::new(0.568_261, "l", 1.0, "pt"));

    // === Spoons and cups ===
    m.insert("tsp", UnitEntry::new(5.0, "ml", 1.0, "tsp"));
    m.insert("tbsp", UnitEntry::new(15.0, "ml", 1.0, "tbsp"));
    m.insert("cup", UnitEntry::new(240.0, "ml", 1.0, "cup"));

    m
});

/// Look up a unit symbol, ignoring case and surrounding whitespace
#[must_use]
pub fn lookup_unit(symbol: &str) -> Option<&'static UnitEntry> {
    UNIT_TABLE.get(symbol.trim().to_lowercase().as_str())
}

/// All recognized (lowercase) unit symbols, sorted
#[must_use]
pub fn known_units() -> Vec<&'static str> {
    let mut units: Vec<_> = UNIT_TABLE.keys().copied().collect();
    units.sort_unstable();
    units
}
