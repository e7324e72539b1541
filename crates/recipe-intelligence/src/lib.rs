// ABOUTME: Recipe intelligence: unit conversion, ingredient scaling, and query engine
// ABOUTME: Stateless functions over in-memory recipe collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

#![deny(unsafe_code)]

//! # Recipe Intelligence
//!
//! Two independent, side-effect-free modules:
//!
//! - [`units`] converts quantities between metric and imperial and rescales
//!   ingredient quantities to a new serving count.
//! - [`query`] filters, sorts and paginates a recipe collection so that the
//!   result matches what the remote store returns for the same query.
//!
//! Neither module depends on the other.

/// Recipe filtering, sorting, paging, facets and related recipes
pub mod query;
/// Metric/imperial conversion and serving-count scaling
pub mod units;
