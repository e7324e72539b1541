// ABOUTME: Command implementations for recipe-cli
// ABOUTME: Catalog commands read the data file; unit commands are pure calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

pub mod catalog;
pub mod units;

use anyhow::{Error, Result};
use recipe_book::errors::{AppError, ErrorResponse};
use recipe_core::models::Difficulty;
use recipe_intelligence::query::SortField;
use serde::Serialize;

/// Parsed `search` flags
pub struct SearchArgs {
    pub search: Option<String>,
    pub cuisines: Vec<String>,
    pub tags: Vec<String>,
    pub max_prep: Option<u32>,
    pub difficulties: Vec<Difficulty>,
    pub sort: Option<SortField>,
    pub desc: bool,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Write `value` to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(AppError::from)?;
    println!("{rendered}");
    Ok(())
}

/// JSON error envelope for a failed command
///
/// Errors that did not originate as an `AppError` are handed back unchanged.
pub fn error_response(error: Error) -> Result<ErrorResponse, Error> {
    error.downcast::<AppError>().map(ErrorResponse::from)
}
