// ABOUTME: Error types shared by the recipe book library and CLI
// ABOUTME: Re-exports the core AppError, its codes, and the JSON error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

//! # Unified Error Handling
//!
//! All fallible library operations return [`AppResult`]. Configuration and
//! unit conversion failures convert into [`AppError`] with `?`.

pub use recipe_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
