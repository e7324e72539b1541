// ABOUTME: Core types and error handling for the recipe book platform
// ABOUTME: Foundation crate with recipe models, unified errors, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types for the recipe book. It carries no
//! behaviour beyond validation and parsing so the query engine, unit converter
//! and catalog service can all depend on it without pulling each other in.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `Recipe`, `Ingredient`, `Difficulty` and published-date parsing
//! - **pagination**: Offset pagination shared by in-memory and remote queries
//! - **constants**: Shared limits and defaults

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Offset-based pagination for recipe listings
pub mod pagination;

/// Recipe data models consumed by the query engine and unit converter
pub mod models;
