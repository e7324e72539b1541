// ABOUTME: Configuration module for the recipe book catalog and CLI
// ABOUTME: Environment-only configuration with explicit validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors
//! Configuration module
//!
//! Settings come from environment variables layered over defaults. Loaded
//! configuration is passed explicitly to the components that need it; there
//! is no global configuration singleton.

/// Catalog settings (data path, unit system, page sizes)
pub mod catalog;
/// Configuration error types
pub mod error;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
