// ABOUTME: Configuration error types for environment-driven settings
// ABOUTME: Defines error variants for parse failures and inconsistent ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

//! Configuration error types.

use recipe_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Values are individually valid but inconsistent with each other
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::InvalidRange(_) => ErrorCode::ConfigInvalid,
            ConfigError::Parse(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string())
    }
}
