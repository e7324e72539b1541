// ABOUTME: Catalog configuration loaded from environment variables
// ABOUTME: Data path, default unit system, and page size limits with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use recipe_core::constants::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use recipe_intelligence::units::UnitSystem;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ConfigError;

/// Environment variable naming the recipe JSON file
pub const DATA_PATH_ENV: &str = "RECIPE_BOOK_DATA_PATH";
/// Environment variable selecting the default unit system
pub const UNIT_SYSTEM_ENV: &str = "RECIPE_BOOK_UNIT_SYSTEM";
/// Environment variable setting the default page size
pub const PAGE_SIZE_ENV: &str = "RECIPE_BOOK_PAGE_SIZE";
/// Environment variable setting the largest allowed page size
pub const MAX_PAGE_SIZE_ENV: &str = "RECIPE_BOOK_MAX_PAGE_SIZE";

/// Default location of the recipe data file
pub const DEFAULT_DATA_PATH: &str = "data/recipes.json";

/// Settings for the recipe catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file read by the file-backed recipe source
    pub data_path: PathBuf,
    /// Unit system used when the caller does not choose one
    pub default_unit_system: UnitSystem,
    /// Page size used when a query gives no limit
    pub default_page_size: usize,
    /// Largest limit a query may request
    pub max_page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_unit_system: UnitSystem::Metric,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the resulting
    /// configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(path) = env::var(DATA_PATH_ENV) {
            config.data_path = PathBuf::from(path);
        }
        apply_env_var(UNIT_SYSTEM_ENV, &mut config.default_unit_system)?;
        apply_env_var(PAGE_SIZE_ENV, &mut config.default_page_size)?;
        apply_env_var(MAX_PAGE_SIZE_ENV, &mut config.max_page_size)?;

        config.validate()?;
        debug!(
            data_path = %config.data_path.display(),
            unit_system = %config.default_unit_system,
            page_size = config.default_page_size,
            "Loaded catalog configuration"
        );
        Ok(config)
    }

    /// Check the page size bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` unless
    /// `1 <= default_page_size <= max_page_size`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidRange(
                "default_page_size must be at least 1",
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::InvalidRange(
                "default_page_size must be <= max_page_size",
            ));
        }
        Ok(())
    }
}

/// Parse and apply an environment variable override when it is set
fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
    }
    Ok(())
}
