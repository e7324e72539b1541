// ABOUTME: Application constants shared across recipe book crates
// ABOUTME: Pagination defaults, date format tokens, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

/// Pagination defaults
pub mod pagination {
    /// Page size used when a listing does not request one
    pub const DEFAULT_PAGE_SIZE: usize = 12;

    /// Upper bound on a requested page size
    pub const MAX_PAGE_SIZE: usize = 100;
}

/// Published date serialization
pub mod dates {
    /// Separator between day, month and year tokens (`dd/mm/yyyy`)
    pub const PUBLISHED_DATE_SEPARATOR: char = '/';
}

/// Service names used in structured logs
pub mod service_names {
    /// Name of the recipe book service
    pub const RECIPE_BOOK: &str = "recipe-book";
}
