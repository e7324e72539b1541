// ABOUTME: Parsing of day/month/year published dates into calendar dates
// ABOUTME: Returns None for anything that is not a real dd/mm/yyyy calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Book Contributors

use chrono::NaiveDate;

use crate::constants::dates::PUBLISHED_DATE_SEPARATOR;

/// Parse a `dd/mm/yyyy` published date
///
/// The day/month/year tokens are reversed into year/month/day before the
/// calendar date is built, so "01/02/2024" is the 1st of February 2024.
/// Returns `None` for anything that is not exactly three numeric tokens
/// forming a real calendar date.
#[must_use]
pub fn parse_published_date(raw: &str) -> Option<NaiveDate> {
    let mut tokens = raw.trim().split(PUBLISHED_DATE_SEPARATOR).rev();
    let year = tokens.next()?.trim().parse::<i32>().ok()?;
    let month = tokens.next()?.trim().parse::<u32>().ok()?;
    let day = tokens.next()?.trim().parse::<u32>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
