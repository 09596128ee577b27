// ABOUTME: Calendar-day parsing and formatting for the YYYY-MM-DD date contract
// ABOUTME: Flexible deserializer accepting plain dates and RFC 3339 timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use crate::constants::formats;
use crate::errors::{AppError, ErrorCode};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Parse a calendar day from a stored date string.
///
/// Accepts `YYYY-MM-DD`, a full RFC 3339 timestamp, or a timestamp without
/// offset. Timestamps keep the calendar day of their own offset; the
/// surrounding application writes local timestamps, so the offset is the
/// user's local one.
///
/// # Errors
///
/// Returns `AppError` with `INVALID_FORMAT` when no accepted shape matches
pub fn parse_calendar_day(value: &str) -> Result<NaiveDate, AppError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, formats::CALENDAR_DAY) {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, formats::NAIVE_TIMESTAMP) {
        return Ok(timestamp.date());
    }

    Err(AppError::new(
        ErrorCode::InvalidFormat,
        format!("Invalid date format: '{value}'. Expected 'YYYY-MM-DD' or an RFC 3339 timestamp"),
    ))
}

/// Format a calendar day as `YYYY-MM-DD`
#[must_use]
pub fn format_calendar_day(date: NaiveDate) -> String {
    date.format(formats::CALENDAR_DAY).to_string()
}

/// Serde deserializer for entity `date` fields
///
/// # Errors
///
/// Fails deserialization when the string is not a recognizable date
pub fn deserialize_calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).map_err(|e| DeError::custom(e.message))
}
