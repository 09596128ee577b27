// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for windows, rating bounds, units, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Calendar and aggregation window defaults
pub mod windows {
    /// Length of one weekly aggregation window in days
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Default number of weekly shot windows shown on the trackers screen
    pub const DEFAULT_WEEK_COUNT: u32 = 4;
    /// Default trailing window for sleep, water, and day-rating averages
    pub const DEFAULT_AVERAGE_WINDOW_DAYS: u32 = 7;
    /// Default trailing window for workout minute totals
    pub const DEFAULT_WORKOUT_WINDOW_DAYS: u32 = 7;
    /// Upper bound accepted for configured weekly windows (one year)
    pub const MAX_WEEK_COUNT: u32 = 52;
    /// Upper bound accepted for configured trailing windows in days
    pub const MAX_WINDOW_DAYS: u32 = 365;
}

/// Inclusive bounds for rated and measured values
pub mod bounds {
    /// Lowest sleep quality, workout rating, or day rating
    pub const RATING_MIN: f64 = 1.0;
    /// Highest sleep quality, workout rating, or day rating
    pub const RATING_MAX: f64 = 5.0;
    /// Day ratings move in half-star steps
    pub const DAY_RATING_STEP: f64 = 0.5;
    /// Maximum hours of sleep that fit in one calendar day
    pub const MAX_SLEEP_HOURS: f64 = 24.0;
}

/// Unit conversion constants
pub mod units {
    /// One logged glass of water is 250 ml
    pub const LITERS_PER_GLASS: f64 = 0.25;
}

/// Calendar-day string formats
pub mod formats {
    /// Canonical calendar-day format; lexicographic order equals date order
    pub const CALENDAR_DAY: &str = "%Y-%m-%d";
    /// Month bucket label format used by monthly aggregates
    pub const MONTH_BUCKET: &str = "%Y-%m";
    /// Local timestamp without offset accepted on input
    pub const NAIVE_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Number of weekly shot windows
    pub const WEEK_COUNT: &str = "COURTSIDE_WEEK_COUNT";
    /// Trailing window for rolling averages
    pub const AVERAGE_WINDOW_DAYS: &str = "COURTSIDE_AVERAGE_WINDOW_DAYS";
    /// Trailing window for workout minute totals
    pub const WORKOUT_WINDOW_DAYS: &str = "COURTSIDE_WORKOUT_WINDOW_DAYS";
    /// Toggle for entity validation before computing aggregates
    pub const VALIDATE_INPUTS: &str = "COURTSIDE_VALIDATE_INPUTS";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported at logging startup
    pub const COURTSIDE_STATS: &str = "courtside-stats";
}
