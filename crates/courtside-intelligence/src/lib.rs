// ABOUTME: Derived statistics and badge rule engine over immutable entity snapshots
// ABOUTME: Pure, synchronous functions with no I/O and no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

#![deny(unsafe_code)]

//! # Courtside Intelligence
//!
//! Every function in this crate is a pure function of its arguments: callers
//! hand in a snapshot of logged entities and get plain aggregate values back.
//! Nothing here holds state between calls, so the functions may be invoked
//! from any thread without coordination.
//!
//! Windows are inclusive at both ends: "last N days" relative to a reference
//! day is `[reference - N days, reference]`.

/// Per-day totals of tracked meals
pub mod nutrition;

/// Rolling averages and windowed totals for wellness and workout entries
pub mod averages;

/// Badge catalog, threshold evaluation, and progress reporting
pub mod badges;

/// Keyed upsert and lookup for one-per-day entries
pub mod daily;

/// Weekly, monthly, and yearly shot aggregates and shooting percentage
pub mod shot_stats;

/// Consecutive-day activity streaks
pub mod streaks;

/// Calendar windows and date filtering
pub mod windows;

pub use averages::{
    average_day_rating, average_sleep_hours, average_sleep_quality, average_water_glasses,
    average_workout_ratings, rolling_average, total_workout_minutes, WorkoutRatingAverages,
};
pub use badges::{
    badge_progress, badge_statuses, default_catalog, evaluate_badges, BadgeStatus,
};
pub use daily::{
    accumulate_water, find_daily_entry, find_workout_rating, upsert_daily_entry,
    upsert_daily_entry_in_place, upsert_workout_rating, UpsertOutcome,
};
pub use nutrition::{daily_nutrition, DailyNutrition};
pub use shot_stats::{
    compute_monthly_shot_stats, compute_weekly_shot_stats, compute_yearly_shot_stats,
    shooting_percentage, shot_totals, MonthlyShotStats, ShotTotals, WeeklyShotStats,
    YearlyShotStats,
};
pub use streaks::{current_streak, longest_streak};
pub use windows::{entries_between, entries_in_window, entries_on, DateWindow};
