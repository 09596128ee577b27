// ABOUTME: Core data models for logged training entities and badges
// ABOUTME: Re-exports entity structs and the Dated, DailyEntry, and Validate traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

//! # Data Models
//!
//! Entities are produced by the surrounding application (a document store
//! mirrored into local state) and arrive here as immutable snapshots. Field
//! names serialize in camelCase to match the stored documents.
//!
//! ## Core Models
//!
//! - `ShotSession`: makes and attempts logged in one shooting session
//! - `Workout` / `WorkoutRating`: training sessions and their self-assessment
//! - `Meal`: a tracked meal with optional macros
//! - `SleepEntry`, `WaterEntry`, `DayRating`: one-per-day wellness entries
//! - `BadgeDefinition`, `EarnedBadge`, `UserStats`: the badge catalog and counters

mod badges;
mod calendar;
mod nutrition;
mod shots;
mod wellness;
mod workout;

pub use badges::{BadgeCriteria, BadgeDefinition, EarnedBadge, StatKind, UserStats};
pub use calendar::{deserialize_calendar_day, format_calendar_day, parse_calendar_day};
pub use nutrition::{Meal, MealType};
pub use shots::ShotSession;
pub use wellness::{DayRating, SleepEntry, WaterEntry};
pub use workout::{Intensity, Workout, WorkoutRating};

use crate::errors::EntityError;
use chrono::NaiveDate;

/// An entity stamped with the calendar day it was logged for.
pub trait Dated {
    /// Calendar day in the caller's local time zone
    fn date(&self) -> NaiveDate;
}

/// An entity limited to one record per user per calendar day.
///
/// Sleep, water, and day-rating entries implement this; a second write for
/// the same `(user_id, date)` replaces the first instead of duplicating it.
pub trait DailyEntry: Dated {
    /// Owner of the entry
    fn user_id(&self) -> &str;

    /// Uniqueness key of the entry
    fn daily_key(&self) -> (&str, NaiveDate) {
        (self.user_id(), self.date())
    }
}

/// Invariant checks for an entity received from the caller.
pub trait Validate {
    /// Check the entity's documented invariants
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as an [`EntityError`]
    fn validate(&self) -> Result<(), EntityError>;
}

/// Validate every entity of a collection, stopping at the first failure
///
/// # Errors
///
/// Returns the first [`EntityError`] found
pub fn validate_all<T: Validate>(entities: &[T]) -> Result<(), EntityError> {
    entities.iter().try_for_each(Validate::validate)
}

pub(crate) fn require_non_empty(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: &str,
) -> Result<(), EntityError> {
    if value.trim().is_empty() {
        return Err(EntityError::MissingField {
            entity,
            id: id.to_owned(),
            field,
        });
    }
    Ok(())
}

pub(crate) fn require_non_negative(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: f64,
) -> Result<(), EntityError> {
    if !value.is_finite() || value < 0.0 {
        return Err(EntityError::InvalidNumber {
            entity,
            id: id.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}

pub(crate) fn require_in_range(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), EntityError> {
    if !value.is_finite() || !(min..=max).contains(&value) {
        return Err(EntityError::OutOfRange {
            entity,
            id: id.to_owned(),
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
