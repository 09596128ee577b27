// ABOUTME: Workout and workout self-rating models
// ABOUTME: Intensity levels, focus areas, and focus/effort/recovery ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use super::{deserialize_calendar_day, require_in_range, require_non_empty, Dated, Validate};
use crate::constants::bounds::{RATING_MAX, RATING_MIN};
use crate::errors::EntityError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Perceived workout intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Recovery or light skill work
    Low,
    /// Normal training session
    Medium,
    /// Hard conditioning or game-speed work
    High,
}

/// One logged workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Document identifier
    pub id: String,
    /// Owner of the workout
    pub user_id: String,
    /// Calendar day of the workout
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    /// Length of the workout in minutes
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    /// Perceived intensity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Areas trained ("shooting", "conditioning", ...)
    #[serde(default, alias = "focusArea")]
    pub focus_areas: BTreeSet<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Workout {
    /// Create a workout with no intensity, focus areas, or notes
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        date: NaiveDate,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            duration_minutes,
            intensity: None,
            focus_areas: BTreeSet::new(),
            notes: None,
        }
    }

    /// Set the intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Add a focus area
    #[must_use]
    pub fn with_focus_area(mut self, area: impl Into<String>) -> Self {
        self.focus_areas.insert(area.into());
        self
    }
}

impl Dated for Workout {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Validate for Workout {
    fn validate(&self) -> Result<(), EntityError> {
        require_non_empty("workout", &self.id, "id", &self.id)?;
        require_non_empty("workout", &self.id, "userId", &self.user_id)
    }
}

/// Self-assessment attached to a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRating {
    /// Document identifier
    pub id: String,
    /// Owner of the rating
    pub user_id: String,
    /// Rated workout
    pub workout_id: String,
    /// Calendar day of the rated workout
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    /// Mental focus, 1-5
    pub focus: f64,
    /// Physical effort, 1-5
    pub effort: f64,
    /// How recovered the athlete felt, 1-5
    pub recovery: f64,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutRating {
    /// Create a rating for `workout_id` without notes
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        workout_id: impl Into<String>,
        date: NaiveDate,
        (focus, effort, recovery): (f64, f64, f64),
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            workout_id: workout_id.into(),
            date,
            focus,
            effort,
            recovery,
            notes: None,
        }
    }
}

impl Dated for WorkoutRating {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Validate for WorkoutRating {
    fn validate(&self) -> Result<(), EntityError> {
        const ENTITY: &str = "workout rating";
        require_non_empty(ENTITY, &self.id, "id", &self.id)?;
        require_non_empty(ENTITY, &self.id, "userId", &self.user_id)?;
        require_non_empty(ENTITY, &self.id, "workoutId", &self.workout_id)?;
        for (field, value) in [
            ("focus", self.focus),
            ("effort", self.effort),
            ("recovery", self.recovery),
        ] {
            require_in_range(ENTITY, &self.id, field, value, (RATING_MIN, RATING_MAX))?;
        }
        Ok(())
    }
}
