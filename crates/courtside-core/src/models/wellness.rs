// ABOUTME: One-per-day wellness entries: sleep, water intake, and day ratings
// ABOUTME: Each implements DailyEntry so stores can upsert by (user, day)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use super::{
    deserialize_calendar_day, require_in_range, require_non_empty, DailyEntry, Dated, Validate,
};
use crate::constants::bounds::{DAY_RATING_STEP, MAX_SLEEP_HOURS, RATING_MAX, RATING_MIN};
use crate::constants::units::LITERS_PER_GLASS;
use crate::errors::EntityError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Night of sleep logged against the calendar day it ended on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntry {
    /// Document identifier
    pub id: String,
    /// Owner of the entry
    pub user_id: String,
    /// Calendar day; unique per user
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    /// Hours slept, 0-24
    pub hours: f64,
    /// Self-rated quality, 1-5
    pub quality: f64,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SleepEntry {
    /// Create a sleep entry without notes
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        date: NaiveDate,
        hours: f64,
        quality: f64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            hours,
            quality,
            notes: None,
        }
    }
}

impl Dated for SleepEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DailyEntry for SleepEntry {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl Validate for SleepEntry {
    fn validate(&self) -> Result<(), EntityError> {
        const ENTITY: &str = "sleep entry";
        require_non_empty(ENTITY, &self.id, "id", &self.id)?;
        require_non_empty(ENTITY, &self.id, "userId", &self.user_id)?;
        require_in_range(ENTITY, &self.id, "hours", self.hours, (0.0, MAX_SLEEP_HOURS))?;
        require_in_range(
            ENTITY,
            &self.id,
            "quality",
            self.quality,
            (RATING_MIN, RATING_MAX),
        )
    }
}

/// Glasses of water drunk on one calendar day
///
/// Stored documents carry `glasses`, `liters` and `amount` side by side.
/// `glasses` wins; `amount` is read only when `glasses` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WaterDocument")]
pub struct WaterEntry {
    /// Document identifier
    pub id: String,
    /// Owner of the entry
    pub user_id: String,
    /// Calendar day; unique per user
    pub date: NaiveDate,
    /// Glasses of 250 ml
    pub glasses: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WaterDocument {
    id: String,
    user_id: String,
    #[serde(deserialize_with = "deserialize_calendar_day")]
    date: NaiveDate,
    #[serde(default)]
    glasses: Option<u32>,
    #[serde(default)]
    amount: Option<u32>,
}

impl TryFrom<WaterDocument> for WaterEntry {
    type Error = EntityError;

    fn try_from(document: WaterDocument) -> Result<Self, Self::Error> {
        let Some(glasses) = document.glasses.or(document.amount) else {
            return Err(EntityError::MissingField {
                entity: "water entry",
                id: document.id,
                field: "glasses",
            });
        };
        Ok(Self::new(document.id, document.user_id, document.date, glasses))
    }
}

impl WaterEntry {
    /// Create a water entry
    #[must_use]
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, date: NaiveDate, glasses: u32) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            glasses,
        }
    }

    /// Volume in liters
    #[must_use]
    pub fn liters(&self) -> f64 {
        f64::from(self.glasses) * LITERS_PER_GLASS
    }
}

impl Dated for WaterEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DailyEntry for WaterEntry {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl Validate for WaterEntry {
    fn validate(&self) -> Result<(), EntityError> {
        require_non_empty("water entry", &self.id, "id", &self.id)?;
        require_non_empty("water entry", &self.id, "userId", &self.user_id)
    }
}

/// Overall rating of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRating {
    /// Document identifier
    pub id: String,
    /// Owner of the rating
    pub user_id: String,
    /// Calendar day; unique per user
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    /// 1-5 stars in half steps
    pub rating: f64,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayRating {
    /// Create a day rating without a note
    #[must_use]
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, date: NaiveDate, rating: f64) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            rating,
            note: None,
        }
    }
}

impl Dated for DayRating {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DailyEntry for DayRating {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl Validate for DayRating {
    fn validate(&self) -> Result<(), EntityError> {
        const ENTITY: &str = "day rating";
        require_non_empty(ENTITY, &self.id, "id", &self.id)?;
        require_non_empty(ENTITY, &self.id, "userId", &self.user_id)?;
        require_in_range(
            ENTITY,
            &self.id,
            "rating",
            self.rating,
            (RATING_MIN, RATING_MAX),
        )?;
        if (self.rating / DAY_RATING_STEP).fract().abs() > f64::EPSILON {
            return Err(EntityError::InvalidStep {
                entity: ENTITY,
                id: self.id.clone(),
                field: "rating",
                value: self.rating,
                step: DAY_RATING_STEP,
            });
        }
        Ok(())
    }
}
