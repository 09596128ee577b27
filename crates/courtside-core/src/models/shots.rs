// ABOUTME: Shooting session model with makes, attempts, and optional shot details
// ABOUTME: Validates the attempted >= made >= 0 invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use super::{deserialize_calendar_day, require_non_empty, Dated, Validate};
use crate::errors::EntityError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "shot session";

/// One logged shooting session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotSession {
    /// Document identifier
    pub id: String,
    /// Owner of the session
    pub user_id: String,
    /// Calendar day of the session
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    /// Shots that went in
    pub shots_made: u32,
    /// Shots taken; never below `shots_made`
    pub shots_attempted: u32,
    /// Free-form shot type ("free throw", "three pointer", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    /// Where the session happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ShotSession {
    /// Create a session without shot type or location
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        date: NaiveDate,
        shots_made: u32,
        shots_attempted: u32,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            shots_made,
            shots_attempted,
            shot_type: None,
            location: None,
        }
    }

    /// Set the shot type
    #[must_use]
    pub fn with_shot_type(mut self, shot_type: impl Into<String>) -> Self {
        self.shot_type = Some(shot_type.into());
        self
    }

    /// Set the location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Dated for ShotSession {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Validate for ShotSession {
    fn validate(&self) -> Result<(), EntityError> {
        require_non_empty(ENTITY, &self.id, "id", &self.id)?;
        require_non_empty(ENTITY, &self.id, "userId", &self.user_id)?;
        if self.shots_made > self.shots_attempted {
            return Err(EntityError::MadeExceedsAttempted {
                id: self.id.clone(),
                made: self.shots_made,
                attempted: self.shots_attempted,
            });
        }
        Ok(())
    }
}
