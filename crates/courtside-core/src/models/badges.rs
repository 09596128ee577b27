// ABOUTME: Badge catalog entries, earned badges, and cumulative user counters
// ABOUTME: Maps badge predicate keys onto the UserStats counter they compare against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cumulative counters maintained as raw events occur
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Workouts logged
    pub total_workouts: u64,
    /// Shots made across all sessions
    pub total_shots_made: u64,
    /// Shots attempted across all sessions
    pub total_shots_attempted: u64,
    /// Meals tracked
    pub total_meals_tracked: u64,
    /// Current activity streak in days
    pub streak_days: u64,
    /// Badges awarded so far
    pub badges_earned: u64,
}

/// Names one counter of [`UserStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    /// `total_workouts`
    TotalWorkouts,
    /// `total_shots_made`
    TotalShotsMade,
    /// `total_shots_attempted`
    TotalShotsAttempted,
    /// `total_meals_tracked`
    TotalMealsTracked,
    /// `streak_days`
    StreakDays,
    /// `badges_earned`
    BadgesEarned,
}

impl StatKind {
    /// Field name as stored in the user document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalWorkouts => "totalWorkouts",
            Self::TotalShotsMade => "totalShotsMade",
            Self::TotalShotsAttempted => "totalShotsAttempted",
            Self::TotalMealsTracked => "totalMealsTracked",
            Self::StreakDays => "streakDays",
            Self::BadgesEarned => "badgesEarned",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UserStats {
    /// Read one counter
    #[must_use]
    pub const fn counter(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::TotalWorkouts => self.total_workouts,
            StatKind::TotalShotsMade => self.total_shots_made,
            StatKind::TotalShotsAttempted => self.total_shots_attempted,
            StatKind::TotalMealsTracked => self.total_meals_tracked,
            StatKind::StreakDays => self.streak_days,
            StatKind::BadgesEarned => self.badges_earned,
        }
    }

    /// Mutable access to one counter
    pub fn counter_mut(&mut self, kind: StatKind) -> &mut u64 {
        match kind {
            StatKind::TotalWorkouts => &mut self.total_workouts,
            StatKind::TotalShotsMade => &mut self.total_shots_made,
            StatKind::TotalShotsAttempted => &mut self.total_shots_attempted,
            StatKind::TotalMealsTracked => &mut self.total_meals_tracked,
            StatKind::StreakDays => &mut self.streak_days,
            StatKind::BadgesEarned => &mut self.badges_earned,
        }
    }
}

/// Which counter a badge threshold is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeCriteria {
    /// `total_meals_tracked >= threshold`
    #[serde(rename = "meal-tracker")]
    MealsTracked,
    /// `total_workouts >= threshold`
    #[serde(rename = "workout")]
    Workouts,
    /// `total_shots_made >= threshold`
    #[serde(rename = "shots")]
    ShotsMade,
    /// `streak_days >= threshold`
    #[serde(rename = "streak")]
    StreakDays,
}

impl BadgeCriteria {
    /// Predicate key used as the badge id prefix
    #[must_use]
    pub const fn predicate_key(self) -> &'static str {
        match self {
            Self::MealsTracked => "meal-tracker",
            Self::Workouts => "workout",
            Self::ShotsMade => "shots",
            Self::StreakDays => "streak",
        }
    }

    /// Resolve a predicate key
    #[must_use]
    pub fn from_predicate_key(key: &str) -> Option<Self> {
        match key {
            "meal-tracker" => Some(Self::MealsTracked),
            "workout" => Some(Self::Workouts),
            "shots" => Some(Self::ShotsMade),
            "streak" => Some(Self::StreakDays),
            _ => None,
        }
    }

    /// Counter this criteria reads
    #[must_use]
    pub const fn stat(self) -> StatKind {
        match self {
            Self::MealsTracked => StatKind::TotalMealsTracked,
            Self::Workouts => StatKind::TotalWorkouts,
            Self::ShotsMade => StatKind::TotalShotsMade,
            Self::StreakDays => StatKind::StreakDays,
        }
    }
}

/// Immutable badge catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDefinition {
    /// Stable badge id, conventionally `<predicate-key>-<threshold>`
    pub id: String,
    /// Display name
    pub name: String,
    /// What the user has to do
    pub description: String,
    /// Counter compared against `threshold`
    pub criteria: BadgeCriteria,
    /// Inclusive threshold
    pub threshold: u64,
}

impl BadgeDefinition {
    /// Create a definition with explicit criteria
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        criteria: BadgeCriteria,
        threshold: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            criteria,
            threshold,
        }
    }

    /// Create a definition whose criteria and threshold are encoded in the id,
    /// e.g. `shots-1000` or `meal-tracker-10`
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the id has no numeric suffix or an unknown predicate key
    pub fn from_id(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, AppError> {
        let id = id.into();
        let (key, threshold) = id
            .rsplit_once('-')
            .ok_or_else(|| AppError::invalid_input(format!("Badge id '{id}' has no threshold suffix")))?;
        let threshold: u64 = threshold.parse().map_err(|_| {
            AppError::invalid_input(format!("Badge id '{id}' has a non-numeric threshold"))
        })?;
        let criteria = BadgeCriteria::from_predicate_key(key).ok_or_else(|| {
            AppError::invalid_input(format!("Badge id '{id}' uses unknown predicate key '{key}'"))
        })?;
        Ok(Self::new(id, name, description, criteria, threshold))
    }

    /// Whether `stats` satisfies this badge
    #[must_use]
    pub const fn is_met_by(&self, stats: &UserStats) -> bool {
        stats.counter(self.criteria.stat()) >= self.threshold
    }
}

/// A badge awarded to a user; never revoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedBadge {
    /// Catalog id of the badge
    pub badge_id: String,
    /// When the award was recorded
    pub date_earned: DateTime<Utc>,
}

impl EarnedBadge {
    /// Stamp an award for `definition`
    #[must_use]
    pub fn new(definition: &BadgeDefinition, date_earned: DateTime<Utc>) -> Self {
        Self {
            badge_id: definition.id.clone(),
            date_earned,
        }
    }
}
