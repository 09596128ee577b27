// ABOUTME: Stats engine facade combining configuration with the pure aggregate functions
// ABOUTME: Validates snapshots on request and builds a full dashboard summary in one call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use crate::config::EngineConfig;
use chrono::NaiveDate;
use courtside_core::errors::{AppResult, EntityError};
use courtside_core::models::{
    validate_all, DayRating, Meal, ShotSession, SleepEntry, Validate, WaterEntry, Workout,
    WorkoutRating,
};
use courtside_intelligence::{
    average_day_rating, average_sleep_hours, average_sleep_quality, average_water_glasses,
    average_workout_ratings, compute_monthly_shot_stats, compute_weekly_shot_stats,
    compute_yearly_shot_stats, current_streak, daily_nutrition, longest_streak,
    shot_totals, total_workout_minutes, DailyNutrition, MonthlyShotStats, ShotTotals,
    WeeklyShotStats, WorkoutRatingAverages, YearlyShotStats,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Immutable view of one user's logged entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Shooting sessions
    pub shot_sessions: Vec<ShotSession>,
    /// Workouts
    pub workouts: Vec<Workout>,
    /// Workout self-assessments
    pub workout_ratings: Vec<WorkoutRating>,
    /// Tracked meals
    pub meals: Vec<Meal>,
    /// Sleep entries, one per day
    pub sleep_entries: Vec<SleepEntry>,
    /// Water entries, one per day
    pub water_entries: Vec<WaterEntry>,
    /// Day ratings, one per day
    pub day_ratings: Vec<DayRating>,
}

impl Snapshot {
    /// Days with at least one workout or shot session
    pub fn active_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.workouts
            .iter()
            .map(|workout| workout.date)
            .chain(self.shot_sessions.iter().map(|session| session.date))
    }
}

impl Validate for Snapshot {
    fn validate(&self) -> Result<(), EntityError> {
        validate_all(&self.shot_sessions)?;
        validate_all(&self.workouts)?;
        validate_all(&self.workout_ratings)?;
        validate_all(&self.meals)?;
        validate_all(&self.sleep_entries)?;
        validate_all(&self.water_entries)?;
        validate_all(&self.day_ratings)
    }
}

/// Everything the dashboard shows, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Day the summary was computed for
    pub reference: NaiveDate,
    /// Weekly shot windows, oldest first
    pub weekly_shots: Vec<WeeklyShotStats>,
    /// Monthly shot totals, ascending
    pub monthly_shots: Vec<MonthlyShotStats>,
    /// Yearly shot totals, ascending
    pub yearly_shots: Vec<YearlyShotStats>,
    /// Lifetime made and attempted
    pub lifetime_shots: ShotTotals,
    /// Lifetime shooting percentage
    pub lifetime_percentage: Option<u32>,
    /// Mean hours slept in the averaging window
    pub average_sleep_hours: f64,
    /// Mean sleep quality in the averaging window
    pub average_sleep_quality: f64,
    /// Mean glasses of water in the averaging window
    pub average_water_glasses: f64,
    /// Mean day rating in the averaging window
    pub average_day_rating: f64,
    /// Minutes trained in the workout window
    pub workout_minutes: u64,
    /// Workout rating averages in the workout window
    pub workout_ratings: WorkoutRatingAverages,
    /// Meals eaten on the reference day
    pub nutrition: DailyNutrition,
    /// Glasses of water logged on the reference day
    pub water_glasses_today: u32,
    /// Current run of active days
    pub current_streak: u64,
    /// Longest run of active days
    pub longest_streak: u64,
}

/// Configured entry point for derived statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsEngine {
    config: EngineConfig,
}

impl StatsEngine {
    /// Engine with explicit configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configured from `COURTSIDE_` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` when the environment holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn check<T: Validate>(&self, entities: &[T]) -> AppResult<()> {
        if self.config.validate_inputs {
            validate_all(entities)?;
        }
        Ok(())
    }

    /// Weekly shot windows ending at `reference`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidEntity` when validation is enabled and a session is malformed
    pub fn weekly_shot_stats(
        &self,
        sessions: &[ShotSession],
        reference: NaiveDate,
    ) -> AppResult<Vec<WeeklyShotStats>> {
        self.check(sessions)?;
        Ok(compute_weekly_shot_stats(
            sessions,
            reference,
            self.config.week_count,
        ))
    }

    /// Monthly shot totals
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidEntity` when validation is enabled and a session is malformed
    pub fn monthly_shot_stats(&self, sessions: &[ShotSession]) -> AppResult<Vec<MonthlyShotStats>> {
        self.check(sessions)?;
        Ok(compute_monthly_shot_stats(sessions))
    }

    /// Mean hours slept over the configured window
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidEntity` when validation is enabled and an entry is malformed
    pub fn sleep_average(&self, entries: &[SleepEntry], reference: NaiveDate) -> AppResult<f64> {
        self.check(entries)?;
        Ok(average_sleep_hours(
            entries,
            self.config.average_window_days,
            reference,
        ))
    }

    /// Compute the full dashboard summary for `reference`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidEntity` when validation is enabled and any
    /// entity in the snapshot is malformed
    pub fn summarize(&self, snapshot: &Snapshot, reference: NaiveDate) -> AppResult<StatsSummary> {
        if self.config.validate_inputs {
            snapshot.validate()?;
        }
        let average_days = self.config.average_window_days;
        let workout_days = self.config.workout_window_days;
        let lifetime_shots = shot_totals(&snapshot.shot_sessions);

        let summary = StatsSummary {
            reference,
            weekly_shots: compute_weekly_shot_stats(
                &snapshot.shot_sessions,
                reference,
                self.config.week_count,
            ),
            monthly_shots: compute_monthly_shot_stats(&snapshot.shot_sessions),
            yearly_shots: compute_yearly_shot_stats(&snapshot.shot_sessions),
            lifetime_percentage: lifetime_shots.percentage(),
            lifetime_shots,
            average_sleep_hours: average_sleep_hours(
                &snapshot.sleep_entries,
                average_days,
                reference,
            ),
            average_sleep_quality: average_sleep_quality(
                &snapshot.sleep_entries,
                average_days,
                reference,
            ),
            average_water_glasses: average_water_glasses(
                &snapshot.water_entries,
                average_days,
                reference,
            ),
            average_day_rating: average_day_rating(&snapshot.day_ratings, average_days, reference),
            workout_minutes: total_workout_minutes(&snapshot.workouts, workout_days, reference),
            workout_ratings: average_workout_ratings(
                &snapshot.workout_ratings,
                workout_days,
                reference,
            ),
            nutrition: daily_nutrition(&snapshot.meals, reference),
            water_glasses_today: snapshot
                .water_entries
                .iter()
                .find(|entry| entry.date == reference)
                .map_or(0, |entry| entry.glasses),
            current_streak: current_streak(snapshot.active_days(), reference),
            longest_streak: longest_streak(snapshot.active_days()),
        };

        debug!(
            summary.reference = %reference,
            summary.shot_sessions = snapshot.shot_sessions.len(),
            summary.workouts = snapshot.workouts.len(),
            summary.current_streak = summary.current_streak,
            "Computed stats summary"
        );
        Ok(summary)
    }
}
