// ABOUTME: Trailing-window averages for sleep, water, ratings, and workout totals
// ABOUTME: Empty windows yield zero rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use crate::windows::DateWindow;
use chrono::NaiveDate;
use courtside_core::models::{DayRating, Dated, SleepEntry, WaterEntry, Workout, WorkoutRating};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Running sum and count of a numeric field
#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: f64,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1.0;
    }

    fn value(self) -> f64 {
        if self.count > 0.0 {
            self.sum / self.count
        } else {
            0.0
        }
    }
}

/// Arithmetic mean of `field` over entries in `[reference - days, reference]`
///
/// Returns `0.0` when no entry falls in the window.
#[must_use]
pub fn rolling_average<T, F>(entries: &[T], field: F, days: u32, reference: NaiveDate) -> f64
where
    T: Dated,
    F: Fn(&T) -> f64,
{
    let window = DateWindow::trailing(reference, days);
    let mean = entries
        .iter()
        .filter(|entry| window.contains(entry.date()))
        .fold(Mean::default(), |mut mean, entry| {
            mean.push(field(entry));
            mean
        });
    trace!(
        window.start = %window.start,
        window.end = %window.end,
        samples = mean.count,
        "Computed rolling average"
    );
    mean.value()
}

/// Mean hours slept
#[must_use]
pub fn average_sleep_hours(entries: &[SleepEntry], days: u32, reference: NaiveDate) -> f64 {
    rolling_average(entries, |entry| entry.hours, days, reference)
}

/// Mean sleep quality
#[must_use]
pub fn average_sleep_quality(entries: &[SleepEntry], days: u32, reference: NaiveDate) -> f64 {
    rolling_average(entries, |entry| entry.quality, days, reference)
}

/// Mean glasses of water per logged day
#[must_use]
pub fn average_water_glasses(entries: &[WaterEntry], days: u32, reference: NaiveDate) -> f64 {
    rolling_average(entries, |entry| f64::from(entry.glasses), days, reference)
}

/// Mean day rating
#[must_use]
pub fn average_day_rating(entries: &[DayRating], days: u32, reference: NaiveDate) -> f64 {
    rolling_average(entries, |entry| entry.rating, days, reference)
}

/// Mean of each workout self-assessment dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRatingAverages {
    /// Mean focus rating
    pub focus: f64,
    /// Mean effort rating
    pub effort: f64,
    /// Mean recovery rating
    pub recovery: f64,
    /// Ratings that fell in the window
    pub count: usize,
}

/// Averages of workout ratings in the trailing window; all zero when empty
#[must_use]
pub fn average_workout_ratings(
    ratings: &[WorkoutRating],
    days: u32,
    reference: NaiveDate,
) -> WorkoutRatingAverages {
    let window = DateWindow::trailing(reference, days);
    let (mut focus, mut effort, mut recovery) = (Mean::default(), Mean::default(), Mean::default());
    let mut count = 0_usize;
    for rating in ratings.iter().filter(|rating| window.contains(rating.date)) {
        focus.push(rating.focus);
        effort.push(rating.effort);
        recovery.push(rating.recovery);
        count += 1;
    }
    WorkoutRatingAverages {
        focus: focus.value(),
        effort: effort.value(),
        recovery: recovery.value(),
        count,
    }
}

/// Minutes trained in the trailing window
#[must_use]
pub fn total_workout_minutes(workouts: &[Workout], days: u32, reference: NaiveDate) -> u64 {
    let window = DateWindow::trailing(reference, days);
    workouts
        .iter()
        .filter(|workout| window.contains(workout.date))
        .map(|workout| u64::from(workout.duration_minutes))
        .sum()
}
