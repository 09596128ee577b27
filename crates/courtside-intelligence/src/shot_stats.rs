// ABOUTME: Shot session aggregates bucketed by week, month, and year
// ABOUTME: Integer shooting percentage rounded half up, None when nothing was attempted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use crate::windows::{days_before, DateWindow};
use chrono::{Datelike, NaiveDate};
use courtside_core::constants::{formats::MONTH_BUCKET, windows::DAYS_PER_WEEK};
use courtside_core::models::ShotSession;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// Summed makes and attempts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotTotals {
    /// Shots made
    pub made: u64,
    /// Shots attempted
    pub attempted: u64,
}

impl ShotTotals {
    fn add(&mut self, session: &ShotSession) {
        self.made = self.made.saturating_add(u64::from(session.shots_made));
        self.attempted = self
            .attempted
            .saturating_add(u64::from(session.shots_attempted));
    }

    /// Rounded shooting percentage of the totals
    #[must_use]
    pub fn percentage(&self) -> Option<u32> {
        shooting_percentage(self.made, self.attempted)
    }
}

/// Totals for one 7-day window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyShotStats {
    /// Shots made in the window
    pub made: u64,
    /// Shots attempted in the window
    pub attempted: u64,
    /// `M/D - M/D` chart label
    pub label: String,
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window
    pub end: NaiveDate,
}

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyShotStats {
    /// Shots made in the month
    pub made: u64,
    /// Shots attempted in the month
    pub attempted: u64,
    /// `YYYY-MM` bucket label
    pub month: String,
    /// Calendar year
    pub year: i32,
    /// Month number, 1-12
    pub month_number: u32,
}

/// Totals for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyShotStats {
    /// Shots made in the year
    pub made: u64,
    /// Shots attempted in the year
    pub attempted: u64,
    /// Calendar year
    pub year: i32,
}

/// `round(100 * made / attempted)` with halves rounded up
///
/// Returns `None` when `attempted` is zero. Computed in integers so the
/// result is exact for any counter values.
#[must_use]
pub fn shooting_percentage(made: u64, attempted: u64) -> Option<u32> {
    if attempted == 0 {
        return None;
    }
    let made = u128::from(made);
    let attempted = u128::from(attempted);
    let rounded = (200 * made + attempted) / (2 * attempted);
    Some(u32::try_from(rounded).unwrap_or(u32::MAX))
}

/// Lifetime totals over every session
#[must_use]
pub fn shot_totals(sessions: &[ShotSession]) -> ShotTotals {
    let mut totals = ShotTotals::default();
    for session in sessions {
        totals.add(session);
    }
    totals
}

/// `week_count` consecutive 7-day windows ending at `reference`, oldest first
///
/// Window `i` (0 = most recent) ends `7 * i` days before `reference`.
#[must_use]
pub fn compute_weekly_shot_stats(
    sessions: &[ShotSession],
    reference: NaiveDate,
    week_count: u32,
) -> Vec<WeeklyShotStats> {
    let step = DAYS_PER_WEEK.unsigned_abs();
    let weeks: Vec<WeeklyShotStats> = (0..u64::from(week_count))
        .rev()
        .map(|offset| {
            let window = DateWindow::week_ending(days_before(reference, step * offset));
            let mut totals = ShotTotals::default();
            sessions
                .iter()
                .filter(|session| window.contains(session.date))
                .for_each(|session| totals.add(session));
            WeeklyShotStats {
                made: totals.made,
                attempted: totals.attempted,
                label: window.label(),
                start: window.start,
                end: window.end,
            }
        })
        .collect();
    trace!(
        sessions = sessions.len(),
        weeks = weeks.len(),
        reference = %reference,
        "Computed weekly shot stats"
    );
    weeks
}

/// Totals grouped by calendar month, ascending
#[must_use]
pub fn compute_monthly_shot_stats(sessions: &[ShotSession]) -> Vec<MonthlyShotStats> {
    let mut buckets: BTreeMap<(i32, u32), ShotTotals> = BTreeMap::new();
    for session in sessions {
        buckets
            .entry((session.date.year(), session.date.month()))
            .or_default()
            .add(session);
    }
    buckets
        .into_iter()
        .filter_map(|((year, month_number), totals)| {
            let first = NaiveDate::from_ymd_opt(year, month_number, 1)?;
            Some(MonthlyShotStats {
                made: totals.made,
                attempted: totals.attempted,
                month: first.format(MONTH_BUCKET).to_string(),
                year,
                month_number,
            })
        })
        .collect()
}

/// Totals grouped by calendar year, ascending
#[must_use]
pub fn compute_yearly_shot_stats(sessions: &[ShotSession]) -> Vec<YearlyShotStats> {
    let mut buckets: BTreeMap<i32, ShotTotals> = BTreeMap::new();
    for session in sessions {
        buckets.entry(session.date.year()).or_default().add(session);
    }
    buckets
        .into_iter()
        .map(|(year, totals)| YearlyShotStats {
            made: totals.made,
            attempted: totals.attempted,
            year,
        })
        .collect()
}
