// ABOUTME: Consecutive-day streak calculation over days with activity
// ABOUTME: A streak survives until a full calendar day passes with no activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Length of the run of active days ending on `reference` or the day before
///
/// Duplicate days are ignored and days after `reference` do not count.
/// Returns `0` when neither `reference` nor the previous day was active.
#[must_use]
pub fn current_streak<I>(active_days: I, reference: NaiveDate) -> u64
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = active_days
        .into_iter()
        .filter(|day| *day <= reference)
        .collect();

    let Some(mut cursor) = days.last().copied() else {
        return 0;
    };
    if reference.pred_opt().is_some_and(|yesterday| cursor < yesterday) {
        return 0;
    }

    let mut streak = 0_u64;
    for day in days.iter().rev() {
        if *day != cursor {
            break;
        }
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive active days anywhere in the history
#[must_use]
pub fn longest_streak<I>(active_days: I) -> u64
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = active_days.into_iter().collect();
    let mut longest = 0_u64;
    let mut run = 0_u64;
    let mut previous: Option<NaiveDate> = None;
    for day in days {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(expected) if expected == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}
