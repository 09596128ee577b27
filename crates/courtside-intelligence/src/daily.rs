// ABOUTME: Keyed upsert and lookup for per-day entries and per-workout ratings
// ABOUTME: Replacing keeps the original position; other entries are left untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use chrono::NaiveDate;
use courtside_core::models::{DailyEntry, WaterEntry, WorkoutRating};
use tracing::{debug, warn};

/// What an upsert did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entry had the key; the new entry was appended
    Inserted,
    /// The entry at `index` was replaced
    Replaced {
        /// Position of the replaced entry
        index: usize,
    },
}

/// Replace the first entry matching `same_key` with `entry`, or append it
///
/// Later matches are dropped. Returns the outcome and how many were dropped.
fn replace_or_append<T>(
    entries: &mut Vec<T>,
    entry: T,
    same_key: impl Fn(&T) -> bool,
) -> (UpsertOutcome, usize) {
    let Some(index) = entries.iter().position(&same_key) else {
        entries.push(entry);
        return (UpsertOutcome::Inserted, 0);
    };
    entries[index] = entry;

    let before = entries.len();
    let mut position = 0_usize;
    entries.retain(|candidate| {
        let keep = position <= index || !same_key(candidate);
        position += 1;
        keep
    });
    (UpsertOutcome::Replaced { index }, before - entries.len())
}

/// Insert `entry`, replacing any entry with the same `(user_id, date)`
///
/// A collection that already violates uniqueness is repaired for this key:
/// the first match is replaced and later matches are dropped.
pub fn upsert_daily_entry_in_place<T: DailyEntry>(entries: &mut Vec<T>, entry: T) -> UpsertOutcome {
    let key_user = entry.user_id().to_owned();
    let key_date = entry.date();

    let (outcome, removed) = replace_or_append(entries, entry, |candidate: &T| {
        candidate.daily_key() == (key_user.as_str(), key_date)
    });
    if removed > 0 {
        warn!(
            user_id = %key_user,
            date = %key_date,
            removed,
            "Dropped duplicate daily entries"
        );
    }
    if let UpsertOutcome::Replaced { index } = outcome {
        debug!(user_id = %key_user, date = %key_date, index, "Replaced daily entry");
    }
    outcome
}

/// Owned-snapshot form of [`upsert_daily_entry_in_place`]
#[must_use]
pub fn upsert_daily_entry<T: DailyEntry>(mut entries: Vec<T>, entry: T) -> Vec<T> {
    upsert_daily_entry_in_place(&mut entries, entry);
    entries
}

/// Entry for `user_id` on `date`, if any
#[must_use]
pub fn find_daily_entry<'a, T: DailyEntry>(
    entries: &'a [T],
    user_id: &str,
    date: NaiveDate,
) -> Option<&'a T> {
    entries
        .iter()
        .find(|entry| entry.daily_key() == (user_id, date))
}

/// Add `glasses` to the user's water entry for `date`
///
/// Creates the entry with `new_id` when none exists. Returns the day's new total.
pub fn accumulate_water(
    entries: &mut Vec<WaterEntry>,
    user_id: &str,
    date: NaiveDate,
    glasses: u32,
    new_id: impl Into<String>,
) -> u32 {
    let updated = match find_daily_entry(entries, user_id, date) {
        Some(existing) => {
            let mut updated = existing.clone();
            updated.glasses = updated.glasses.saturating_add(glasses);
            updated
        }
        None => WaterEntry::new(new_id, user_id, date, glasses),
    };
    let total = updated.glasses;
    upsert_daily_entry_in_place(entries, updated);
    total
}

/// Insert `rating`, replacing any rating with the same `(workout_id, user_id)`
///
/// A workout holds at most one rating per user; re-rating keeps the position
/// of the earlier rating.
pub fn upsert_workout_rating(
    ratings: &mut Vec<WorkoutRating>,
    rating: WorkoutRating,
) -> UpsertOutcome {
    let workout_id = rating.workout_id.clone();
    let user_id = rating.user_id.clone();

    let (outcome, removed) = replace_or_append(ratings, rating, |candidate: &WorkoutRating| {
        candidate.workout_id == workout_id && candidate.user_id == user_id
    });
    if removed > 0 {
        warn!(
            user_id = %user_id,
            workout_id = %workout_id,
            removed,
            "Dropped duplicate workout ratings"
        );
    }
    debug!(user_id = %user_id, workout_id = %workout_id, ?outcome, "Upserted workout rating");
    outcome
}

/// Rating `user_id` gave `workout_id`, if any
#[must_use]
pub fn find_workout_rating<'a>(
    ratings: &'a [WorkoutRating],
    user_id: &str,
    workout_id: &str,
) -> Option<&'a WorkoutRating> {
    ratings
        .iter()
        .find(|rating| rating.workout_id == workout_id && rating.user_id == user_id)
}
