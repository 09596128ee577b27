// ABOUTME: Inclusive calendar windows and date filtering for dated entities
// ABOUTME: Trailing windows, week windows, and the "M/D - M/D" chart label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use chrono::{Datelike, Days, NaiveDate};
use courtside_core::constants::windows::DAYS_PER_WEEK;
use courtside_core::models::Dated;
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day in the window
    pub start: NaiveDate,
    /// Last day in the window
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window from `start` to `end`, swapping the bounds if given backwards
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// `[reference - days, reference]`
    #[must_use]
    pub fn trailing(reference: NaiveDate, days: u32) -> Self {
        Self {
            start: days_before(reference, u64::from(days)),
            end: reference,
        }
    }

    /// The seven days ending at `end`
    #[must_use]
    pub fn week_ending(end: NaiveDate) -> Self {
        Self {
            start: days_before(end, (DAYS_PER_WEEK - 1).unsigned_abs()),
            end,
        }
    }

    /// Single-day window
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Whether `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Chart label such as `1/29 - 2/4` (month/day, not zero padded)
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}/{} - {}/{}",
            self.start.month(),
            self.start.day(),
            self.end.month(),
            self.end.day()
        )
    }

    /// Number of calendar days covered
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Subtract days, clamping at the earliest representable date
pub(crate) fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

/// Entries inside `window`, sorted oldest first
#[must_use]
pub fn entries_in_window<T: Dated>(entries: &[T], window: DateWindow) -> Vec<&T> {
    let mut selected: Vec<&T> = entries
        .iter()
        .filter(|entry| window.contains(entry.date()))
        .collect();
    selected.sort_by_key(|entry| entry.date());
    selected
}

/// Entries logged on `date`, in input order
#[must_use]
pub fn entries_on<T: Dated>(entries: &[T], date: NaiveDate) -> Vec<&T> {
    entries.iter().filter(|entry| entry.date() == date).collect()
}

/// Entries between `start` and `end` inclusive, in input order
#[must_use]
pub fn entries_between<T: Dated>(entries: &[T], start: NaiveDate, end: NaiveDate) -> Vec<&T> {
    let window = DateWindow::new(start, end);
    entries
        .iter()
        .filter(|entry| window.contains(entry.date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::models::SleepEntry;

    fn entry(id: &str, date: NaiveDate) -> SleepEntry {
        SleepEntry::new(id, "u1", date, 8.0, 4.0)
    }

    fn ids(selected: &[&SleepEntry]) -> Vec<String> {
        selected.iter().map(|e| e.id.clone()).collect()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trailing_window_is_inclusive() {
        let window = DateWindow::trailing(day(2024, 1, 10), 7);
        assert_eq!(window.start, day(2024, 1, 3));
        assert!(window.contains(day(2024, 1, 3)));
        assert!(window.contains(day(2024, 1, 10)));
        assert!(!window.contains(day(2024, 1, 2)));
        assert!(!window.contains(day(2024, 1, 11)));
        assert_eq!(window.len_days(), 8);
    }

    #[test]
    fn test_week_label_crosses_month() {
        let window = DateWindow::week_ending(day(2024, 2, 4));
        assert_eq!(window.label(), "1/29 - 2/4");
        assert_eq!(window.len_days(), 7);
    }

    #[test]
    fn test_trailing_clamps_at_min_date() {
        let window = DateWindow::trailing(NaiveDate::MIN, 30);
        assert_eq!(window.start, NaiveDate::MIN);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let window = DateWindow::new(day(2024, 3, 9), day(2024, 3, 2));
        assert_eq!(window.start, day(2024, 3, 2));
        assert_eq!(window.end, day(2024, 3, 9));
        assert_eq!(window, DateWindow::new(day(2024, 3, 2), day(2024, 3, 9)));
        assert_eq!(DateWindow::day(day(2024, 3, 2)).len_days(), 1);
    }

    #[test]
    fn test_entries_on_selects_single_day_in_input_order() {
        let entries = vec![
            entry("late", day(2024, 3, 5)),
            entry("other", day(2024, 3, 4)),
            entry("early", day(2024, 3, 5)),
        ];
        assert_eq!(ids(&entries_on(&entries, day(2024, 3, 5))), vec!["late", "early"]);
        assert!(entries_on(&entries, day(2024, 3, 6)).is_empty());
    }

    #[test]
    fn test_entries_between_is_inclusive_and_keeps_order() {
        let entries = vec![
            entry("d", day(2024, 3, 10)),
            entry("a", day(2024, 3, 1)),
            entry("c", day(2024, 3, 9)),
            entry("b", day(2024, 3, 2)),
            entry("z", day(2024, 3, 11)),
        ];
        let forward = entries_between(&entries, day(2024, 3, 2), day(2024, 3, 10));
        assert_eq!(ids(&forward), vec!["d", "c", "b"]);

        let reversed = entries_between(&entries, day(2024, 3, 10), day(2024, 3, 2));
        assert_eq!(ids(&reversed), ids(&forward));
    }

    #[test]
    fn test_entries_in_window_sorts_oldest_first() {
        let entries = vec![entry("b", day(2024, 3, 3)), entry("a", day(2024, 3, 1))];
        let window = DateWindow::new(day(2024, 3, 1), day(2024, 3, 3));
        assert_eq!(ids(&entries_in_window(&entries, window)), vec!["a", "b"]);
    }
}
