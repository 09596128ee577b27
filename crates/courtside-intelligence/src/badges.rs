// ABOUTME: Badge catalog and threshold evaluation against cumulative user counters
// ABOUTME: Returns newly crossed badges in catalog order without mutating the earned set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use courtside_core::models::{BadgeCriteria, BadgeDefinition, UserStats};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// The built-in badge catalog, in display order
#[must_use]
pub fn default_catalog() -> Vec<BadgeDefinition> {
    vec![
        BadgeDefinition::new(
            "meal-tracker-10",
            "Nutrition Novice",
            "Track 10 meals",
            BadgeCriteria::MealsTracked,
            10,
        ),
        BadgeDefinition::new(
            "meal-tracker-50",
            "Nutrition Pro",
            "Track 50 meals",
            BadgeCriteria::MealsTracked,
            50,
        ),
        BadgeDefinition::new(
            "workout-10",
            "Workout Warrior",
            "Complete 10 workouts",
            BadgeCriteria::Workouts,
            10,
        ),
        BadgeDefinition::new(
            "workout-50",
            "Fitness Fanatic",
            "Complete 50 workouts",
            BadgeCriteria::Workouts,
            50,
        ),
        BadgeDefinition::new(
            "shots-100",
            "Shooter",
            "Make 100 shots",
            BadgeCriteria::ShotsMade,
            100,
        ),
        BadgeDefinition::new(
            "shots-1000",
            "Sharpshooter",
            "Make 1,000 shots",
            BadgeCriteria::ShotsMade,
            1_000,
        ),
        BadgeDefinition::new(
            "shots-10000",
            "Sniper",
            "Make 10,000 shots",
            BadgeCriteria::ShotsMade,
            10_000,
        ),
        BadgeDefinition::new(
            "streak-7",
            "Week Warrior",
            "Maintain a 7-day streak",
            BadgeCriteria::StreakDays,
            7,
        ),
        BadgeDefinition::new(
            "streak-30",
            "Month Master",
            "Maintain a 30-day streak",
            BadgeCriteria::StreakDays,
            30,
        ),
    ]
}

/// Definitions not yet in `earned_ids` whose threshold `stats` now meets
///
/// Results follow catalog order. A catalog listing the same id twice yields
/// it once.
#[must_use]
pub fn evaluate_badges<'a>(
    stats: &UserStats,
    earned_ids: &HashSet<String>,
    catalog: &'a [BadgeDefinition],
) -> Vec<&'a BadgeDefinition> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut awarded: Vec<&'a BadgeDefinition> = Vec::new();
    for definition in catalog {
        if earned_ids.contains(&definition.id) || !definition.is_met_by(stats) {
            continue;
        }
        if seen.insert(definition.id.as_str()) {
            awarded.push(definition);
        }
    }

    debug!(
        catalog.size = catalog.len(),
        badges.already_earned = earned_ids.len(),
        badges.newly_met = awarded.len(),
        "Evaluated badge thresholds"
    );
    awarded
}

/// Fraction of the way to `definition`'s threshold, clamped to `[0, 1]`
#[must_use]
pub fn badge_progress(stats: &UserStats, definition: &BadgeDefinition) -> f64 {
    if definition.threshold == 0 {
        return 1.0;
    }
    let current = stats.counter(definition.criteria.stat()) as f64;
    (current / definition.threshold as f64).clamp(0.0, 1.0)
}

/// Display state of one catalog badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeStatus {
    /// Catalog id
    pub badge_id: String,
    /// Display name
    pub name: String,
    /// Already awarded
    pub earned: bool,
    /// Counter value the threshold is compared against
    pub current: u64,
    /// Threshold to reach
    pub threshold: u64,
    /// Progress in `[0, 1]`; `1.0` once earned
    pub progress: f64,
}

/// Status of every catalog badge, in catalog order
#[must_use]
pub fn badge_statuses(
    stats: &UserStats,
    earned_ids: &HashSet<String>,
    catalog: &[BadgeDefinition],
) -> Vec<BadgeStatus> {
    catalog
        .iter()
        .map(|definition| {
            let earned = earned_ids.contains(&definition.id);
            BadgeStatus {
                badge_id: definition.id.clone(),
                name: definition.name.clone(),
                earned,
                current: stats.counter(definition.criteria.stat()),
                threshold: definition.threshold,
                progress: if earned {
                    1.0
                } else {
                    badge_progress(stats, definition)
                },
            }
        })
        .collect()
}
