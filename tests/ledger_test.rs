// ABOUTME: Integration tests for the stats ledger and its badge awards
// ABOUTME: Covers saturating deltas, add/delete symmetry, and append-only awards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{award_time, day, init_test_logging, shots, TEST_USER};
use courtside::{StatEvent, StatsLedger};
use courtside_core::models::{BadgeCriteria, BadgeDefinition, EarnedBadge, StatKind, UserStats};
use courtside_intelligence::default_catalog;

#[test]
fn test_tenth_meal_awards_nutrition_novice() {
    init_test_logging();
    let mut ledger = StatsLedger::new(TEST_USER);

    for _ in 0..9 {
        assert!(ledger.apply_at(StatEvent::MealTracked, award_time()).is_empty());
    }
    let awarded = ledger.apply_at(StatEvent::MealTracked, award_time());

    assert_eq!(awarded.len(), 1);
    assert_eq!(awarded[0].badge_id, "meal-tracker-10");
    assert_eq!(awarded[0].date_earned, award_time());
    assert_eq!(ledger.stats().total_meals_tracked, 10);
    assert_eq!(ledger.stats().badges_earned, 1);
    assert!(ledger.has_badge("meal-tracker-10"));

    assert!(ledger.apply_at(StatEvent::MealTracked, award_time()).is_empty());
    assert_eq!(ledger.earned_badges().len(), 1);
}

#[test]
fn test_negative_delta_saturates_at_zero() {
    let mut ledger = StatsLedger::new(TEST_USER);
    ledger.record_event(StatKind::TotalWorkouts, 2);
    ledger.record_event(StatKind::TotalWorkouts, -5);
    assert_eq!(ledger.stats().total_workouts, 0);

    ledger.apply(StatEvent::WorkoutDeleted);
    assert_eq!(ledger.stats().total_workouts, 0);
}

#[test]
fn test_shot_add_then_delete_restores_counters() {
    let mut ledger = StatsLedger::new(TEST_USER);
    let session = shots("s1", day(2024, 6, 1), 40, 75);

    ledger.apply(StatEvent::shots_logged(&session));
    assert_eq!(ledger.stats().total_shots_made, 40);
    assert_eq!(ledger.stats().total_shots_attempted, 75);

    ledger.apply(StatEvent::shots_deleted(&session));
    assert_eq!(*ledger.stats(), UserStats::default());
}

#[test]
fn test_shot_edit_applies_difference() {
    let mut ledger = StatsLedger::new(TEST_USER);
    let before = shots("s1", day(2024, 6, 1), 60, 100);
    let after = shots("s1", day(2024, 6, 1), 45, 110);

    ledger.apply_at(StatEvent::shots_logged(&before), award_time());
    ledger.apply_at(StatEvent::shots_edited(&before, &after), award_time());

    assert_eq!(ledger.stats().total_shots_made, 45);
    assert_eq!(ledger.stats().total_shots_attempted, 110);
}

#[test]
fn test_badges_survive_counter_decrease() {
    let mut ledger = StatsLedger::new(TEST_USER);
    let session = shots("s1", day(2024, 6, 1), 100, 150);

    let awarded = ledger.apply_at(StatEvent::shots_logged(&session), award_time());
    assert_eq!(awarded[0].badge_id, "shots-100");

    ledger.apply_at(StatEvent::shots_deleted(&session), award_time());
    assert_eq!(ledger.stats().total_shots_made, 0);
    assert!(ledger.has_badge("shots-100"));

    let again = ledger.apply_at(StatEvent::shots_logged(&session), award_time());
    assert!(again.is_empty());
    assert_eq!(ledger.stats().badges_earned, 1);
}

#[test]
fn test_streak_update_sets_counter() {
    let mut ledger = StatsLedger::new(TEST_USER);
    let awarded = ledger.apply_at(StatEvent::StreakUpdated { days: 7 }, award_time());
    assert_eq!(ledger.stats().streak_days, 7);
    assert_eq!(awarded[0].badge_id, "streak-7");

    ledger.apply_at(StatEvent::StreakUpdated { days: 0 }, award_time());
    assert_eq!(ledger.stats().streak_days, 0);
    assert!(ledger.has_badge("streak-7"));
}

#[test]
fn test_one_event_can_award_several_badges() {
    let mut ledger = StatsLedger::new(TEST_USER);
    let awarded = ledger.record_event_at(StatKind::TotalShotsMade, 1_000, award_time());
    let ids: Vec<&str> = awarded.iter().map(|b| b.badge_id.as_str()).collect();
    assert_eq!(ids, vec!["shots-100", "shots-1000"]);
    assert_eq!(ledger.stats().badges_earned, 2);
}

#[test]
fn test_evaluate_now_on_restored_ledger() {
    let stats = UserStats {
        total_workouts: 12,
        total_meals_tracked: 10,
        badges_earned: 1,
        ..UserStats::default()
    };
    let catalog = vec![
        BadgeDefinition::new("workout-10", "Workout Warrior", "10", BadgeCriteria::Workouts, 10),
        BadgeDefinition::new(
            "meal-tracker-10",
            "Nutrition Novice",
            "10",
            BadgeCriteria::MealsTracked,
            10,
        ),
    ];
    let earlier = award_time() - Duration::days(3);
    let earned = vec![
        EarnedBadge {
            badge_id: "workout-10".to_owned(),
            date_earned: award_time(),
        },
        EarnedBadge {
            badge_id: "workout-10".to_owned(),
            date_earned: earlier,
        },
    ];

    let mut ledger = StatsLedger::restore(TEST_USER, stats, earned, catalog);
    assert_eq!(ledger.earned_badges().len(), 1);
    assert_eq!(ledger.earned_badges()[0].date_earned, earlier);

    let awarded = ledger.evaluate_now_at(award_time());
    assert_eq!(awarded.len(), 1);
    assert_eq!(awarded[0].badge_id, "meal-tracker-10");
    assert_eq!(ledger.stats().badges_earned, 2);
    assert!(ledger.evaluate_now().is_empty());
}

#[test]
fn test_event_deltas() {
    assert_eq!(
        StatEvent::ShotsEdited {
            previous_made: 10,
            previous_attempted: 20,
            made: 7,
            attempted: 25,
        }
        .deltas(),
        vec![
            (StatKind::TotalShotsMade, -3),
            (StatKind::TotalShotsAttempted, 5)
        ]
    );
    assert!(StatEvent::StreakUpdated { days: 3 }.deltas().is_empty());
}

#[test]
fn test_stat_event_serialization() {
    let json = serde_json::to_value(StatEvent::ShotsLogged {
        made: 3,
        attempted: 5,
    })
    .unwrap();
    assert_eq!(json["type"], "shots_logged");
    assert_eq!(json["made"], 3);
}

#[test]
fn test_restore_reconciles_badge_counter_with_awards() {
    init_test_logging();
    let stats = UserStats {
        total_workouts: 12,
        badges_earned: 5,
        ..UserStats::default()
    };
    let earned = vec![
        EarnedBadge {
            badge_id: "workout-10".to_owned(),
            date_earned: award_time(),
        },
        EarnedBadge {
            badge_id: "workout-10".to_owned(),
            date_earned: award_time(),
        },
    ];

    let ledger = StatsLedger::restore(TEST_USER, stats, earned, default_catalog());
    assert_eq!(ledger.earned_badges().len(), 1);
    assert_eq!(ledger.stats().badges_earned, 1);
    assert_eq!(ledger.stats().total_workouts, 12);
}

#[test]
fn test_badge_counter_ignores_direct_changes() {
    let mut ledger = StatsLedger::new(TEST_USER);
    for _ in 0..10 {
        ledger.apply_at(StatEvent::MealTracked, award_time());
    }
    assert_eq!(ledger.stats().badges_earned, 1);

    ledger.record_event_at(StatKind::BadgesEarned, 4, award_time());
    assert_eq!(ledger.stats().badges_earned, 1);
    ledger.record_event_at(StatKind::BadgesEarned, -1, award_time());
    assert_eq!(ledger.stats().badges_earned, 1);
    assert_eq!(ledger.earned_badges().len(), 1);
}

#[test]
fn test_streak_update_sets_counter_in_both_directions() {
    init_test_logging();
    let mut ledger = StatsLedger::new(TEST_USER);

    ledger.apply_at(StatEvent::StreakUpdated { days: 6 }, award_time());
    assert_eq!(ledger.stats().streak_days, 6);
    ledger.apply_at(StatEvent::StreakUpdated { days: 2 }, award_time());
    assert_eq!(ledger.stats().streak_days, 2);
    assert!(StatEvent::StreakUpdated { days: 2 }.deltas().is_empty());
}
