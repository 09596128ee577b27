// ABOUTME: Single owner of a user's cumulative counters and earned badges
// ABOUTME: Applies signed counter deltas and awards badges after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

//! # Stats Ledger
//!
//! Every change to [`UserStats`] goes through [`StatsLedger::record_event`]
//! or [`StatsLedger::apply`]. Each call re-evaluates the badge catalog, so a
//! badge is awarded the moment its threshold is crossed regardless of which
//! screen logged the activity. Deletes carry the values of the entity being
//! removed, which reverses exactly what the matching add did.
//!
//! Counters never go below zero. Earned badges are never revoked, even when a
//! later delete takes the counter back under the threshold.
//!
//! The ledger is a plain owned value. Callers hold one per user and serialize
//! writes to it.

use crate::logging::StatsLogger;
use chrono::{DateTime, Utc};
use courtside_core::models::{BadgeDefinition, EarnedBadge, ShotSession, StatKind, UserStats};
use courtside_intelligence::badges::{default_catalog, evaluate_badges};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A domain event that changes one or more counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatEvent {
    /// A shot session was logged
    ShotsLogged {
        /// Shots made in the session
        made: u32,
        /// Shots attempted in the session
        attempted: u32,
    },
    /// A shot session's numbers were changed
    ShotsEdited {
        /// Made count before the edit
        previous_made: u32,
        /// Attempted count before the edit
        previous_attempted: u32,
        /// Made count after the edit
        made: u32,
        /// Attempted count after the edit
        attempted: u32,
    },
    /// A shot session was deleted
    ShotsDeleted {
        /// Shots made in the deleted session
        made: u32,
        /// Shots attempted in the deleted session
        attempted: u32,
    },
    /// A workout was logged
    WorkoutLogged,
    /// A workout was deleted
    WorkoutDeleted,
    /// A meal was tracked
    MealTracked,
    /// A tracked meal was deleted
    MealDeleted,
    /// The activity streak was recomputed
    StreakUpdated {
        /// New streak length in days
        days: u64,
    },
}

impl StatEvent {
    /// Event for logging `session`
    #[must_use]
    pub const fn shots_logged(session: &ShotSession) -> Self {
        Self::ShotsLogged {
            made: session.shots_made,
            attempted: session.shots_attempted,
        }
    }

    /// Event for replacing `previous` with `current`
    #[must_use]
    pub const fn shots_edited(previous: &ShotSession, current: &ShotSession) -> Self {
        Self::ShotsEdited {
            previous_made: previous.shots_made,
            previous_attempted: previous.shots_attempted,
            made: current.shots_made,
            attempted: current.shots_attempted,
        }
    }

    /// Event for deleting `session`
    #[must_use]
    pub const fn shots_deleted(session: &ShotSession) -> Self {
        Self::ShotsDeleted {
            made: session.shots_made,
            attempted: session.shots_attempted,
        }
    }

    /// Counter changes this event performs, in order
    #[must_use]
    pub fn deltas(&self) -> Vec<(StatKind, i64)> {
        match *self {
            Self::ShotsLogged { made, attempted } => vec![
                (StatKind::TotalShotsMade, i64::from(made)),
                (StatKind::TotalShotsAttempted, i64::from(attempted)),
            ],
            Self::ShotsEdited {
                previous_made,
                previous_attempted,
                made,
                attempted,
            } => vec![
                (
                    StatKind::TotalShotsMade,
                    i64::from(made) - i64::from(previous_made),
                ),
                (
                    StatKind::TotalShotsAttempted,
                    i64::from(attempted) - i64::from(previous_attempted),
                ),
            ],
            Self::ShotsDeleted { made, attempted } => vec![
                (StatKind::TotalShotsMade, -i64::from(made)),
                (StatKind::TotalShotsAttempted, -i64::from(attempted)),
            ],
            Self::WorkoutLogged => vec![(StatKind::TotalWorkouts, 1)],
            Self::WorkoutDeleted => vec![(StatKind::TotalWorkouts, -1)],
            Self::MealTracked => vec![(StatKind::TotalMealsTracked, 1)],
            Self::MealDeleted => vec![(StatKind::TotalMealsTracked, -1)],
            Self::StreakUpdated { .. } => Vec::new(),
        }
    }
}

/// Owner of one user's counters and earned badges
#[derive(Debug, Clone)]
pub struct StatsLedger {
    user_id: String,
    stats: UserStats,
    earned: Vec<EarnedBadge>,
    catalog: Vec<BadgeDefinition>,
}

impl StatsLedger {
    /// Fresh ledger with zeroed counters and the built-in catalog
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_catalog(user_id, default_catalog())
    }

    /// Fresh ledger over a custom catalog
    #[must_use]
    pub fn with_catalog(user_id: impl Into<String>, catalog: Vec<BadgeDefinition>) -> Self {
        Self {
            user_id: user_id.into(),
            stats: UserStats::default(),
            earned: Vec::new(),
            catalog,
        }
    }

    /// Ledger restored from persisted counters and awards
    ///
    /// Duplicate awards for the same badge keep the earliest entry, and
    /// `badges_earned` is set to the number of distinct awards.
    #[must_use]
    pub fn restore(
        user_id: impl Into<String>,
        mut stats: UserStats,
        mut earned: Vec<EarnedBadge>,
        catalog: Vec<BadgeDefinition>,
    ) -> Self {
        let user_id = user_id.into();
        let mut seen = HashSet::new();
        earned.sort_by_key(|badge| badge.date_earned);
        earned.retain(|badge| seen.insert(badge.badge_id.clone()));

        let awarded = earned.len() as u64;
        if stats.badges_earned != awarded {
            StatsLogger::log_badges_reconciled(&user_id, stats.badges_earned, awarded);
            stats.badges_earned = awarded;
        }
        Self {
            user_id,
            stats,
            earned,
            catalog,
        }
    }

    /// Owner of the ledger
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Current counters
    #[must_use]
    pub const fn stats(&self) -> &UserStats {
        &self.stats
    }

    /// Awards so far, oldest first
    #[must_use]
    pub fn earned_badges(&self) -> &[EarnedBadge] {
        &self.earned
    }

    /// Whether `badge_id` has been awarded
    #[must_use]
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.earned.iter().any(|badge| badge.badge_id == badge_id)
    }

    /// Ids of every awarded badge
    #[must_use]
    pub fn earned_ids(&self) -> HashSet<String> {
        self.earned
            .iter()
            .map(|badge| badge.badge_id.clone())
            .collect()
    }

    /// Catalog the ledger evaluates against
    #[must_use]
    pub fn catalog(&self) -> &[BadgeDefinition] {
        &self.catalog
    }

    /// Apply a signed delta to one counter, then award newly met badges
    ///
    /// `StatKind::BadgesEarned` belongs to the ledger and only moves when a
    /// badge is awarded; a delta for it is ignored. Returns the badges
    /// awarded by this call.
    pub fn record_event(&mut self, kind: StatKind, delta: i64) -> Vec<EarnedBadge> {
        self.record_event_at(kind, delta, Utc::now())
    }

    /// [`record_event`](Self::record_event) with an explicit award timestamp
    pub fn record_event_at(
        &mut self,
        kind: StatKind,
        delta: i64,
        now: DateTime<Utc>,
    ) -> Vec<EarnedBadge> {
        if kind == StatKind::BadgesEarned {
            StatsLogger::log_stat_ignored(&self.user_id, kind, delta);
        } else {
            self.adjust(kind, delta);
        }
        self.award_at(now)
    }

    /// Apply every counter change of `event`, then award newly met badges
    pub fn apply(&mut self, event: StatEvent) -> Vec<EarnedBadge> {
        self.apply_at(event, Utc::now())
    }

    /// [`apply`](Self::apply) with an explicit award timestamp
    pub fn apply_at(&mut self, event: StatEvent, now: DateTime<Utc>) -> Vec<EarnedBadge> {
        if let StatEvent::StreakUpdated { days } = event {
            let previous = self.stats.streak_days;
            self.stats.streak_days = days;
            StatsLogger::log_stat_event(
                &self.user_id,
                StatKind::StreakDays,
                signed_difference(previous, days),
                days,
            );
        }
        for (kind, delta) in event.deltas() {
            self.adjust(kind, delta);
        }
        self.award_at(now)
    }

    /// Evaluate the catalog without changing any counter
    pub fn evaluate_now(&mut self) -> Vec<EarnedBadge> {
        self.award_at(Utc::now())
    }

    /// [`evaluate_now`](Self::evaluate_now) with an explicit award timestamp
    pub fn evaluate_now_at(&mut self, now: DateTime<Utc>) -> Vec<EarnedBadge> {
        self.award_at(now)
    }

    fn adjust(&mut self, kind: StatKind, delta: i64) {
        let counter = self.stats.counter_mut(kind);
        let previous = *counter;
        let magnitude = delta.unsigned_abs();
        if delta >= 0 {
            *counter = previous.saturating_add(magnitude);
        } else {
            if magnitude > previous {
                StatsLogger::log_stat_clamped(&self.user_id, kind, delta, previous);
            }
            *counter = previous.saturating_sub(magnitude);
        }
        let value = *counter;
        StatsLogger::log_stat_event(&self.user_id, kind, delta, value);
    }

    fn award_at(&mut self, now: DateTime<Utc>) -> Vec<EarnedBadge> {
        let earned_ids = self.earned_ids();
        let awarded: Vec<EarnedBadge> = evaluate_badges(&self.stats, &earned_ids, &self.catalog)
            .into_iter()
            .map(|definition| EarnedBadge::new(definition, now))
            .collect();

        for badge in &awarded {
            self.stats.badges_earned = self.stats.badges_earned.saturating_add(1);
            StatsLogger::log_badge_awarded(&self.user_id, badge, self.stats.badges_earned);
        }
        self.earned.extend(awarded.iter().cloned());
        awarded
    }
}

/// `to - from` as a signed delta, saturating at the `i64` bounds
fn signed_difference(from: u64, to: u64) -> i64 {
    if to >= from {
        i64::try_from(to - from).unwrap_or(i64::MAX)
    } else {
        i64::try_from(from - to).map_or(i64::MIN, |magnitude| -magnitude)
    }
}
