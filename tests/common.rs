// ABOUTME: Shared test utilities for Courtside integration tests
// ABOUTME: Quiet tracing setup and fixture builders for logged entities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use courtside_core::models::{
    DayRating, Meal, MealType, ShotSession, SleepEntry, WaterEntry, Workout, WorkoutRating,
};
use std::env;
use std::sync::Once;
use tracing::Level;

pub const TEST_USER: &str = "user-1";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day shorthand
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fixed award timestamp
pub fn award_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn shots(id: &str, date: NaiveDate, made: u32, attempted: u32) -> ShotSession {
    ShotSession::new(id, TEST_USER, date, made, attempted)
}

pub fn workout(id: &str, date: NaiveDate, minutes: u32) -> Workout {
    Workout::new(id, TEST_USER, date, minutes)
}

pub fn workout_rating(id: &str, date: NaiveDate, scores: (f64, f64, f64)) -> WorkoutRating {
    WorkoutRating::new(id, TEST_USER, format!("workout-{id}"), date, scores)
}

pub fn meal(id: &str, date: NaiveDate, meal_type: MealType) -> Meal {
    Meal::new(id, TEST_USER, date, meal_type)
}

pub fn sleep(id: &str, date: NaiveDate, hours: f64, quality: f64) -> SleepEntry {
    SleepEntry::new(id, TEST_USER, date, hours, quality)
}

pub fn water(id: &str, date: NaiveDate, glasses: u32) -> WaterEntry {
    WaterEntry::new(id, TEST_USER, date, glasses)
}

pub fn day_rating(id: &str, date: NaiveDate, rating: f64) -> DayRating {
    DayRating::new(id, TEST_USER, date, rating)
}

/// Float comparison for averages
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
