// ABOUTME: Tests for entity deserialization, date handling, and invariant validation
// ABOUTME: Documents arrive in camelCase with either plain dates or RFC 3339 timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, day_rating, meal, shots, sleep, workout_rating};
use courtside::Snapshot;
use courtside_core::errors::{AppError, EntityError, ErrorCode, ErrorResponse};
use courtside_core::models::{
    format_calendar_day, parse_calendar_day, validate_all, Intensity, Meal, MealType, ShotSession,
    Validate, WaterEntry, Workout,
};
use serde_json::json;

#[test]
fn test_shot_session_from_document() {
    let session: ShotSession = serde_json::from_value(json!({
        "id": "s1",
        "userId": "user-1",
        "date": "2024-02-03",
        "shotsMade": 8,
        "shotsAttempted": 15,
        "shotType": "three-pointer"
    }))
    .unwrap();

    assert_eq!(session.date, day(2024, 2, 3));
    assert_eq!(session.shot_type.as_deref(), Some("three-pointer"));
    assert!(session.location.is_none());

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["date"], "2024-02-03");
    assert_eq!(value["shotsMade"], 8);
}

#[test]
fn test_timestamp_dates_are_accepted() {
    let workout: Workout = serde_json::from_value(json!({
        "id": "w1",
        "userId": "user-1",
        "date": "2024-02-03T18:45:00.000Z",
        "duration": 60,
        "intensity": "high",
        "focusAreas": ["shooting", "conditioning", "shooting"]
    }))
    .unwrap();

    assert_eq!(workout.date, day(2024, 2, 3));
    assert_eq!(workout.duration_minutes, 60);
    assert_eq!(workout.intensity, Some(Intensity::High));
    assert_eq!(workout.focus_areas.len(), 2);
}

#[test]
fn test_bad_date_fails_deserialization() {
    let result: Result<WaterEntry, _> = serde_json::from_value(json!({
        "id": "w1",
        "userId": "user-1",
        "date": "03/02/2024",
        "glasses": 3
    }));
    assert!(result.is_err());

    let error = parse_calendar_day("yesterday").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_water_document_with_glasses_liters_and_amount() {
    let entry: WaterEntry = serde_json::from_value(json!({
        "id": "w1",
        "userId": "user-1",
        "date": "2024-05-01",
        "glasses": 3,
        "liters": 0.75,
        "amount": 3
    }))
    .unwrap();
    assert_eq!(entry.glasses, 3);
    assert_eq!(entry.date, day(2024, 5, 1));

    let snapshot: Snapshot = serde_json::from_value(json!({
        "waterEntries": [{
            "id": "w1",
            "userId": "user-1",
            "date": "2024-05-01",
            "glasses": 3,
            "liters": 0.75,
            "amount": 3
        }]
    }))
    .unwrap();
    assert_eq!(snapshot.water_entries, vec![entry]);
}

#[test]
fn test_water_amount_is_read_when_glasses_is_missing() {
    let entry: WaterEntry = serde_json::from_value(json!({
        "id": "w2",
        "userId": "user-1",
        "date": "2024-05-02",
        "amount": 5
    }))
    .unwrap();
    assert_eq!(entry.glasses, 5);

    let mixed: WaterEntry = serde_json::from_value(json!({
        "id": "w3",
        "userId": "user-1",
        "date": "2024-05-02",
        "glasses": 4,
        "amount": 9
    }))
    .unwrap();
    assert_eq!(mixed.glasses, 4);

    let missing: Result<WaterEntry, _> = serde_json::from_value(json!({
        "id": "w4",
        "userId": "user-1",
        "date": "2024-05-02"
    }));
    assert!(missing.is_err());

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["glasses"], 5);
    assert!(value.get("amount").is_none());
}

#[test]
fn test_calendar_day_format_sorts_like_dates() {
    let early = format_calendar_day(day(2023, 12, 31));
    let late = format_calendar_day(day(2024, 1, 1));
    assert_eq!(early, "2023-12-31");
    assert!(early < late);
}

#[test]
fn test_meal_document_with_protein_alias() {
    let meal: Meal = serde_json::from_value(json!({
        "id": "m1",
        "userId": "user-1",
        "date": "2024-02-03",
        "mealType": "breakfast",
        "description": "Oats",
        "calories": 420.0,
        "protein": 18.5
    }))
    .unwrap();
    assert_eq!(meal.meal_type, MealType::Breakfast);
    assert_eq!(meal.protein_grams, Some(18.5));
    assert_eq!(MealType::from_str_lossy("Brunch"), MealType::Snack);
}

#[test]
fn test_made_above_attempted_is_invalid() {
    let error = shots("s1", day(2024, 1, 1), 6, 5).validate().unwrap_err();
    assert!(matches!(
        error,
        EntityError::MadeExceedsAttempted {
            made: 6,
            attempted: 5,
            ..
        }
    ));
    assert_eq!(error.record_id(), "s1");
    assert!(shots("s2", day(2024, 1, 1), 5, 5).validate().is_ok());
}

#[test]
fn test_wellness_bounds() {
    assert!(sleep("a", day(2024, 1, 1), 24.0, 5.0).validate().is_ok());
    assert!(matches!(
        sleep("b", day(2024, 1, 1), 25.0, 3.0).validate(),
        Err(EntityError::OutOfRange { field: "hours", .. })
    ));
    assert!(sleep("c", day(2024, 1, 1), 8.0, 0.0).validate().is_err());

    assert!(day_rating("r1", day(2024, 1, 1), 4.5).validate().is_ok());
    assert!(matches!(
        day_rating("r2", day(2024, 1, 1), 4.25).validate(),
        Err(EntityError::InvalidStep { .. })
    ));

    assert!(workout_rating("w", day(2024, 1, 1), (1.0, 5.0, 3.0)).validate().is_ok());
    assert!(workout_rating("w", day(2024, 1, 1), (1.0, 6.0, 3.0)).validate().is_err());
}

#[test]
fn test_negative_macros_are_invalid() {
    let bad = meal("m1", day(2024, 1, 1), MealType::Lunch).with_macros(-10.0, 20.0);
    assert!(matches!(
        bad.validate(),
        Err(EntityError::InvalidNumber { field: "calories", .. })
    ));
    let nan = meal("m2", day(2024, 1, 1), MealType::Lunch).with_macros(300.0, f64::NAN);
    assert!(nan.validate().is_err());
}

#[test]
fn test_validate_all_reports_first_failure() {
    let sessions = vec![
        shots("ok", day(2024, 1, 1), 1, 2),
        ShotSession::new("", "user-1", day(2024, 1, 1), 1, 2),
        shots("bad", day(2024, 1, 1), 3, 2),
    ];
    let error = validate_all(&sessions).unwrap_err();
    assert!(matches!(error, EntityError::MissingField { field: "id", .. }));
}

#[test]
fn test_entity_error_converts_to_app_error() {
    let error: AppError = shots("s9", day(2024, 1, 1), 9, 3).validate().unwrap_err().into();
    assert_eq!(error.code, ErrorCode::InvalidEntity);
    assert_eq!(error.context.resource_id.as_deref(), Some("s9"));
    assert_eq!(error.context.details["field"], "shotsMade");

    let response = serde_json::to_value(ErrorResponse::from(error)).unwrap();
    assert_eq!(response["error"]["code"], "INVALID_ENTITY");
    assert_eq!(response["error"]["resource_id"], "s9");
}
