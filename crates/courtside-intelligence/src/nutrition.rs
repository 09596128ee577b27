// ABOUTME: Daily nutrition summary built from tracked meals
// ABOUTME: Missing calories or protein contribute zero to the totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use chrono::NaiveDate;
use courtside_core::models::{Meal, MealType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What was eaten on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    /// Day summarized
    pub date: NaiveDate,
    /// Meals tracked on the day
    pub meal_count: usize,
    /// Summed kcal
    pub calories: f64,
    /// Summed protein grams
    pub protein_grams: f64,
    /// Meals per meal type; types with no meals are absent
    pub by_meal_type: BTreeMap<MealType, usize>,
}

impl DailyNutrition {
    /// Summary with nothing logged
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            meal_count: 0,
            calories: 0.0,
            protein_grams: 0.0,
            by_meal_type: BTreeMap::new(),
        }
    }
}

/// Totals for meals eaten on `date`
#[must_use]
pub fn daily_nutrition(meals: &[Meal], date: NaiveDate) -> DailyNutrition {
    meals
        .iter()
        .filter(|meal| meal.date == date)
        .fold(DailyNutrition::empty(date), |mut summary, meal| {
            summary.meal_count += 1;
            summary.calories += meal.calories.unwrap_or(0.0);
            summary.protein_grams += meal.protein_grams.unwrap_or(0.0);
            *summary.by_meal_type.entry(meal.meal_type).or_insert(0) += 1;
            summary
        })
}
