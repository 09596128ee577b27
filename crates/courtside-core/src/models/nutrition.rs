// ABOUTME: Meal tracking model with meal type and optional macros
// ABOUTME: Calories and protein are optional and must be non-negative when present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

use super::{deserialize_calendar_day, require_non_empty, require_non_negative, Dated, Validate};
use crate::errors::EntityError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, treating anything unrecognized as a snack
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

/// One tracked meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Document identifier
    pub id: String,
    /// Owner of the meal
    pub user_id: String,
    /// Calendar day the meal was eaten
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    /// Breakfast, lunch, dinner, or snack
    pub meal_type: MealType,
    /// What was eaten
    #[serde(default)]
    pub description: String,
    /// Energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default, alias = "protein", skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<f64>,
}

impl Meal {
    /// Create a meal without description or macros
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            meal_type,
            description: String::new(),
            calories: None,
            protein_grams: None,
        }
    }

    /// Set calories and protein
    #[must_use]
    pub fn with_macros(mut self, calories: f64, protein_grams: f64) -> Self {
        self.calories = Some(calories);
        self.protein_grams = Some(protein_grams);
        self
    }
}

impl Dated for Meal {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Validate for Meal {
    fn validate(&self) -> Result<(), EntityError> {
        require_non_empty("meal", &self.id, "id", &self.id)?;
        require_non_empty("meal", &self.id, "userId", &self.user_id)?;
        if let Some(calories) = self.calories {
            require_non_negative("meal", &self.id, "calories", calories)?;
        }
        if let Some(protein) = self.protein_grams {
            require_non_negative("meal", &self.id, "proteinGrams", protein)?;
        }
        Ok(())
    }
}
