// ABOUTME: Environment-driven configuration for the statistics engine
// ABOUTME: Window sizes and validation toggle with range checks on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

//! Engine configuration
//!
//! Every value has a default and can be overridden with a `COURTSIDE_`
//! environment variable. Loading validates the result, so a returned
//! [`EngineConfig`] is always usable.

use courtside_core::constants::env_config;
use courtside_core::constants::windows::{
    DEFAULT_AVERAGE_WINDOW_DAYS, DEFAULT_WEEK_COUNT, DEFAULT_WORKOUT_WINDOW_DAYS, MAX_WEEK_COUNT,
    MAX_WINDOW_DAYS,
};
use courtside_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value falls outside its permitted range
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// An environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] VarError),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

/// Tunables for [`StatsEngine`](crate::engine::StatsEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weekly shot windows to compute
    pub week_count: u32,
    /// Trailing days for sleep, water, and rating averages
    pub average_window_days: u32,
    /// Trailing days for workout minutes and workout rating averages
    pub workout_window_days: u32,
    /// Validate entities before computing
    pub validate_inputs: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            week_count: DEFAULT_WEEK_COUNT,
            average_window_days: DEFAULT_AVERAGE_WINDOW_DAYS,
            workout_window_days: DEFAULT_WORKOUT_WINDOW_DAYS,
            validate_inputs: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is not valid unicode, fails to parse, or
    /// the resulting configuration is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_var(env_config::WEEK_COUNT, &mut config.week_count)?;
        apply_env_var(
            env_config::AVERAGE_WINDOW_DAYS,
            &mut config.average_window_days,
        )?;
        apply_env_var(
            env_config::WORKOUT_WINDOW_DAYS,
            &mut config.workout_window_days,
        )?;
        if let Some(raw) = read_env(env_config::VALIDATE_INPUTS)? {
            config.validate_inputs = parse_flag(env_config::VALIDATE_INPUTS, &raw)?;
        }
        config.validate()?;
        debug!(
            config.week_count = config.week_count,
            config.average_window_days = config.average_window_days,
            config.workout_window_days = config.workout_window_days,
            config.validate_inputs = config.validate_inputs,
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a window count or size is zero or above its maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("week_count", self.week_count, MAX_WEEK_COUNT)?;
        check_range(
            "average_window_days",
            self.average_window_days,
            MAX_WINDOW_DAYS,
        )?;
        check_range(
            "workout_window_days",
            self.workout_window_days,
            MAX_WINDOW_DAYS,
        )
    }

    /// Builder-style override of the weekly window count
    #[must_use]
    pub const fn with_week_count(mut self, week_count: u32) -> Self {
        self.week_count = week_count;
        self
    }

    /// Builder-style toggle for input validation
    #[must_use]
    pub const fn with_validation(mut self, validate_inputs: bool) -> Self {
        self.validate_inputs = validate_inputs;
        self
    }
}

fn check_range(field: &str, value: u32, max: u32) -> Result<(), ConfigError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange(format!(
            "{field} must be between 1 and {max}, got {value}"
        )))
    }
}

fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

fn apply_env_var<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Some(raw) = read_env(name)? {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{raw}'")))?;
    }
    Ok(())
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse(format!("Invalid {name}: '{raw}'"))),
    }
}
