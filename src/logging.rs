// ABOUTME: Logging configuration and structured event helpers for the stats engine
// ABOUTME: Sets up tracing-subscriber output and logs ledger events with dotted field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

//! Structured logging setup
//!
//! The library never installs a subscriber on its own. Host applications call
//! [`LoggingConfig::init`] (or [`init_from_env`]) once at startup.

use anyhow::Result;
use courtside_core::constants::service_names;
use courtside_core::models::{EarnedBadge, StatKind};
use std::env;
use std::io;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::COURTSIDE_STATS.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`, and `SERVICE_NAME`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: env::var("LOG_INCLUDE_LOCATION")
                .is_ok_and(|value| value != "false" && value != "0"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Filter built from the configured level with this crate's targets pinned to it
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::new(&self.level);
        for target in ["courtside", "courtside_core", "courtside_intelligence"] {
            filter = filter.add_directive(
                format!("{target}={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into()),
            );
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout);
                registry.with(layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Courtside stats logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured log events emitted by the stats ledger
pub struct StatsLogger;

impl StatsLogger {
    /// A counter changed
    pub fn log_stat_event(user_id: &str, kind: StatKind, delta: i64, value: u64) {
        debug!(
            user.id = %user_id,
            stat.kind = %kind,
            stat.delta = delta,
            stat.value = value,
            "Stat counter updated"
        );
    }

    /// A negative delta would have taken a counter below zero
    pub fn log_stat_clamped(user_id: &str, kind: StatKind, delta: i64, previous: u64) {
        warn!(
            user.id = %user_id,
            stat.kind = %kind,
            stat.delta = delta,
            stat.previous = previous,
            "Stat counter clamped at zero"
        );
    }

    /// A caller tried to change a counter only the ledger may set
    pub fn log_stat_ignored(user_id: &str, kind: StatKind, delta: i64) {
        warn!(
            user.id = %user_id,
            stat.kind = %kind,
            stat.delta = delta,
            "Ignored direct change to ledger-owned counter"
        );
    }

    /// Restored badge counter disagreed with the restored awards
    pub fn log_badges_reconciled(user_id: &str, recorded: u64, awarded: u64) {
        warn!(
            user.id = %user_id,
            badges.recorded = recorded,
            badges.earned = awarded,
            "Badge counter reconciled with earned badges"
        );
    }

    /// A badge was awarded
    pub fn log_badge_awarded(user_id: &str, badge: &EarnedBadge, badges_earned: u64) {
        info!(
            user.id = %user_id,
            badge.id = %badge.badge_id,
            badge.date_earned = %badge.date_earned,
            badges.earned = badges_earned,
            "Badge awarded"
        );
    }
}
