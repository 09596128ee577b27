// ABOUTME: Main library entry point for the Courtside statistics and badge engine
// ABOUTME: Exposes configuration, logging, the stats engine facade, and the stats ledger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

#![deny(unsafe_code)]

//! # Courtside Stats
//!
//! Derived statistics and badge rules for a basketball training companion.
//! The host application owns persistence, sync, and UI; it hands this crate a
//! [`Snapshot`] of a user's logged entities and receives aggregate values, and
//! it routes every counter change through a [`StatsLedger`] so badges are
//! awarded as soon as a threshold is crossed.
//!
//! ## Architecture
//!
//! - **`courtside_core`**: entity models, error types, constants
//! - **`courtside_intelligence`**: pure aggregate and badge functions
//! - **`config`**: environment configuration for window sizes and validation
//! - **`engine`**: configured facade and the dashboard summary
//! - **`ledger`**: counter mutation and badge awards
//! - **`logging`**: subscriber setup and structured event helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use courtside::{EngineConfig, Snapshot, StatsEngine, StatsLedger, StatEvent};
//! use courtside_core::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let engine = StatsEngine::new(EngineConfig::default());
//!     let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
//!     let summary = engine.summarize(&Snapshot::default(), today)?;
//!     println!("Lifetime percentage: {:?}", summary.lifetime_percentage);
//!
//!     let mut ledger = StatsLedger::new("user-1");
//!     for badge in ledger.apply(StatEvent::MealTracked) {
//!         println!("Earned {}", badge.badge_id);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration for the engine
pub mod config;

/// Engine facade and dashboard summary
pub mod engine;

/// Counter mutation and badge awards
pub mod ledger;

/// Logging configuration and structured event helpers
pub mod logging;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Snapshot, StatsEngine, StatsSummary};
pub use ledger::{StatEvent, StatsLedger};
pub use logging::{LogFormat, LoggingConfig, StatsLogger};
