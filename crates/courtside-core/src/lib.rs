// ABOUTME: Core types and constants for the Courtside training companion
// ABOUTME: Foundation crate with error handling, entity models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

#![deny(unsafe_code)]

//! # Courtside Core
//!
//! Foundation crate providing the entity models and error types shared by the
//! statistics engine. The types here are plain data: they are created and
//! mutated by the surrounding application and handed to the engine as
//! read-only snapshots.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `EntityError`
//! - **constants**: Domain constants (window sizes, rating bounds, unit conversions)
//! - **models**: Logged entities, badge definitions, and cumulative user stats

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (shot sessions, workouts, meals, wellness entries, badges)
pub mod models;
