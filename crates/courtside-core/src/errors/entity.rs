// ABOUTME: Entity validation error types for malformed snapshot records
// ABOUTME: Structured errors that convert into AppError with the INVALID_ENTITY code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Courtside Training

//! # Entity Error Types
//!
//! Provides structured errors for records that break their documented
//! invariants (negative counts, made above attempted, ratings out of range).
//! Each variant names the entity kind, the record id, and the offending field
//! so the caller can decide whether to surface or discard the record.

use super::{AppError, ErrorCode};
use serde_json::json;
use thiserror::Error;

/// Invariant violations detected while validating a logged entity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    /// A required identifier or text field is empty
    #[error("{entity} {id:?}: field `{field}` must not be empty")]
    MissingField {
        /// Entity kind (e.g. "shot session")
        entity: &'static str,
        /// Record identifier (may be empty when the id itself is missing)
        id: String,
        /// Name of the empty field
        field: &'static str,
    },
    /// A numeric field is negative, NaN, or infinite
    #[error("{entity} {id:?}: field `{field}` must be a finite non-negative number, got {value}")]
    InvalidNumber {
        /// Entity kind
        entity: &'static str,
        /// Record identifier
        id: String,
        /// Name of the invalid field
        field: &'static str,
        /// Value supplied
        value: f64,
    },
    /// A shot session reports more makes than attempts
    #[error("shot session {id:?}: shots made ({made}) exceeds shots attempted ({attempted})")]
    MadeExceedsAttempted {
        /// Record identifier
        id: String,
        /// Shots made
        made: u32,
        /// Shots attempted
        attempted: u32,
    },
    /// A bounded field is outside its inclusive range
    #[error("{entity} {id:?}: field `{field}` must be within {min}..={max}, got {value}")]
    OutOfRange {
        /// Entity kind
        entity: &'static str,
        /// Record identifier
        id: String,
        /// Name of the field
        field: &'static str,
        /// Value supplied
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// A stepped field is not a multiple of its step (day ratings use half steps)
    #[error("{entity} {id:?}: field `{field}` must be a multiple of {step}, got {value}")]
    InvalidStep {
        /// Entity kind
        entity: &'static str,
        /// Record identifier
        id: String,
        /// Name of the field
        field: &'static str,
        /// Value supplied
        value: f64,
        /// Required step
        step: f64,
    },
}

impl EntityError {
    /// Identifier of the offending record
    #[must_use]
    pub fn record_id(&self) -> &str {
        match self {
            Self::MissingField { id, .. }
            | Self::InvalidNumber { id, .. }
            | Self::MadeExceedsAttempted { id, .. }
            | Self::OutOfRange { id, .. }
            | Self::InvalidStep { id, .. } => id,
        }
    }

    /// Name of the offending field
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidStep { field, .. } => field,
            Self::MadeExceedsAttempted { .. } => "shotsMade",
        }
    }
}

impl From<EntityError> for AppError {
    fn from(error: EntityError) -> Self {
        let id = error.record_id().to_owned();
        let field = error.field();
        Self::new(ErrorCode::InvalidEntity, error.to_string())
            .with_resource_id(id)
            .with_details(json!({ "field": field }))
            .with_source(error)
    }
}
