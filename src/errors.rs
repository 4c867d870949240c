// ABOUTME: Unified error handling for the planning engine
// ABOUTME: Defines PlanError variants and the PlanResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! The engine has very few fallible operations: it performs no I/O and never
//! parses untrusted input. The remaining failure modes are data-quality ones —
//! a meal pool emptied by combined diet and sensitivity filters, or a
//! configuration whose tunables are inconsistent. Everything else degrades
//! gracefully (unknown inputs fall back to defaults at the serde boundary,
//! out-of-range week/rest-day values are clamped before generation).

use crate::models::{Goal, MealType};
use thiserror::Error;

/// Errors produced during plan generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Diet and sensitivity filters left no candidate meal for a slot.
    ///
    /// The catalog guarantees at least one diet-compliant meal per
    /// (goal, slot) combination, but food sensitivities stack on top of the
    /// diet filter and can exhaust the pool.
    #[error("no {meal_type} options remain for the {goal} catalog after diet and sensitivity filters")]
    InsufficientMealOptions {
        /// Goal partition that was being drawn from
        goal: Goal,
        /// Meal slot whose pool was exhausted
        meal_type: MealType,
    },

    /// Planner configuration failed validation
    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate
pub type PlanResult<T> = Result<T, PlanError>;
