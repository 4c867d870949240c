// ABOUTME: Nutrition pipeline: macro calculation and diet rule enforcement
// ABOUTME: Calculator derives daily targets; diet rules filter the meal catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Nutrition
//!
//! Two halves: [`calculator`] turns a profile into daily and per-meal macro
//! targets, and [`diet_rules`] defines the ratio tables and exclusion lists
//! that shape those targets and filter the meal catalog.

pub mod calculator;
pub mod diet_rules;

pub use calculator::{fit_meal_to_targets, macro_summary, macro_targets};
pub use diet_rules::{avoids_sensitivities, goal_adjusted_ratios, is_compliant};
