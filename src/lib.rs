// ABOUTME: Main library entry point for the fitforge planning engine
// ABOUTME: Generates multi-week workout and meal plans from a user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # fitforge
//!
//! A personalized fitness-and-nutrition planning engine. Given a user
//! [`Profile`](models::Profile) (biometrics, goal, training-plan type,
//! available equipment, dietary restrictions, rest days), the engine derives
//! a multi-week calendar of daily workouts and meals plus the underlying
//! nutrition targets (BMR, TDEE, macronutrient split).
//!
//! The crate is a pure, synchronous library: no I/O, no persistence, no UI.
//! External collaborators supply a validated `Profile` and consume the
//! returned [`Plan`](models::Plan) / [`MacroSummary`](models::MacroSummary),
//! both of which are plain `serde`-serializable data.
//!
//! ## Architecture
//!
//! - **Models**: profile, plan, workout, and meal data structures
//! - **Nutrition**: BMR/TDEE/macro calculations and diet-compliance rules
//! - **Meals**: static meal catalog with goal/slot/sensitivity retrieval
//! - **Workouts**: the algorithmic generator plus fixed training programs
//!   (FBI PFT, Army ACFT, marathon, classic FBI table)
//! - **Planner**: the orchestrator assembling weeks of day plans
//!
//! ## Example
//!
//! ```rust
//! use fitforge::models::Profile;
//! use fitforge::planner::PlanGenerator;
//!
//! let profile = Profile::default();
//! let mut generator = PlanGenerator::new();
//! let plan = generator.generate(&profile)?;
//! assert_eq!(plan.weeks.len(), 12);
//! # Ok::<(), fitforge::errors::PlanError>(())
//! ```
//!
//! Plan generation shuffles meal pools and exercise selections with an
//! injectable random source; use [`PlanGenerator::with_rng`](planner::PlanGenerator::with_rng)
//! with a seeded RNG for reproducible output.

/// Tunable configuration with evidence-based defaults
pub mod config;

/// Unified error handling for plan generation
pub mod errors;

/// Static meal catalog and filtered retrieval
pub mod meals;

/// Profile, plan, workout, and meal data models
pub mod models;

/// Nutrition math and diet-compliance rules
pub mod nutrition;

/// Physiological constants with scientific citations
pub mod physiology;

/// Plan orchestration
pub mod planner;

/// Workout generators (algorithmic and fixed programs)
pub mod workouts;

pub use errors::{PlanError, PlanResult};
pub use models::{MacroSummary, Plan, Profile};
pub use planner::PlanGenerator;
