// ABOUTME: Workout generators: the algorithmic engine and the fixed test-prep programs
// ABOUTME: Shared phase and equipment-level types live here; each program buckets equipment itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workouts
//!
//! [`algorithmic`] is the randomized, equipment-aware generator. The fixed
//! programs ([`fbi_pft`], [`army_acft`], [`marathon`], [`fbi_program`]) are
//! pure functions of week, day, and profile with no randomness, so their
//! output is stable across regenerations.
//!
//! Fixed programs share a three-phase periodization model: the first third
//! of the plan builds a foundation, the middle third develops event-specific
//! capacity, and the final third peaks with simulations and time trials.

pub mod algorithmic;
pub mod army_acft;
pub mod exercises;
pub mod fbi_pft;
pub mod fbi_program;
pub mod marathon;

/// Periodization phase of a fixed program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPhase {
    /// First third: aerobic base and movement quality
    Foundation,
    /// Middle third: event-specific volume and intensity
    Development,
    /// Final third: simulations and time trials
    Peak,
}

impl TrainingPhase {
    /// Phase for a 1-based week within a plan of `total_weeks`
    #[must_use]
    pub fn for_week(week: u32, total_weeks: u32) -> Self {
        let progress = f64::from(week) / f64::from(total_weeks.max(1));
        if progress <= 0.33 {
            Self::Foundation
        } else if progress <= 0.66 {
            Self::Development
        } else {
            Self::Peak
        }
    }
}

/// Coarse equipment access bucket used by the fixed programs.
///
/// Each program defines its own bucketing over the profile's equipment set
/// because the equipment that matters differs by test: the FBI PFT needs a
/// pull-up bar, the ACFT rewards barbell and machine access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentLevel {
    /// Full equipment for the program's lifts
    FullGym,
    /// Some useful equipment
    Limited,
    /// Bodyweight only
    Minimal,
}
