// ABOUTME: Training configuration: progressive overload curve and exercise selection counts
// ABOUTME: Defaults implement a 5% weekly ramp capped at 150% of the baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Training Configuration
//!
//! Constants governing the algorithmic workout generator. The intensity
//! model is a simple linear progressive-overload ramp: each week adds a
//! fixed fraction of the difficulty baseline until a hard cap, after which
//! intensity plateaus for the remainder of the plan.

use serde::{Deserialize, Serialize};

use crate::models::Difficulty;

/// Progressive-overload intensity parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Baseline multiplier for beginners
    pub beginner_base: f64,
    /// Baseline multiplier for intermediates
    pub intermediate_base: f64,
    /// Baseline multiplier for advanced trainees
    pub advanced_base: f64,
    /// Per-week additive ramp, as a fraction of the baseline
    pub weekly_ramp: f64,
    /// Plateau cap, as a multiple of the baseline
    pub cap_multiplier: f64,
}

impl IntensityConfig {
    /// Difficulty baseline multiplier
    #[must_use]
    pub const fn base_for(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Beginner => self.beginner_base,
            Difficulty::Intermediate => self.intermediate_base,
            Difficulty::Advanced => self.advanced_base,
        }
    }

    /// Intensity multiplier for a 1-based week, ramped and capped.
    ///
    /// With the default 5% ramp and 1.5x cap the plateau is reached at
    /// week 11 regardless of difficulty.
    #[must_use]
    pub fn intensity_for_week(&self, difficulty: Difficulty, week: u32) -> f64 {
        let base = self.base_for(difficulty);
        let ramped = base * self.weekly_ramp.mul_add(f64::from(week.saturating_sub(1)), 1.0);
        ramped.min(base * self.cap_multiplier)
    }
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            beginner_base: 0.7,
            intermediate_base: 1.0,
            advanced_base: 1.3,
            weekly_ramp: 0.05,
            cap_multiplier: 1.5,
        }
    }
}

/// How many strength exercises the algorithmic generator selects per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSelectionConfig {
    /// Exercises per session for beginners
    pub beginner_count: usize,
    /// Exercises per session for intermediates
    pub intermediate_count: usize,
    /// Exercises per session for advanced trainees
    pub advanced_count: usize,
}

impl ExerciseSelectionConfig {
    /// Session exercise count for a difficulty
    #[must_use]
    pub const fn count_for(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Beginner => self.beginner_count,
            Difficulty::Intermediate => self.intermediate_count,
            Difficulty::Advanced => self.advanced_count,
        }
    }
}

impl Default for ExerciseSelectionConfig {
    fn default() -> Self {
        Self {
            beginner_count: 5,
            intermediate_count: 6,
            advanced_count: 7,
        }
    }
}

/// Aggregate training configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TrainingConfig {
    /// Progressive-overload parameters
    pub intensity: IntensityConfig,
    /// Per-session exercise counts
    pub exercise_selection: ExerciseSelectionConfig,
}

impl TrainingConfig {
    /// Validates internal consistency
    pub fn validate(&self) -> Result<(), String> {
        let i = &self.intensity;
        if i.beginner_base <= 0.0 || i.intermediate_base <= i.beginner_base
            || i.advanced_base <= i.intermediate_base
        {
            return Err("intensity baselines must be positive and strictly increasing".to_owned());
        }
        if i.weekly_ramp <= 0.0 || i.cap_multiplier <= 1.0 {
            return Err("intensity ramp must be positive and cap above 1.0".to_owned());
        }
        let s = &self.exercise_selection;
        if s.beginner_count == 0 || s.intermediate_count < s.beginner_count
            || s.advanced_count < s.intermediate_count
        {
            return Err("exercise counts must be positive and non-decreasing".to_owned());
        }
        Ok(())
    }
}
