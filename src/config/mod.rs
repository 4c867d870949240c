// ABOUTME: Planner configuration aggregate with validation
// ABOUTME: Bundles nutrition and training tunables into a single injectable struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Configuration
//!
//! The planner takes a single [`PlannerConfig`] covering every tunable
//! constant in the pipeline. `Default` produces the calibrated production
//! values; `validate` rejects configurations that would make the math
//! degenerate (meal splits not summing to 1.0, non-monotonic intensity
//! baselines, and so on).

pub mod nutrition;
pub mod training;

use serde::{Deserialize, Serialize};

use crate::errors::{PlanError, PlanResult};
pub use nutrition::NutritionConfig;
pub use training::TrainingConfig;

/// All tunable constants for plan generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlannerConfig {
    /// Nutrition pipeline constants
    pub nutrition: NutritionConfig,
    /// Training pipeline constants
    pub training: TrainingConfig,
}

impl PlannerConfig {
    /// Validates every section, returning the first problem found
    pub fn validate(&self) -> PlanResult<()> {
        self.nutrition
            .validate()
            .map_err(PlanError::InvalidConfig)?;
        self.training.validate().map_err(PlanError::InvalidConfig)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_section_surfaces_as_config_error() {
        let mut config = PlannerConfig::default();
        config.nutrition.meal_split.breakfast = 0.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfig(_)));
    }
}
