// ABOUTME: Nutrition configuration: BMR coefficients, activity factors, goal adjustments
// ABOUTME: Defaults encode the published Mifflin-St Jeor equation and standard coaching heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Nutrition Configuration
//!
//! Tunable constants for the nutrition pipeline. Defaults are the published
//! Mifflin-St Jeor coefficients and widely used activity multipliers; they
//! exist as configuration so deployments can recalibrate without code
//! changes, not because the defaults are expected to vary.

use serde::{Deserialize, Serialize};

/// Mifflin-St Jeor BMR equation coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight term (kcal per kg)
    pub weight_coefficient: f64,
    /// Height term (kcal per cm)
    pub height_coefficient: f64,
    /// Age term (kcal per year, subtracted)
    pub age_coefficient: f64,
    /// Additive constant for males
    pub male_constant: f64,
    /// Additive constant for females
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coefficient: 10.0,
            height_coefficient: 6.25,
            age_coefficient: 5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// TDEE activity multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Training 3-5 days/week
    pub moderately_active: f64,
    /// Training 6-7 days/week or structured test prep
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            moderately_active: 1.55,
            very_active: 1.725,
        }
    }
}

/// Goal-based daily calorie adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCalorieConfig {
    /// Daily deficit for weight loss (kcal), roughly 1 lb/week
    pub weight_loss_deficit: i32,
    /// Daily surplus for muscle gain (kcal), lean-gain territory
    pub muscle_gain_surplus: i32,
}

impl Default for GoalCalorieConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit: 500,
            muscle_gain_surplus: 400,
        }
    }
}

/// How daily macros are divided across the four meal slots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share of daily targets
    pub breakfast: f64,
    /// Lunch share of daily targets
    pub lunch: f64,
    /// Dinner share of daily targets
    pub dinner: f64,
    /// Snack share of daily targets
    pub snack: f64,
}

impl MealSplitConfig {
    /// Sum of the four shares; must be 1.0 for a valid config
    #[must_use]
    pub fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.30,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.05,
        }
    }
}

/// Aggregate nutrition configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionConfig {
    /// BMR equation coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Goal calorie adjustments
    pub goal_calories: GoalCalorieConfig,
    /// Per-meal macro split
    pub meal_split: MealSplitConfig,
}

impl NutritionConfig {
    /// Validates internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if (self.meal_split.total() - 1.0).abs() > 1e-9 {
            return Err(format!(
                "meal split shares must sum to 1.0, got {}",
                self.meal_split.total()
            ));
        }
        if self.activity_factors.moderately_active <= 1.0
            || self.activity_factors.very_active <= self.activity_factors.moderately_active
        {
            return Err("activity factors must be > 1.0 and strictly increasing".to_owned());
        }
        if self.goal_calories.weight_loss_deficit <= 0
            || self.goal_calories.muscle_gain_surplus <= 0
        {
            return Err("goal calorie adjustments must be positive".to_owned());
        }
        Ok(())
    }
}
