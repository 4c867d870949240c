// ABOUTME: Top-level plan generator assembling weekly workout and meal schedules
// ABOUTME: Normalizes profiles, derives macro targets once, and fills each week day by day
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Plan Generator
//!
//! Orchestrates the full pipeline: profile normalization, macro target
//! derivation, meal pool construction, and week-by-week assembly. Workout
//! dispatch depends on the profile's plan type; the fixed programs are
//! pure functions of the profile and calendar position while the
//! algorithmic generator draws exercise selection from the generator's RNG.
//!
//! Meal variety comes from reshuffling each slot pool once per week and
//! walking it round-robin across training days, so a pool of four dinners
//! repeats every four training days in a week-stable order.

use std::collections::BTreeSet;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::errors::PlanResult;
use crate::meals::MealPools;
use crate::models::{
    CompletedExercises, DayPlan, MealSlots, MealType, Plan, PlanType, Profile,
    WeekPlan, DAY_NAMES,
};
use crate::nutrition::{fit_meal_to_targets, macro_targets};
use crate::workouts::{algorithmic, army_acft, fbi_pft, marathon};

/// Minimum plan length in weeks
pub const MIN_WEEKS: u32 = 4;
/// Maximum plan length in weeks
pub const MAX_WEEKS: u32 = 52;
/// Maximum rest days per week
pub const MAX_REST_DAYS: usize = 3;

/// Generates complete plans from user profiles.
///
/// Holds the configuration and the RNG driving exercise and meal
/// shuffling. The default constructor seeds from OS entropy; tests use
/// [`PlanGenerator::with_rng`] with a seeded RNG for reproducible output.
pub struct PlanGenerator<R: Rng = StdRng> {
    config: PlannerConfig,
    rng: R,
}

impl PlanGenerator<StdRng> {
    /// Generator with default configuration and an entropy-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Generator with a custom configuration and an entropy-seeded RNG
    #[must_use]
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for PlanGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PlanGenerator<R> {
    /// Generator with a caller-supplied RNG, for deterministic output
    pub fn with_rng(config: PlannerConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generates a full plan for the profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlanError::InvalidConfig`] when the configuration
    /// fails validation, and [`crate::PlanError::InsufficientMealOptions`]
    /// when the diet and sensitivity filters leave a meal slot with no
    /// compliant options.
    pub fn generate(&mut self, profile: &Profile) -> PlanResult<Plan> {
        self.config.validate()?;

        let weeks = normalize_weeks(profile.weeks);
        let rest_days = normalize_rest_days(&profile.rest_days);

        let targets = macro_targets(&self.config.nutrition, profile);
        let mut pools = MealPools::build(
            profile.goal,
            profile.diet_type,
            &profile.food_sensitivities,
        )?;

        debug!(
            weeks,
            rest_days = rest_days.len(),
            plan_type = ?profile.plan_type,
            "generating plan"
        );

        let mut week_plans = Vec::with_capacity(weeks as usize);
        for week in 1..=weeks {
            for slot in MealType::ALL {
                pools.slot_mut(slot).shuffle(&mut self.rng);
            }

            let mut days = Vec::with_capacity(DAY_NAMES.len());
            let mut training_day = 0u32;
            for (day_index, day_name) in DAY_NAMES.iter().enumerate() {
                let is_rest = rest_days.contains(&(day_index as u8));
                if is_rest {
                    days.push(DayPlan {
                        day_name: (*day_name).to_owned(),
                        is_rest_day: true,
                        workout: None,
                        meals: None,
                        completed_exercises: CompletedExercises::default(),
                    });
                    continue;
                }

                training_day += 1;
                let workout = self.workout_for(profile, week, weeks, training_day);
                let meals = meal_slots(&pools, &targets, training_day);
                let completed_exercises = CompletedExercises::for_workout(&workout);
                days.push(DayPlan {
                    day_name: (*day_name).to_owned(),
                    is_rest_day: false,
                    workout: Some(workout),
                    meals: Some(meals),
                    completed_exercises,
                });
            }

            week_plans.push(WeekPlan {
                week_number: week,
                days,
            });
        }

        Ok(Plan {
            generated_at: Utc::now(),
            weeks: week_plans,
        })
    }

    // Phase-based programs periodize over the normalized plan length,
    // never the raw profile value.
    fn workout_for(
        &mut self,
        profile: &Profile,
        week: u32,
        total_weeks: u32,
        training_day: u32,
    ) -> crate::models::Workout {
        match profile.plan_type {
            PlanType::Algorithmic => algorithmic::generate(
                &self.config.training,
                profile,
                week,
                training_day,
                &mut self.rng,
            ),
            PlanType::FbiPft => fbi_pft::generate(profile, week, total_weeks, training_day),
            PlanType::ArmyPft => army_acft::generate(profile, week, total_weeks, training_day),
            PlanType::Marathon => marathon::generate(profile, week, training_day),
        }
    }
}

/// Clamps the requested plan length to [`MIN_WEEKS`]..=[`MAX_WEEKS`]
fn normalize_weeks(requested: u32) -> u32 {
    let clamped = requested.clamp(MIN_WEEKS, MAX_WEEKS);
    if clamped != requested {
        warn!(requested, clamped, "plan length out of range, clamping");
    }
    clamped
}

/// Drops out-of-range day numbers, caps at [`MAX_REST_DAYS`] keeping the
/// earliest days, and defaults to Sunday when nothing valid remains
fn normalize_rest_days(requested: &BTreeSet<u8>) -> BTreeSet<u8> {
    let mut valid: BTreeSet<u8> = requested.iter().copied().filter(|d| *d < 7).collect();
    if valid.len() != requested.len() {
        warn!("ignoring rest days outside Sunday..Saturday");
    }
    if valid.len() > MAX_REST_DAYS {
        warn!(
            requested = valid.len(),
            kept = MAX_REST_DAYS,
            "too many rest days, keeping the earliest"
        );
        valid = valid.into_iter().take(MAX_REST_DAYS).collect();
    }
    if valid.is_empty() {
        valid.insert(0);
    }
    valid
}

/// Round-robin meal selection for a 1-based training-day counter.
///
/// Each slot pool cycles independently, so pools of different sizes drift
/// against each other instead of repeating in lockstep.
fn meal_slots(
    pools: &MealPools,
    targets: &crate::models::MacroTargets,
    training_day: u32,
) -> MealSlots {
    let pick = |slot: MealType| {
        let pool = pools.slot(slot);
        let index = (training_day as usize - 1) % pool.len();
        fit_meal_to_targets(pool[index], targets.meal_macros.for_slot(slot))
    };
    MealSlots {
        breakfast: pick(MealType::Breakfast),
        lunch: pick(MealType::Lunch),
        dinner: pick(MealType::Dinner),
        snack: pick(MealType::Snack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_clamped_to_range() {
        assert_eq!(normalize_weeks(0), MIN_WEEKS);
        assert_eq!(normalize_weeks(3), MIN_WEEKS);
        assert_eq!(normalize_weeks(12), 12);
        assert_eq!(normalize_weeks(53), MAX_WEEKS);
    }

    #[test]
    fn rest_days_defaulted_and_capped() {
        assert_eq!(
            normalize_rest_days(&BTreeSet::new()),
            BTreeSet::from([0])
        );
        assert_eq!(
            normalize_rest_days(&BTreeSet::from([9, 12])),
            BTreeSet::from([0])
        );
        assert_eq!(
            normalize_rest_days(&BTreeSet::from([1, 3, 5, 6])),
            BTreeSet::from([1, 3, 5])
        );
        assert_eq!(
            normalize_rest_days(&BTreeSet::from([2, 6])),
            BTreeSet::from([2, 6])
        );
    }
}
