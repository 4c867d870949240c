// ABOUTME: Meal catalog access and pool construction for plan generation
// ABOUTME: Pools are filtered by slot, sensitivities, and diet; empty pools are an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Meals
//!
//! The planner draws meals from per-slot pools built once per plan:
//! catalog meals for the goal, narrowed to a slot, with the user's food
//! sensitivities and diet exclusions applied. An empty pool is reported as
//! [`PlanError::InsufficientMealOptions`] naming the slot, rather than a
//! silently meal-less plan.

pub mod catalog;

use std::collections::BTreeSet;

use crate::errors::{PlanError, PlanResult};
use crate::models::{DietType, FoodSensitivity, Goal, Meal, MealType};
use crate::nutrition::diet_rules;

/// One selectable pool of catalog meals for each slot
#[derive(Debug, Clone)]
pub struct MealPools {
    /// Breakfast candidates
    pub breakfast: Vec<&'static Meal>,
    /// Lunch candidates
    pub lunch: Vec<&'static Meal>,
    /// Dinner candidates
    pub dinner: Vec<&'static Meal>,
    /// Snack candidates
    pub snack: Vec<&'static Meal>,
}

impl MealPools {
    /// Builds all four pools for a goal, diet, and sensitivity set.
    ///
    /// The catalog guarantees diet coverage on its own, so an empty pool
    /// here means the user's sensitivities eliminated every remaining
    /// option for that slot.
    pub fn build(
        goal: Goal,
        diet: DietType,
        sensitivities: &BTreeSet<FoodSensitivity>,
    ) -> PlanResult<Self> {
        Ok(Self {
            breakfast: build_pool(goal, MealType::Breakfast, diet, sensitivities)?,
            lunch: build_pool(goal, MealType::Lunch, diet, sensitivities)?,
            dinner: build_pool(goal, MealType::Dinner, diet, sensitivities)?,
            snack: build_pool(goal, MealType::Snack, diet, sensitivities)?,
        })
    }

    /// Mutable access to a slot's pool
    pub fn slot_mut(&mut self, slot: MealType) -> &mut Vec<&'static Meal> {
        match slot {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }

    /// Shared access to a slot's pool
    #[must_use]
    pub fn slot(&self, slot: MealType) -> &[&'static Meal] {
        match slot {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }
}

fn build_pool(
    goal: Goal,
    slot: MealType,
    diet: DietType,
    sensitivities: &BTreeSet<FoodSensitivity>,
) -> PlanResult<Vec<&'static Meal>> {
    let pool: Vec<&'static Meal> = catalog::meals_for_slot(goal, slot, sensitivities)
        .into_iter()
        .filter(|m| diet_rules::is_compliant(m, diet))
        .collect();
    if pool.is_empty() {
        tracing::warn!(%goal, %slot, ?diet, "meal pool empty after filters");
        return Err(PlanError::InsufficientMealOptions {
            goal,
            meal_type: slot,
        });
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_build_for_every_diet_without_sensitivities() {
        let none = BTreeSet::new();
        for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance] {
            for diet in [
                DietType::Standard,
                DietType::Keto,
                DietType::Paleo,
                DietType::Atkins,
                DietType::Carnivore,
                DietType::Vegetarian,
                DietType::Vegan,
                DietType::Mediterranean,
            ] {
                assert!(
                    MealPools::build(goal, diet, &none).is_ok(),
                    "pool build failed for {goal} / {diet:?}"
                );
            }
        }
    }

    #[test]
    fn restrictive_sensitivities_surface_the_slot() {
        // Vegan muscle-gain snacks are all nut-based, so a nut sensitivity
        // empties the pool.
        let nuts = BTreeSet::from([FoodSensitivity::Nuts]);
        let err = MealPools::build(Goal::MuscleGain, DietType::Vegan, &nuts).unwrap_err();
        assert_eq!(
            err,
            PlanError::InsufficientMealOptions {
                goal: Goal::MuscleGain,
                meal_type: MealType::Snack,
            }
        );
    }

    #[test]
    fn diet_filter_applies_on_top_of_sensitivities() {
        let none = BTreeSet::new();
        let pools = MealPools::build(Goal::WeightLoss, DietType::Vegan, &none).unwrap();
        for slot in MealType::ALL {
            for m in pools.slot(slot) {
                assert!(diet_rules::is_compliant(m, DietType::Vegan), "{}", m.name);
            }
        }
    }
}
