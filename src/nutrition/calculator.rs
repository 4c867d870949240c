// ABOUTME: Daily macro target calculation: BMR, TDEE, goal calories, gram splits, meal allocation
// ABOUTME: Each output field is rounded independently; small drift between fields is accepted
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Macro Calculator
//!
//! The pipeline is BMR -> TDEE -> goal-adjusted calories -> diet ratios ->
//! gram targets -> per-meal allocation. Grams use the 4/4/9 kcal-per-gram
//! constants (protein/carbs/fat).
//!
//! Rounding policy: every published number is rounded at the point it is
//! produced, not carried at full precision and rounded once. Per-meal
//! values therefore may not sum exactly to the daily values, and the summary
//! percentages recomputed from grams may not sum to 100. This matches what
//! users can verify with a calculator against their own plan.

use crate::config::NutritionConfig;
use crate::models::{
    Goal, MacroSplit, MacroSummary, MacroTargets, Meal, MealMacroTargets, MealMacros, PlanType,
    Profile,
};
use crate::nutrition::diet_rules;
use crate::physiology;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily macro targets for a profile
#[must_use]
pub fn macro_targets(config: &NutritionConfig, profile: &Profile) -> MacroTargets {
    let bmr = physiology::bmr(&config.bmr, profile);
    let factor = physiology::activity_factor(&config.activity_factors, profile.plan_type);
    let tdee = physiology::tdee(bmr, factor);

    let daily_calories = match profile.goal {
        Goal::WeightLoss => tdee - config.goal_calories.weight_loss_deficit,
        Goal::MuscleGain => tdee + config.goal_calories.muscle_gain_surplus,
        Goal::Maintenance => tdee,
    };

    let ratios = diet_rules::goal_adjusted_ratios(profile.diet_type, profile.goal);
    let calories = f64::from(daily_calories);
    let daily_protein = (calories * ratios.protein / KCAL_PER_GRAM_PROTEIN).round() as i32;
    let daily_carbs = (calories * ratios.carbs / KCAL_PER_GRAM_CARBS).round() as i32;
    let daily_fat = (calories * ratios.fat / KCAL_PER_GRAM_FAT).round() as i32;

    let targets = MacroTargets {
        bmr: bmr.round() as i32,
        tdee,
        daily_calories,
        daily_protein,
        daily_carbs,
        daily_fat,
        meal_macros: MealMacroTargets {
            breakfast: slot_macros(daily_calories, daily_protein, daily_carbs, daily_fat, config.meal_split.breakfast),
            lunch: slot_macros(daily_calories, daily_protein, daily_carbs, daily_fat, config.meal_split.lunch),
            dinner: slot_macros(daily_calories, daily_protein, daily_carbs, daily_fat, config.meal_split.dinner),
            snack: slot_macros(daily_calories, daily_protein, daily_carbs, daily_fat, config.meal_split.snack),
        },
    };
    tracing::debug!(
        bmr = targets.bmr,
        tdee = targets.tdee,
        calories = targets.daily_calories,
        "computed daily macro targets"
    );
    targets
}

fn slot_macros(calories: i32, protein: i32, carbs: i32, fat: i32, share: f64) -> MealMacros {
    MealMacros {
        calories: (f64::from(calories) * share).round() as i32,
        protein: (f64::from(protein) * share).round() as i32,
        carbs: (f64::from(carbs) * share).round() as i32,
        fat: (f64::from(fat) * share).round() as i32,
    }
}

/// Clones a catalog meal with its numeric fields replaced by slot targets.
///
/// Name, ingredients, prep time, and instructions are preserved; only the
/// four macro numbers change. The catalog values are serving suggestions,
/// the targets are the plan.
#[must_use]
pub fn fit_meal_to_targets(meal: &Meal, targets: MealMacros) -> Meal {
    let mut fitted = meal.clone();
    fitted.calories = targets.calories;
    fitted.protein = targets.protein;
    fitted.carbs = targets.carbs;
    fitted.fat = targets.fat;
    fitted
}

/// Display summary with human-readable descriptions and a recomputed split
#[must_use]
pub fn macro_summary(config: &NutritionConfig, profile: &Profile) -> MacroSummary {
    let targets = macro_targets(config, profile);
    let calories = f64::from(targets.daily_calories);

    let goal_description = match profile.goal {
        Goal::WeightLoss => "Weight Loss - 500 cal deficit for ~1 lb/week loss",
        Goal::MuscleGain => "Muscle Gain - 400 cal surplus for lean gains",
        Goal::Maintenance => "Maintenance - Sustaining current weight",
    };
    let plan_description = match profile.plan_type {
        PlanType::FbiPft => "FBI PFT Training (Very Active)",
        PlanType::ArmyPft => "Army ACFT Training (Very Active)",
        PlanType::Marathon => "Marathon Training (Moderately Active)",
        PlanType::Algorithmic => "Algorithmic Training (Moderately Active)",
    };

    MacroSummary {
        macro_split: MacroSplit {
            protein: percent_of(f64::from(targets.daily_protein) * KCAL_PER_GRAM_PROTEIN, calories),
            carbs: percent_of(f64::from(targets.daily_carbs) * KCAL_PER_GRAM_CARBS, calories),
            fat: percent_of(f64::from(targets.daily_fat) * KCAL_PER_GRAM_FAT, calories),
        },
        goal_description: goal_description.to_owned(),
        plan_description: plan_description.to_owned(),
        diet_description: diet_rules::description(profile.diet_type).to_owned(),
        targets,
    }
}

fn percent_of(part: f64, whole: f64) -> i32 {
    (part / whole * 100.0).round() as i32
}
