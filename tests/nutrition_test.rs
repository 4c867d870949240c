// ABOUTME: Integration tests for the nutrition pipeline from profile to macro summary
// ABOUTME: Pins kcal goldens and checks goal, plan type, and diet interactions end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{reference_profile, with_diet, with_goal, with_plan};
use fitforge::config::NutritionConfig;
use fitforge::models::{Difficulty, DietType, Goal, MealType, PlanType};
use fitforge::nutrition::{macro_summary, macro_targets};

#[test]
fn maintenance_targets_match_tdee() {
    let config = NutritionConfig::default();
    let targets = macro_targets(&config, &reference_profile());

    assert_eq!(targets.bmr, 1780);
    assert_eq!(targets.tdee, 2759);
    assert_eq!(targets.daily_calories, 2759);
}

#[test]
fn high_activity_plans_raise_tdee() {
    let config = NutritionConfig::default();
    let moderate = macro_targets(&config, &reference_profile());

    for plan_type in [PlanType::FbiPft, PlanType::ArmyPft] {
        let targets = macro_targets(&config, &with_plan(plan_type, Difficulty::Beginner));
        // 1780 * 1.725 = 3070.5, rounds up
        assert_eq!(targets.tdee, 3071);
        assert!(targets.tdee > moderate.tdee);
    }

    let marathon = macro_targets(&config, &with_plan(PlanType::Marathon, Difficulty::Advanced));
    assert_eq!(marathon.tdee, moderate.tdee, "marathon uses the moderate factor");
}

#[test]
fn goal_adjustments_shift_calories() {
    let config = NutritionConfig::default();
    let loss = macro_targets(&config, &with_goal(Goal::WeightLoss));
    let gain = macro_targets(&config, &with_goal(Goal::MuscleGain));

    assert_eq!(loss.daily_calories, 2259);
    assert_eq!(gain.daily_calories, 3159);
}

#[test]
fn meal_allocation_follows_the_daily_split() {
    let config = NutritionConfig::default();
    let targets = macro_targets(&config, &reference_profile());

    let breakfast = targets.meal_macros.for_slot(MealType::Breakfast);
    let lunch = targets.meal_macros.for_slot(MealType::Lunch);
    let dinner = targets.meal_macros.for_slot(MealType::Dinner);
    let snack = targets.meal_macros.for_slot(MealType::Snack);

    assert_eq!(breakfast.calories, (2759.0_f64 * 0.30).round() as i32);
    assert_eq!(lunch.calories, (2759.0_f64 * 0.35).round() as i32);
    assert_eq!(dinner.calories, (2759.0_f64 * 0.30).round() as i32);
    assert_eq!(snack.calories, (2759.0_f64 * 0.05).round() as i32);

    // Slots round independently, so the recombined total may drift by a
    // few kcal from the daily figure but never by more than half a kcal
    // per slot.
    let recombined = breakfast.calories + lunch.calories + dinner.calories + snack.calories;
    assert!((recombined - targets.daily_calories).abs() <= 2);
}

#[test]
fn keto_ratios_ignore_goal_nudges() {
    let config = NutritionConfig::default();
    let maintenance = macro_targets(&config, &with_diet(Goal::Maintenance, DietType::Keto));
    let gain = macro_targets(&config, &with_diet(Goal::MuscleGain, DietType::Keto));

    // Same calories would differ by the surplus, but the 25/5/70 ratio
    // itself is fixed for ketogenic diets.
    let ratio = |t: fitforge::models::MacroTargets| {
        f64::from(t.daily_fat * 9) / f64::from(t.daily_calories)
    };
    assert!((ratio(maintenance) - 0.70).abs() < 0.01);
    assert!((ratio(gain) - 0.70).abs() < 0.01);
}

#[test]
fn summary_carries_descriptions_and_split() {
    let config = NutritionConfig::default();
    let summary = macro_summary(&config, &with_diet(Goal::WeightLoss, DietType::Mediterranean));

    assert_eq!(
        summary.goal_description,
        "Weight Loss - 500 cal deficit for ~1 lb/week loss"
    );
    assert_eq!(
        summary.plan_description,
        "Algorithmic Training (Moderately Active)"
    );
    assert_eq!(
        summary.diet_description,
        "Fish, olive oil, whole grains, vegetables"
    );

    let split = summary.macro_split;
    assert!((90..=110).contains(&(split.protein + split.carbs + split.fat)));
}

#[test]
fn summary_serializes_with_flattened_targets() {
    let config = NutritionConfig::default();
    let summary = macro_summary(&config, &reference_profile());
    let value = serde_json::to_value(&summary).unwrap();

    assert_eq!(value["bmr"], 1780);
    assert_eq!(value["tdee"], 2759);
    assert!(value["meal_macros"]["breakfast"]["calories"].is_number());
    assert!(value["macro_split"]["protein"].is_number());
}
