// ABOUTME: End-to-end tests for plan generation from profile to full schedule
// ABOUTME: Covers rest-day placement, normalization, meal fitting, and seeded reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{reference_profile, rest_days};
use fitforge::config::PlannerConfig;
use fitforge::models::{
    Difficulty, DietType, FoodSensitivity, Goal, MealType, PlanType, Profile,
};
use fitforge::nutrition::macro_targets;
use fitforge::{PlanError, PlanGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded(seed: u64) -> PlanGenerator<ChaCha8Rng> {
    PlanGenerator::with_rng(PlannerConfig::default(), ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn plan_has_requested_weeks_of_seven_days() {
    let profile = Profile {
        weeks: 8,
        ..reference_profile()
    };
    let plan = seeded(1).generate(&profile).unwrap();

    assert_eq!(plan.weeks.len(), 8);
    for (i, week) in plan.weeks.iter().enumerate() {
        assert_eq!(week.week_number, u32::try_from(i).unwrap() + 1);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].day_name, "Sunday");
        assert_eq!(week.days[6].day_name, "Saturday");
    }
}

#[test]
fn out_of_range_weeks_are_clamped() {
    let short = Profile {
        weeks: 1,
        ..reference_profile()
    };
    assert_eq!(seeded(1).generate(&short).unwrap().weeks.len(), 4);

    let long = Profile {
        weeks: 99,
        ..reference_profile()
    };
    assert_eq!(seeded(1).generate(&long).unwrap().weeks.len(), 52);
}

#[test]
fn clamped_plans_periodize_over_their_actual_length() {
    // Periodization follows the 52 generated weeks, not the raw request.
    let profile = Profile {
        plan_type: PlanType::FbiPft,
        weeks: 99,
        ..reference_profile()
    };
    let plan = seeded(14).generate(&profile).unwrap();
    assert_eq!(plan.weeks.len(), 52);

    // Sunday is the default rest day, so Tuesday is training day 2, the
    // sprint slot. Week 52 of 52 runs peak-phase 200m intervals.
    let sprint = plan.weeks[51].days[2].workout.as_ref().unwrap();
    assert!(sprint.name.starts_with("300m Sprint Training"));
    assert!(
        sprint.cardio.iter().any(|l| l.contains("x 200m")),
        "{:?}",
        sprint.cardio
    );
}

#[test]
fn rest_days_have_no_workout_or_meals() {
    let profile = Profile {
        rest_days: rest_days(&[3, 6]),
        ..reference_profile()
    };
    let plan = seeded(2).generate(&profile).unwrap();

    for week in &plan.weeks {
        for (index, day) in week.days.iter().enumerate() {
            let expect_rest = index == 3 || index == 6;
            assert_eq!(day.is_rest_day, expect_rest, "day {index}");
            assert_eq!(day.workout.is_none(), expect_rest);
            assert_eq!(day.meals.is_none(), expect_rest);
            if expect_rest {
                assert!(day.completed_exercises.cardio.is_empty());
                assert!(day.completed_exercises.strength.is_empty());
            }
        }
    }
}

#[test]
fn training_day_count_is_constant_across_weeks() {
    let profile = Profile {
        rest_days: rest_days(&[0, 2, 4]),
        ..reference_profile()
    };
    let plan = seeded(3).generate(&profile).unwrap();

    for week in &plan.weeks {
        let training = week.days.iter().filter(|d| !d.is_rest_day).count();
        assert_eq!(training, 4);
    }
}

#[test]
fn completion_flags_match_workout_shape() {
    let plan = seeded(4).generate(&reference_profile()).unwrap();

    for week in &plan.weeks {
        for day in week.days.iter().filter(|d| !d.is_rest_day) {
            let workout = day.workout.as_ref().unwrap();
            assert_eq!(day.completed_exercises.cardio.len(), workout.cardio.len());
            assert_eq!(
                day.completed_exercises.strength.len(),
                workout.strength.len()
            );
            assert!(!day.completed_exercises.cardio.iter().any(|c| *c));
        }
    }
}

#[test]
fn meals_are_fitted_to_slot_targets() {
    let profile = reference_profile();
    let targets = macro_targets(&PlannerConfig::default().nutrition, &profile);
    let plan = seeded(5).generate(&profile).unwrap();

    for week in &plan.weeks {
        for day in week.days.iter().filter(|d| !d.is_rest_day) {
            let meals = day.meals.as_ref().unwrap();
            let breakfast_target = targets.meal_macros.for_slot(MealType::Breakfast);
            assert_eq!(meals.breakfast.calories, breakfast_target.calories);
            assert_eq!(meals.breakfast.protein, breakfast_target.protein);

            let snack_target = targets.meal_macros.for_slot(MealType::Snack);
            assert_eq!(meals.snack.calories, snack_target.calories);
        }
    }
}

#[test]
fn meal_names_cycle_within_a_week() {
    // Every pool has at least two entries for the default profile, so two
    // consecutive training days never repeat a breakfast.
    let plan = seeded(6).generate(&reference_profile()).unwrap();
    let week = &plan.weeks[0];
    let training: Vec<_> = week.days.iter().filter(|d| !d.is_rest_day).collect();
    let first = &training[0].meals.as_ref().unwrap().breakfast.name;
    let second = &training[1].meals.as_ref().unwrap().breakfast.name;
    assert_ne!(first, second);
}

#[test]
fn vegan_plan_generates_end_to_end() {
    let profile = Profile {
        goal: Goal::MuscleGain,
        diet_type: DietType::Vegan,
        ..reference_profile()
    };
    let plan = seeded(7).generate(&profile).unwrap();

    for day in plan.weeks[0].days.iter().filter(|d| !d.is_rest_day) {
        let meals = day.meals.as_ref().unwrap();
        for meal in [&meals.breakfast, &meals.lunch, &meals.dinner, &meals.snack] {
            let joined = meal.ingredients.join(" ").to_lowercase();
            for animal in ["chicken", "beef", "salmon", "egg"] {
                assert!(!joined.contains(animal), "{:?} contains {animal}", meal.name);
            }
        }
    }
}

#[test]
fn impossible_meal_filters_surface_as_errors() {
    let profile = Profile {
        goal: Goal::MuscleGain,
        diet_type: DietType::Vegan,
        food_sensitivities: [FoodSensitivity::Nuts].into(),
        ..reference_profile()
    };
    let err = seeded(8).generate(&profile).unwrap_err();
    assert!(matches!(
        err,
        PlanError::InsufficientMealOptions {
            goal: Goal::MuscleGain,
            meal_type: MealType::Snack,
        }
    ));
}

#[test]
fn same_seed_reproduces_the_schedule() {
    let profile = Profile {
        plan_type: PlanType::Algorithmic,
        difficulty: Difficulty::Intermediate,
        ..reference_profile()
    };

    let a = seeded(9).generate(&profile).unwrap();
    let b = seeded(9).generate(&profile).unwrap();
    // Timestamps differ; the schedule itself must not.
    assert_eq!(a.weeks, b.weeks);

    let c = seeded(10).generate(&profile).unwrap();
    assert_ne!(a.weeks, c.weeks, "a different seed reshuffles the plan");
}

#[test]
fn fixed_programs_are_stable_across_regeneration() {
    let profile = Profile {
        plan_type: PlanType::Marathon,
        difficulty: Difficulty::Intermediate,
        ..reference_profile()
    };

    // Different seeds still produce identical workouts for a fixed
    // program; only the meal ordering varies.
    let a = seeded(11).generate(&profile).unwrap();
    let b = seeded(12).generate(&profile).unwrap();
    for (wa, wb) in a.weeks.iter().zip(&b.weeks) {
        for (da, db) in wa.days.iter().zip(&wb.days) {
            assert_eq!(da.workout, db.workout);
        }
    }
}

#[test]
fn default_generator_produces_a_plan() {
    let plan = PlanGenerator::new().generate(&Profile::default()).unwrap();
    assert_eq!(plan.weeks.len(), 12);
}

#[test]
fn plan_round_trips_through_json() {
    let plan = seeded(13).generate(&reference_profile()).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    let back: fitforge::Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(back.weeks, plan.weeks);
}
