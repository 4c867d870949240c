// ABOUTME: Shared profile builders for the integration test suites
// ABOUTME: Keeps the reference biometrics in one place so goldens agree across files
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use std::collections::BTreeSet;

use fitforge::models::{Difficulty, DietType, Gender, Goal, PlanType, Profile};

/// Reference profile used by the macro goldens: 30-year-old male,
/// 180 cm, 80 kg, so BMR works out to an even 1780 kcal.
pub fn reference_profile() -> Profile {
    Profile {
        gender: Gender::Male,
        age: 30,
        height_cm: 180.0,
        weight_kg: 80.0,
        ..Profile::default()
    }
}

pub fn with_goal(goal: Goal) -> Profile {
    Profile {
        goal,
        ..reference_profile()
    }
}

pub fn with_plan(plan_type: PlanType, difficulty: Difficulty) -> Profile {
    Profile {
        plan_type,
        difficulty,
        ..reference_profile()
    }
}

pub fn with_diet(goal: Goal, diet_type: DietType) -> Profile {
    Profile {
        goal,
        diet_type,
        ..reference_profile()
    }
}

pub fn rest_days(days: &[u8]) -> BTreeSet<u8> {
    days.iter().copied().collect()
}
