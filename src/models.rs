// ABOUTME: Data models for profiles, plans, workouts, and meals
// ABOUTME: Plain serde-serializable types; the JSON shape is the de facto wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! All types here are plain nested data with no behavior beyond small
//! accessors — suitable for JSON serialization by an external persistence
//! layer. The profile is the sole input to plan generation; the engine never
//! mutates it.
//!
//! Enum fields that external callers may omit carry `#[serde(default)]` and
//! a `Default` impl. This is the engine's deliberate degrade-gracefully
//! policy: an absent or unrecognized selection becomes the designated
//! default (`maintenance`, `standard`, `algorithmic`, `beginner`) instead of
//! an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Biological gender for BMR calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (Mifflin-St Jeor constant +5)
    #[default]
    Male,
    /// Female (Mifflin-St Jeor constant -161)
    Female,
}

/// Training and nutrition goal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit (-500 kcal/day, ~1 lb/week)
    WeightLoss,
    /// Caloric surplus (+400 kcal/day, lean gains)
    MuscleGain,
    /// Caloric balance
    #[default]
    Maintenance,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightLoss => f.write_str("weight loss"),
            Self::MuscleGain => f.write_str("muscle gain"),
            Self::Maintenance => f.write_str("maintenance"),
        }
    }
}

/// Self-reported fitness level; gates exercise selection and scales intensity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// New to structured training
    #[default]
    Beginner,
    /// Consistent training history
    Intermediate,
    /// Multiple years of structured training
    Advanced,
}

impl Difficulty {
    /// Zero-based tier index, ordered beginner < intermediate < advanced
    #[must_use]
    pub const fn tier(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }
}

/// Workout generator selected by the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Equipment-aware randomized generator with progressive overload
    #[default]
    Algorithmic,
    /// FBI Physical Fitness Test preparation (2025 event format)
    FbiPft,
    /// Army Combat Fitness Test preparation
    ArmyPft,
    /// Marathon training with weekly mileage progression
    Marathon,
}

impl PlanType {
    /// Whether this plan type trains at the "very active" TDEE multiplier
    #[must_use]
    pub const fn is_high_activity(self) -> bool {
        matches!(self, Self::FbiPft | Self::ArmyPft)
    }
}

/// Dietary pattern; selects macro ratios and ingredient exclusions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// No restrictions, balanced split
    #[default]
    Standard,
    /// Very low carb, high fat; fixed ratios
    Keto,
    /// Whole foods, no grains, legumes, or dairy
    Paleo,
    /// Very low carb, higher protein; fixed ratios
    Atkins,
    /// Animal products only; fixed ratios
    Carnivore,
    /// No meat, fish, or poultry
    Vegetarian,
    /// No animal products
    Vegan,
    /// Fish, olive oil, whole grains, vegetables
    Mediterranean,
}

/// Food sensitivities used for allergen exclusion
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FoodSensitivity {
    /// Wheat and gluten-containing grains
    Gluten,
    /// Fish and shellfish
    Fish,
    /// Milk and milk products
    Dairy,
    /// Soybeans and soy derivatives
    Soy,
    /// Tree nuts and peanuts
    Nuts,
    /// Eggs
    Eggs,
}

/// Training equipment the user has access to (bodyweight is always available)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Adjustable or fixed dumbbells
    Dumbbells,
    /// Olympic or standard barbell with plates
    Barbell,
    /// Pull-up bar
    PullUpBar,
    /// Resistance bands
    ResistanceBands,
    /// Cable stack
    Cable,
    /// Selectorized or plate-loaded machines
    Machine,
}

/// Meal slot within a day
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// First meal, 30% of daily targets
    Breakfast,
    /// Midday meal, 35% of daily targets
    Lunch,
    /// Evening meal, 30% of daily targets
    Dinner,
    /// Snack, 5% of daily targets
    Snack,
}

impl MealType {
    /// All slots in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => f.write_str("breakfast"),
            Self::Lunch => f.write_str("lunch"),
            Self::Dinner => f.write_str("dinner"),
            Self::Snack => f.write_str("snack"),
        }
    }
}

/// Event emphasis for the Army ACFT program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArmyGoalFocus {
    /// Even coverage of all six ACFT events
    #[default]
    Balanced,
    /// Deadlift, power throw, and carry emphasis
    Strength,
    /// Running and conditioning emphasis
    Endurance,
}

/// User profile — the sole input to plan generation.
///
/// The engine treats the profile as already validated by the caller: numeric
/// fields are trusted to be sane, and degenerate `rest_days`/`weeks` values
/// are normalized (not rejected) before generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Biological gender
    #[serde(default)]
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Training and nutrition goal
    #[serde(default)]
    pub goal: Goal,
    /// Self-reported fitness level
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Workout generator selection
    #[serde(default)]
    pub plan_type: PlanType,
    /// Dietary pattern
    #[serde(default)]
    pub diet_type: DietType,
    /// Allergen exclusions applied to meal selection
    #[serde(default)]
    pub food_sensitivities: BTreeSet<FoodSensitivity>,
    /// Available training equipment (bodyweight implicit)
    #[serde(default)]
    pub equipment: BTreeSet<Equipment>,
    /// Rest days, Sunday=0 through Saturday=6; 1-3 entries expected
    #[serde(default = "default_rest_days")]
    pub rest_days: BTreeSet<u8>,
    /// Plan length in weeks, clamped to [4, 52] at generation time
    #[serde(default = "default_weeks")]
    pub weeks: u32,
    /// ACFT event emphasis (Army plan type only)
    #[serde(default)]
    pub army_focus: ArmyGoalFocus,
}

fn default_rest_days() -> BTreeSet<u8> {
    BTreeSet::from([0])
}

const fn default_weeks() -> u32 {
    12
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 30,
            height_cm: 175.0,
            weight_kg: 75.0,
            goal: Goal::Maintenance,
            difficulty: Difficulty::Beginner,
            plan_type: PlanType::Algorithmic,
            diet_type: DietType::Standard,
            food_sensitivities: BTreeSet::new(),
            equipment: BTreeSet::new(),
            rest_days: default_rest_days(),
            weeks: default_weeks(),
            army_focus: ArmyGoalFocus::Balanced,
        }
    }
}

/// A single day's workout: human-readable cardio and strength instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Session name, e.g. "Upper Body Strength - Week 3"
    pub name: String,
    /// Cardio instructions; may be empty on pure strength days
    pub cardio: Vec<String>,
    /// Strength instructions; may be empty on pure cardio days
    pub strength: Vec<String>,
}

/// A catalog meal, or a plan meal after macro-fitting.
///
/// When a catalog meal is placed into a day plan it is cloned and its four
/// numeric fields are overwritten with the user's per-meal targets; name,
/// ingredients, and instructions are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Display name
    pub name: String,
    /// Slot this meal belongs to
    pub meal_type: MealType,
    /// Calories (kcal)
    pub calories: i32,
    /// Protein (g)
    pub protein: i32,
    /// Carbohydrates (g)
    pub carbs: i32,
    /// Fat (g)
    pub fat: i32,
    /// Preparation time, e.g. "15 min"
    pub prep_time: String,
    /// Ingredient list with quantities
    pub ingredients: Vec<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Declared allergens, matched against food sensitivities
    pub allergens: BTreeSet<FoodSensitivity>,
}

/// The four meals of a training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlots {
    /// Breakfast
    pub breakfast: Meal,
    /// Lunch
    pub lunch: Meal,
    /// Dinner
    pub dinner: Meal,
    /// Snack
    pub snack: Meal,
}

/// Macro targets for one meal slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealMacros {
    /// Calories (kcal)
    pub calories: i32,
    /// Protein (g)
    pub protein: i32,
    /// Carbohydrates (g)
    pub carbs: i32,
    /// Fat (g)
    pub fat: i32,
}

/// Per-slot macro allocation of the daily targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealMacroTargets {
    /// Breakfast allocation (30%)
    pub breakfast: MealMacros,
    /// Lunch allocation (35%)
    pub lunch: MealMacros,
    /// Dinner allocation (30%)
    pub dinner: MealMacros,
    /// Snack allocation (5%)
    pub snack: MealMacros,
}

impl MealMacroTargets {
    /// Targets for a specific slot
    #[must_use]
    pub const fn for_slot(&self, slot: MealType) -> MealMacros {
        match slot {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }
}

/// Daily nutrition targets derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Basal Metabolic Rate (kcal/day), rounded
    pub bmr: i32,
    /// Total Daily Energy Expenditure (kcal/day), rounded
    pub tdee: i32,
    /// Goal-adjusted daily calorie target (kcal)
    pub daily_calories: i32,
    /// Daily protein (g)
    pub daily_protein: i32,
    /// Daily carbohydrates (g)
    pub daily_carbs: i32,
    /// Daily fat (g)
    pub daily_fat: i32,
    /// Per-meal allocation of the daily targets
    pub meal_macros: MealMacroTargets,
}

/// Macro percentage split recomputed from rounded gram values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share of daily calories (percent)
    pub protein: i32,
    /// Carbohydrate share of daily calories (percent)
    pub carbs: i32,
    /// Fat share of daily calories (percent)
    pub fat: i32,
}

/// Display-oriented nutrition summary, recomputed on demand.
///
/// The `macro_split` percentages are derived from the rounded gram values
/// rather than the original ratio table, so small rounding drift is visible.
/// That mirrors what the user sees on a nutrition label and is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSummary {
    /// Underlying daily targets
    #[serde(flatten)]
    pub targets: MacroTargets,
    /// Human-readable goal description
    pub goal_description: String,
    /// Human-readable plan-type description
    pub plan_description: String,
    /// Human-readable diet description
    pub diet_description: String,
    /// Percentage split recomputed from rounded grams
    pub macro_split: MacroSplit,
}

/// Completion tracking for a day's exercises.
///
/// Sized to the day's workout lists so external UI code can toggle entries
/// by index without bounds surprises. Empty on rest days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompletedExercises {
    /// One flag per cardio instruction
    pub cardio: Vec<bool>,
    /// One flag per strength instruction
    pub strength: Vec<bool>,
}

impl CompletedExercises {
    /// Flags sized to a workout's instruction lists, all unset
    #[must_use]
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            cardio: vec![false; workout.cardio.len()],
            strength: vec![false; workout.strength.len()],
        }
    }
}

/// One calendar day of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day name, "Sunday" through "Saturday"
    pub day_name: String,
    /// Whether this day falls on one of the profile's rest days
    pub is_rest_day: bool,
    /// Workout for training days; `None` on rest days
    pub workout: Option<Workout>,
    /// Meals for training days; `None` on rest days
    pub meals: Option<MealSlots>,
    /// Completion flags, owned and toggled by the caller
    pub completed_exercises: CompletedExercises,
}

/// One week of the plan: seven days, Sunday through Saturday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// 1-based week number
    pub week_number: u32,
    /// Seven day plans in Sunday..Saturday order
    pub days: Vec<DayPlan>,
}

/// A complete generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Week plans in order, length equals the profile's (clamped) week count
    pub weeks: Vec<WeekPlan>,
}

/// Day names indexed Sunday=0 through Saturday=6
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
