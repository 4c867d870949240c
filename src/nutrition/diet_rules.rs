// ABOUTME: Diet definitions: base macro ratios, goal adjustments, and compliance filtering
// ABOUTME: Ingredient matching is substring-based and intentionally conservative
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Diet Rules
//!
//! Each diet carries a base protein/carb/fat split and two exclusion lists:
//! ingredient substrings and allergen categories. Compliance checking is
//! substring-based over lowercased ingredient text and the meal name, so
//! "almond milk" is excluded from vegan by the `milk` rule and "cauliflower
//! rice" from keto by the `rice` rule. False positives are accepted over
//! false negatives: serving a non-compliant meal is the worse failure.
//!
//! Keto, carnivore, and atkins have physiologically fixed ratios and never
//! receive goal-based adjustment. Flexible diets get a small protein bump
//! for weight loss or muscle gain, a carb reduction for weight loss, and a
//! carb-for-fat trade for muscle gain.

use std::collections::BTreeSet;

use crate::models::{DietType, FoodSensitivity, Goal, Meal};

/// Base protein/carb/fat calorie fractions for a diet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    /// Protein fraction of daily calories
    pub protein: f64,
    /// Carbohydrate fraction of daily calories
    pub carbs: f64,
    /// Fat fraction of daily calories
    pub fat: f64,
}

/// Exclusion rules for a diet
#[derive(Debug, Clone)]
pub struct DietRestrictions {
    /// Ingredient substrings that disqualify a meal (lowercase)
    pub exclude_ingredients: &'static [&'static str],
    /// Allergen categories the diet excludes outright
    pub exclude_allergens: &'static [FoodSensitivity],
}

/// Base macro ratios for a diet, before goal adjustment
#[must_use]
pub const fn base_ratios(diet: DietType) -> MacroRatios {
    match diet {
        DietType::Standard => MacroRatios { protein: 0.30, carbs: 0.40, fat: 0.30 },
        DietType::Keto => MacroRatios { protein: 0.25, carbs: 0.05, fat: 0.70 },
        DietType::Paleo => MacroRatios { protein: 0.35, carbs: 0.35, fat: 0.30 },
        DietType::Atkins => MacroRatios { protein: 0.35, carbs: 0.10, fat: 0.55 },
        DietType::Carnivore => MacroRatios { protein: 0.50, carbs: 0.00, fat: 0.50 },
        DietType::Vegetarian => MacroRatios { protein: 0.25, carbs: 0.45, fat: 0.30 },
        DietType::Vegan => MacroRatios { protein: 0.25, carbs: 0.50, fat: 0.25 },
        DietType::Mediterranean => MacroRatios { protein: 0.20, carbs: 0.45, fat: 0.35 },
    }
}

/// Whether a diet's ratios are fixed regardless of goal
#[must_use]
pub const fn has_fixed_ratios(diet: DietType) -> bool {
    matches!(diet, DietType::Keto | DietType::Carnivore | DietType::Atkins)
}

/// Macro ratios for a diet adjusted for the training goal.
///
/// Fixed-ratio diets are returned unchanged. For flexible diets, weight
/// loss bumps protein (+5pp, capped at 40%) and trims carbs (-5pp, floored
/// at 20%) for muscle preservation; muscle gain bumps protein the same way
/// and, for diets with meaningful carb intake, trades 10pp of fat (floored
/// at 20%) for 5pp of carbs (capped at 55%).
#[must_use]
pub fn goal_adjusted_ratios(diet: DietType, goal: Goal) -> MacroRatios {
    let base = base_ratios(diet);
    if has_fixed_ratios(diet) {
        return base;
    }
    let mut ratios = base;
    match goal {
        Goal::WeightLoss => {
            ratios.protein = (ratios.protein + 0.05).min(0.40);
            ratios.carbs = (ratios.carbs - 0.05).max(0.20);
        }
        Goal::MuscleGain => {
            ratios.protein = (ratios.protein + 0.05).min(0.40);
            if ratios.carbs > 0.10 {
                ratios.carbs = (ratios.carbs + 0.05).min(0.55);
                ratios.fat = (ratios.fat - 0.10).max(0.20);
            }
        }
        Goal::Maintenance => {}
    }
    ratios
}

/// Exclusion rules for a diet
#[must_use]
pub const fn restrictions(diet: DietType) -> DietRestrictions {
    match diet {
        DietType::Standard => DietRestrictions {
            exclude_ingredients: &[],
            exclude_allergens: &[],
        },
        DietType::Keto => DietRestrictions {
            exclude_ingredients: &[
                "rice", "pasta", "bread", "oats", "quinoa", "beans", "potato",
                "sweet potato", "banana", "apple", "grapes", "honey", "sugar",
            ],
            exclude_allergens: &[],
        },
        DietType::Paleo => DietRestrictions {
            exclude_ingredients: &[
                "rice", "pasta", "bread", "oats", "quinoa", "beans", "lentils",
                "chickpeas", "peanut", "dairy", "cheese", "yogurt", "milk", "soy",
                "tofu", "tempeh",
            ],
            exclude_allergens: &[FoodSensitivity::Dairy, FoodSensitivity::Soy],
        },
        DietType::Atkins => DietRestrictions {
            exclude_ingredients: &[
                "rice", "pasta", "bread", "oats", "quinoa", "beans", "potato",
                "sweet potato", "banana", "apple", "grapes", "honey", "sugar", "corn",
            ],
            exclude_allergens: &[],
        },
        DietType::Carnivore => DietRestrictions {
            exclude_ingredients: &[
                "rice", "pasta", "bread", "oats", "quinoa", "beans", "lentils",
                "chickpeas", "potato", "sweet potato", "vegetables", "fruit",
                "berries", "banana", "apple", "spinach", "broccoli", "tomato",
                "lettuce", "kale", "asparagus", "onion", "cucumber", "carrots",
                "nuts", "seeds", "honey", "sugar",
            ],
            exclude_allergens: &[],
        },
        DietType::Vegetarian => DietRestrictions {
            exclude_ingredients: &[
                "chicken", "turkey", "beef", "pork", "lamb", "fish", "tuna",
                "salmon", "shrimp", "bacon", "sausage",
            ],
            exclude_allergens: &[],
        },
        DietType::Vegan => DietRestrictions {
            exclude_ingredients: &[
                "chicken", "turkey", "beef", "pork", "lamb", "fish", "tuna",
                "salmon", "shrimp", "bacon", "sausage", "eggs", "dairy", "cheese",
                "yogurt", "milk", "butter", "whey", "casein", "honey",
            ],
            exclude_allergens: &[
                FoodSensitivity::Eggs,
                FoodSensitivity::Dairy,
                FoodSensitivity::Fish,
            ],
        },
        DietType::Mediterranean => DietRestrictions {
            exclude_ingredients: &["beef", "pork", "bacon", "sausage", "butter"],
            exclude_allergens: &[],
        },
    }
}

/// Whether a meal passes a diet's ingredient and allergen exclusions.
///
/// Standard accepts everything. Otherwise every excluded substring is
/// checked against the lowercased ingredient list and the meal name, and
/// the meal's declared allergens must be disjoint from the diet's excluded
/// allergen categories.
#[must_use]
pub fn is_compliant(meal: &Meal, diet: DietType) -> bool {
    if diet == DietType::Standard {
        return true;
    }
    let rules = restrictions(diet);
    let name = meal.name.to_lowercase();
    let ingredients: Vec<String> = meal
        .ingredients
        .iter()
        .map(|i| i.to_lowercase())
        .collect();
    for excluded in rules.exclude_ingredients {
        if name.contains(excluded) || ingredients.iter().any(|i| i.contains(excluded)) {
            return false;
        }
    }
    !rules
        .exclude_allergens
        .iter()
        .any(|allergen| meal.allergens.contains(allergen))
}

/// Whether a meal avoids all of the user's food sensitivities
#[must_use]
pub fn avoids_sensitivities(meal: &Meal, sensitivities: &BTreeSet<FoodSensitivity>) -> bool {
    meal.allergens.is_disjoint(sensitivities)
}

/// Short human-readable description of a diet
#[must_use]
pub const fn description(diet: DietType) -> &'static str {
    match diet {
        DietType::Standard => "Balanced diet with no restrictions",
        DietType::Keto => "Very low carb, high fat diet",
        DietType::Paleo => "Whole foods, no grains, legumes, or dairy",
        DietType::Atkins => "Very low carb, higher protein",
        DietType::Carnivore => "Animal products only",
        DietType::Vegetarian => "No meat, fish, or poultry",
        DietType::Vegan => "No animal products",
        DietType::Mediterranean => "Fish, olive oil, whole grains, vegetables",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn meal(name: &str, ingredients: &[&str], allergens: &[FoodSensitivity]) -> Meal {
        Meal {
            name: name.to_owned(),
            meal_type: MealType::Lunch,
            calories: 400,
            protein: 30,
            carbs: 40,
            fat: 12,
            prep_time: "10 min".to_owned(),
            ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
            instructions: String::new(),
            allergens: allergens.iter().copied().collect(),
        }
    }

    #[test]
    fn standard_accepts_everything() {
        let m = meal("Bacon Sugar Bomb", &["bacon", "sugar", "bread"], &[]);
        assert!(is_compliant(&m, DietType::Standard));
    }

    #[test]
    fn substring_matching_catches_compound_ingredients() {
        // "almond milk" contains "milk", "cauliflower rice" contains "rice"
        let almond = meal("Smoothie", &["almond milk", "banana"], &[]);
        assert!(!is_compliant(&almond, DietType::Vegan));
        let cauli = meal("Veggie Bowl", &["cauliflower rice", "broccoli"], &[]);
        assert!(!is_compliant(&cauli, DietType::Keto));
    }

    #[test]
    fn meal_name_is_checked_too() {
        let m = meal("Chicken Surprise", &["mystery protein", "herbs"], &[]);
        assert!(!is_compliant(&m, DietType::Vegetarian));
    }

    #[test]
    fn diet_allergen_exclusions_apply() {
        let m = meal("Frittata", &["free-range ovum", "spinach"], &[FoodSensitivity::Eggs]);
        assert!(!is_compliant(&m, DietType::Vegan));
        assert!(is_compliant(&m, DietType::Vegetarian));
    }

    #[test]
    fn fixed_ratio_diets_ignore_goal() {
        for diet in [DietType::Keto, DietType::Carnivore, DietType::Atkins] {
            let base = base_ratios(diet);
            for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance] {
                assert_eq!(goal_adjusted_ratios(diet, goal), base);
            }
        }
    }

    #[test]
    fn weight_loss_shifts_protein_up_and_carbs_down() {
        let ratios = goal_adjusted_ratios(DietType::Standard, Goal::WeightLoss);
        assert!((ratios.protein - 0.35).abs() < 1e-9);
        assert!((ratios.carbs - 0.35).abs() < 1e-9);
        assert!((ratios.fat - 0.30).abs() < 1e-9);
    }

    #[test]
    fn muscle_gain_trades_fat_for_carbs() {
        let ratios = goal_adjusted_ratios(DietType::Standard, Goal::MuscleGain);
        assert!((ratios.protein - 0.35).abs() < 1e-9);
        assert!((ratios.carbs - 0.45).abs() < 1e-9);
        assert!((ratios.fat - 0.20).abs() < 1e-9);
    }

    #[test]
    fn protein_cap_holds_for_high_protein_diets() {
        let ratios = goal_adjusted_ratios(DietType::Paleo, Goal::WeightLoss);
        assert!((ratios.protein - 0.40).abs() < 1e-9);
    }

    #[test]
    fn sensitivity_check_is_set_disjointness() {
        let m = meal("Yogurt Bowl", &["greek yogurt", "berries"], &[FoodSensitivity::Dairy]);
        let dairy_free = BTreeSet::from([FoodSensitivity::Dairy]);
        let nut_free = BTreeSet::from([FoodSensitivity::Nuts]);
        assert!(!avoids_sensitivities(&m, &dairy_free));
        assert!(avoids_sensitivities(&m, &nut_free));
    }
}
