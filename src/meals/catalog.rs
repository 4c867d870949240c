// ABOUTME: Static meal catalog keyed by goal, with allergen tags and slot assignments
// ABOUTME: Every diet type has at least one compliant meal per goal and slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Meal Catalog
//!
//! Meals are grouped by goal with per-goal calorie patterns (weight loss
//! runs 280/350/420/180 kcal across breakfast/lunch/dinner/snack, muscle
//! gain 450/550/620/320, maintenance 380/450/480/200). The catalog values
//! are serving suggestions only; the planner overwrites them with the
//! user's per-meal targets.
//!
//! The catalog maintains a coverage guarantee: for every goal, slot, and
//! diet type there is at least one compliant meal before food sensitivities
//! are applied. Extending the diet rules or removing meals must preserve
//! this, and the catalog tests enforce it.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::models::{FoodSensitivity, Goal, Meal, MealType};

#[allow(clippy::too_many_arguments)]
fn meal(
    name: &str,
    meal_type: MealType,
    calories: i32,
    protein: i32,
    carbs: i32,
    fat: i32,
    prep_time: &str,
    ingredients: &[&str],
    instructions: &str,
    allergens: &[FoodSensitivity],
) -> Meal {
    Meal {
        name: name.to_owned(),
        meal_type,
        calories,
        protein,
        carbs,
        fat,
        prep_time: prep_time.to_owned(),
        ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
        instructions: instructions.to_owned(),
        allergens: allergens.iter().copied().collect(),
    }
}

static WEIGHT_LOSS_MEALS: LazyLock<Vec<Meal>> = LazyLock::new(|| {
    use FoodSensitivity::{Dairy, Eggs, Fish, Nuts, Soy};
    use MealType::{Breakfast, Dinner, Lunch, Snack};
    vec![
        meal(
            "Greek Yogurt & Berries", Breakfast, 280, 20, 35, 5, "5 min",
            &["Greek yogurt (1 cup)", "Mixed berries (1 cup)", "Honey (1 tsp)"],
            "Mix Greek yogurt with fresh berries and drizzle honey on top.",
            &[Dairy],
        ),
        meal(
            "Oatmeal with Fruit", Breakfast, 280, 10, 50, 5, "8 min",
            &["Oats (1/2 cup)", "Almond milk (1 cup)", "Banana (1)", "Cinnamon"],
            "Cook oats with almond milk. Top with sliced banana and cinnamon.",
            &[],
        ),
        meal(
            "Veggie Scramble", Breakfast, 280, 18, 15, 18, "10 min",
            &["Eggs (3)", "Spinach (1 cup)", "Tomatoes", "Onion", "Olive oil"],
            "Scramble eggs with sauteed vegetables.",
            &[Eggs],
        ),
        meal(
            "Smoothie Bowl", Breakfast, 280, 15, 45, 6, "5 min",
            &["Protein powder (1 scoop)", "Frozen berries (1 cup)", "Banana (1)", "Coconut milk (1/2 cup)"],
            "Blend all ingredients. Pour into bowl and top with berries.",
            &[],
        ),
        meal(
            "Chia Berry Pudding", Breakfast, 280, 9, 38, 11, "5 min (prep night before)",
            &["Chia seeds (3 tbsp)", "Coconut cream (1/2 cup)", "Mixed berries (1/2 cup)", "Maple syrup (1 tsp)"],
            "Stir chia seeds into coconut cream. Refrigerate overnight. Top with berries and maple syrup.",
            &[],
        ),
        meal(
            "Smoked Salmon & Eggs", Breakfast, 280, 24, 3, 19, "8 min",
            &["Smoked salmon (3 oz)", "Eggs (2)", "Chives", "Olive oil"],
            "Soft-scramble eggs in olive oil. Fold in smoked salmon and chives.",
            &[Fish, Eggs],
        ),
        meal(
            "Grilled Chicken Salad", Lunch, 350, 40, 20, 12, "15 min",
            &["Chicken breast (6 oz)", "Mixed greens (2 cups)", "Cherry tomatoes", "Cucumber", "Olive oil dressing (1 tbsp)"],
            "Grill chicken, slice it, and serve over mixed greens with vegetables and dressing.",
            &[],
        ),
        meal(
            "Tuna Lettuce Wraps", Lunch, 350, 35, 20, 15, "10 min",
            &["Canned tuna (6 oz)", "Lettuce leaves", "Avocado (1/4)", "Tomato", "Lemon juice"],
            "Mix tuna with lemon juice. Serve in lettuce wraps with vegetables.",
            &[Fish],
        ),
        meal(
            "Turkey & Veggie Stir-fry", Lunch, 350, 38, 25, 12, "15 min",
            &["Ground turkey (6 oz)", "Mixed vegetables", "Coconut aminos", "Ginger", "Garlic"],
            "Stir-fry turkey with vegetables and seasonings.",
            &[],
        ),
        meal(
            "Tofu Buddha Bowl", Lunch, 350, 20, 40, 12, "20 min",
            &["Tofu (6 oz)", "Quinoa (1/2 cup)", "Roasted vegetables", "Tahini dressing"],
            "Bake tofu. Serve over quinoa with roasted vegetables and dressing.",
            &[Soy],
        ),
        meal(
            "Grilled Chicken Thighs", Lunch, 350, 34, 2, 22, "18 min",
            &["Chicken thighs (6 oz)", "Olive oil", "Garlic", "Salt"],
            "Rub thighs with olive oil and garlic. Grill until cooked through.",
            &[],
        ),
        meal(
            "Baked Salmon & Veggies", Dinner, 420, 38, 25, 18, "25 min",
            &["Salmon fillet (6 oz)", "Broccoli (1 cup)", "Sweet potato (1 small)", "Lemon", "Olive oil"],
            "Bake salmon at 400F for 15 min. Roast vegetables with olive oil and lemon.",
            &[Fish],
        ),
        meal(
            "Chicken & Cauliflower Rice", Dinner, 420, 40, 20, 20, "20 min",
            &["Chicken breast (8 oz)", "Cauliflower rice (2 cups)", "Vegetables", "Coconut oil"],
            "Grill chicken. Saute cauliflower rice with vegetables.",
            &[],
        ),
        meal(
            "Lean Beef & Vegetables", Dinner, 420, 42, 20, 20, "25 min",
            &["Lean beef (6 oz)", "Green beans (1 cup)", "Carrots", "Mushrooms", "Herbs"],
            "Cook beef to desired doneness. Roast vegetables with herbs.",
            &[],
        ),
        meal(
            "Shrimp & Zucchini Noodles", Dinner, 420, 36, 25, 18, "15 min",
            &["Shrimp (8 oz)", "Zucchini noodles (2 cups)", "Garlic", "Tomatoes", "Olive oil"],
            "Saute shrimp with garlic. Toss with zucchini noodles and tomatoes.",
            &[Fish],
        ),
        meal(
            "Lentil & Vegetable Curry", Dinner, 420, 20, 62, 10, "25 min",
            &["Red lentils (1 cup)", "Coconut cream (1/2 cup)", "Spinach", "Tomatoes", "Brown rice (1/2 cup)"],
            "Simmer lentils with coconut cream and vegetables. Serve over rice.",
            &[],
        ),
        meal(
            "Baked Cod with Butter", Dinner, 420, 45, 2, 24, "20 min",
            &["Cod fillet (8 oz)", "Butter (1 tbsp)", "Lemon", "Parsley"],
            "Bake cod with butter and lemon. Garnish with parsley.",
            &[Fish, Dairy],
        ),
        meal(
            "Apple & Almond Butter", Snack, 180, 5, 20, 8, "2 min",
            &["Apple (1 medium)", "Almond butter (1 tbsp)"],
            "Slice apple and serve with almond butter.",
            &[Nuts],
        ),
        meal(
            "Veggie Sticks & Hummus", Snack, 180, 6, 22, 8, "5 min",
            &["Carrots", "Celery", "Bell peppers", "Hummus (3 tbsp)"],
            "Cut vegetables into sticks. Serve with hummus.",
            &[],
        ),
        meal(
            "Hard-Boiled Eggs", Snack, 180, 12, 2, 12, "10 min",
            &["Eggs (2)", "Salt", "Pepper"],
            "Boil eggs for 10 minutes. Season with salt and pepper.",
            &[Eggs],
        ),
        meal(
            "Rice Cakes & Avocado", Snack, 180, 4, 24, 8, "3 min",
            &["Rice cakes (2)", "Avocado (1/4)", "Sea salt", "Lemon juice"],
            "Mash avocado on rice cakes. Season with salt and lemon.",
            &[],
        ),
    ]
});

static MUSCLE_GAIN_MEALS: LazyLock<Vec<Meal>> = LazyLock::new(|| {
    use FoodSensitivity::{Dairy, Eggs, Fish, Gluten, Nuts, Soy};
    use MealType::{Breakfast, Dinner, Lunch, Snack};
    vec![
        meal(
            "Protein Pancakes", Breakfast, 450, 35, 50, 12, "10 min",
            &["Eggs (2)", "Protein powder (1 scoop)", "Oats (1/2 cup)", "Banana (1)", "Blueberries"],
            "Blend all ingredients, cook as pancakes, top with berries.",
            &[Eggs, Gluten],
        ),
        meal(
            "Breakfast Burrito", Breakfast, 450, 30, 50, 15, "12 min",
            &["Tortilla", "Eggs (3)", "Black beans", "Avocado", "Salsa"],
            "Scramble eggs. Fill tortilla with eggs, beans, avocado, and salsa.",
            &[Eggs, Gluten],
        ),
        meal(
            "Overnight Oats Protein Bowl", Breakfast, 450, 32, 55, 12, "5 min (prep night before)",
            &["Oats (1 cup)", "Protein powder (1 scoop)", "Almond milk", "Chia seeds", "Berries"],
            "Mix all ingredients. Refrigerate overnight. Enjoy cold.",
            &[],
        ),
        meal(
            "Tofu Scramble with Toast", Breakfast, 450, 28, 52, 15, "10 min",
            &["Tofu (8 oz)", "Whole grain toast (2 slices)", "Spinach", "Tomatoes", "Nutritional yeast"],
            "Scramble tofu with vegetables. Serve with toast.",
            &[Soy, Gluten],
        ),
        meal(
            "Steak & Eggs", Breakfast, 450, 42, 4, 28, "15 min",
            &["Sirloin steak (6 oz)", "Eggs (3)", "Avocado (1/4)"],
            "Pan-sear steak to desired doneness. Fry eggs and serve with sliced avocado.",
            &[Eggs],
        ),
        meal(
            "Turkey & Quinoa Bowl", Lunch, 550, 45, 55, 15, "20 min",
            &["Ground turkey (8 oz)", "Quinoa (1 cup cooked)", "Black beans", "Avocado (1/4)", "Salsa"],
            "Cook turkey and quinoa. Combine with beans, top with avocado and salsa.",
            &[],
        ),
        meal(
            "Salmon Power Bowl", Lunch, 550, 42, 48, 18, "15 min",
            &["Salmon (6 oz)", "Brown rice (1 cup)", "Edamame", "Cucumber", "Sesame ginger dressing"],
            "Bake salmon. Serve over rice with edamame and vegetables.",
            &[Fish, Soy],
        ),
        meal(
            "Chicken Pasta Bowl", Lunch, 550, 48, 58, 12, "18 min",
            &["Chicken breast (8 oz)", "Whole wheat pasta (2 oz dry)", "Marinara sauce", "Vegetables"],
            "Cook pasta. Grill chicken. Combine with sauce and vegetables.",
            &[Gluten],
        ),
        meal(
            "Beef & Rice Stir-fry", Lunch, 550, 46, 52, 16, "20 min",
            &["Lean beef (8 oz)", "Brown rice (1 cup)", "Mixed vegetables", "Coconut aminos", "Ginger"],
            "Stir-fry beef and vegetables. Serve over rice.",
            &[],
        ),
        meal(
            "Chickpea Power Bowl", Lunch, 550, 22, 72, 18, "15 min",
            &["Chickpeas (1 cup)", "Brown rice (1 cup)", "Avocado (1/4)", "Tahini", "Kale"],
            "Roast chickpeas. Serve over rice with massaged kale, avocado, and tahini.",
            &[],
        ),
        meal(
            "Grilled Chicken & Bacon", Lunch, 550, 52, 2, 34, "20 min",
            &["Chicken breast (8 oz)", "Bacon (3 slices)", "Olive oil"],
            "Grill chicken. Crisp bacon and serve alongside.",
            &[],
        ),
        meal(
            "Steak & Sweet Potato", Dinner, 620, 50, 45, 22, "30 min",
            &["Sirloin steak (8 oz)", "Sweet potato (1 large)", "Asparagus (1 cup)", "Butter (1 tbsp)"],
            "Grill steak to desired doneness. Bake sweet potato, saute asparagus.",
            &[Dairy],
        ),
        meal(
            "Chicken & Rice with Vegetables", Dinner, 620, 52, 60, 15, "25 min",
            &["Chicken breast (10 oz)", "Brown rice (1.5 cups)", "Broccoli", "Carrots", "Olive oil"],
            "Bake chicken. Cook rice. Roast vegetables.",
            &[],
        ),
        meal(
            "Pork Chops & Quinoa", Dinner, 620, 48, 48, 22, "28 min",
            &["Pork chops (8 oz)", "Quinoa (1 cup)", "Green beans", "Mushrooms", "Herbs"],
            "Grill pork chops. Cook quinoa. Saute vegetables.",
            &[],
        ),
        meal(
            "Tuna Steak & Potatoes", Dinner, 620, 50, 50, 18, "22 min",
            &["Tuna steak (8 oz)", "Baby potatoes", "Spinach", "Lemon", "Olive oil"],
            "Sear tuna. Roast potatoes. Saute spinach.",
            &[Fish],
        ),
        meal(
            "Tempeh Stir-fry", Dinner, 620, 36, 64, 22, "20 min",
            &["Tempeh (8 oz)", "Brown rice (1 cup)", "Broccoli", "Ginger", "Sesame oil"],
            "Stir-fry tempeh and broccoli with ginger. Serve over rice.",
            &[Soy],
        ),
        meal(
            "Ribeye Steak", Dinner, 620, 48, 0, 46, "20 min",
            &["Ribeye steak (10 oz)", "Butter (1 tbsp)", "Sea salt"],
            "Sear ribeye in butter, basting continuously. Rest before slicing.",
            &[Dairy],
        ),
        meal(
            "Protein Shake", Snack, 320, 30, 35, 8, "3 min",
            &["Protein powder (1.5 scoops)", "Banana (1)", "Peanut butter (1 tbsp)", "Milk (1 cup)"],
            "Blend all ingredients until smooth.",
            &[Dairy, Nuts],
        ),
        meal(
            "Greek Yogurt Parfait", Snack, 320, 25, 40, 6, "5 min",
            &["Greek yogurt (1.5 cups)", "Granola (1/4 cup)", "Berries", "Honey"],
            "Layer yogurt with granola and berries.",
            &[Dairy, Gluten],
        ),
        meal(
            "Protein Balls", Snack, 320, 18, 38, 12, "10 min (prep in advance)",
            &["Protein powder", "Oats", "Almond butter", "Honey", "Chocolate chips"],
            "Mix all ingredients. Roll into balls. Refrigerate.",
            &[Nuts, Gluten],
        ),
        meal(
            "Cottage Cheese & Fruit", Snack, 320, 28, 35, 8, "3 min",
            &["Cottage cheese (1.5 cups)", "Pineapple chunks", "Cinnamon"],
            "Top cottage cheese with fruit and cinnamon.",
            &[Dairy],
        ),
        meal(
            "Energy Trail Mix", Snack, 320, 12, 34, 18, "1 min",
            &["Mixed nuts (1/3 cup)", "Dried fruit (3 tbsp)", "Pumpkin seeds (2 tbsp)", "Dark chocolate (1 oz)"],
            "Combine all ingredients.",
            &[Nuts],
        ),
        meal(
            "Beef Jerky & Cheese", Snack, 320, 32, 6, 18, "1 min",
            &["Beef jerky (2 oz)", "Cheddar cheese (1.5 oz)"],
            "Portion jerky and cheese together.",
            &[Dairy],
        ),
    ]
});

static MAINTENANCE_MEALS: LazyLock<Vec<Meal>> = LazyLock::new(|| {
    use FoodSensitivity::{Dairy, Eggs, Fish, Gluten, Nuts, Soy};
    use MealType::{Breakfast, Dinner, Lunch, Snack};
    vec![
        meal(
            "Oatmeal & Eggs", Breakfast, 380, 22, 45, 12, "10 min",
            &["Oats (1/2 cup)", "Eggs (2)", "Berries", "Almonds (10)"],
            "Cook oatmeal, scramble eggs, top oats with berries and almonds.",
            &[Eggs, Nuts],
        ),
        meal(
            "Avocado Toast with Egg", Breakfast, 380, 18, 42, 16, "8 min",
            &["Whole grain bread (2 slices)", "Avocado (1/2)", "Eggs (2)", "Tomato"],
            "Toast bread, mash avocado, fry eggs, assemble.",
            &[Eggs, Gluten],
        ),
        meal(
            "Smoothie with Protein", Breakfast, 380, 25, 48, 10, "5 min",
            &["Protein powder", "Spinach", "Banana", "Berries", "Oat milk"],
            "Blend all ingredients until smooth.",
            &[],
        ),
        meal(
            "Oatmeal with Banana", Breakfast, 380, 12, 68, 8, "8 min",
            &["Oats (3/4 cup)", "Banana (1)", "Cinnamon", "Maple syrup (1 tsp)"],
            "Cook oats in water. Top with sliced banana, cinnamon, and maple syrup.",
            &[],
        ),
        meal(
            "Ham & Egg Scramble", Breakfast, 380, 30, 3, 26, "10 min",
            &["Eggs (3)", "Ham (3 oz)", "Olive oil"],
            "Scramble eggs with diced ham in olive oil.",
            &[Eggs],
        ),
        meal(
            "Chicken Wrap", Lunch, 450, 35, 40, 15, "12 min",
            &["Whole wheat tortilla", "Grilled chicken (5 oz)", "Lettuce", "Tomato", "Hummus (2 tbsp)"],
            "Fill tortilla with chicken and vegetables, spread hummus, and wrap.",
            &[Gluten],
        ),
        meal(
            "Quinoa & Black Bean Salad", Lunch, 450, 17, 72, 11, "15 min",
            &["Quinoa (1 cup)", "Black beans (3/4 cup)", "Corn", "Lime", "Cilantro"],
            "Toss cooked quinoa with beans, corn, lime juice, and cilantro.",
            &[],
        ),
        meal(
            "Tuna & Egg Plate", Lunch, 450, 42, 3, 28, "12 min",
            &["Canned tuna (6 oz)", "Hard-boiled eggs (2)", "Olive oil"],
            "Plate tuna and halved eggs. Drizzle with olive oil.",
            &[Fish, Eggs],
        ),
        meal(
            "Shrimp Stir-fry", Dinner, 480, 40, 48, 14, "20 min",
            &["Shrimp (8 oz)", "Brown rice (1 cup cooked)", "Mixed vegetables", "Soy sauce", "Ginger"],
            "Stir-fry shrimp and vegetables with ginger and soy sauce. Serve over rice.",
            &[Fish, Soy],
        ),
        meal(
            "Roasted Vegetable Pasta", Dinner, 480, 16, 74, 14, "22 min",
            &["Whole wheat pasta (3 oz dry)", "Zucchini", "Cherry tomatoes", "Olive oil", "Basil"],
            "Roast vegetables. Toss with cooked pasta, olive oil, and basil.",
            &[Gluten],
        ),
        meal(
            "Roast Chicken Thighs", Dinner, 480, 42, 2, 32, "30 min",
            &["Chicken thighs (8 oz)", "Olive oil", "Rosemary"],
            "Roast thighs at 425F with olive oil and rosemary until crisp.",
            &[],
        ),
        meal(
            "Trail Mix", Snack, 200, 8, 22, 10, "1 min",
            &["Mixed nuts (1/4 cup)", "Dried fruit (2 tbsp)", "Dark chocolate chips (1 tbsp)"],
            "Mix all ingredients together.",
            &[Nuts],
        ),
        meal(
            "Turkey Roll-ups", Snack, 200, 18, 3, 13, "3 min",
            &["Turkey breast slices (3 oz)", "Cream cheese (1 oz)"],
            "Spread cream cheese on turkey slices and roll up.",
            &[Dairy],
        ),
    ]
});

/// All catalog meals for a goal
#[must_use]
pub fn meals_for_goal(goal: Goal) -> &'static [Meal] {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS_MEALS,
        Goal::MuscleGain => &MUSCLE_GAIN_MEALS,
        Goal::Maintenance => &MAINTENANCE_MEALS,
    }
}

/// Catalog meals for a goal and slot, filtered by food sensitivities
#[must_use]
pub fn meals_for_slot(
    goal: Goal,
    slot: MealType,
    sensitivities: &BTreeSet<FoodSensitivity>,
) -> Vec<&'static Meal> {
    meals_for_goal(goal)
        .iter()
        .filter(|m| m.meal_type == slot)
        .filter(|m| m.allergens.is_disjoint(sensitivities))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_goal_covers_every_slot() {
        let none = BTreeSet::new();
        for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance] {
            for slot in MealType::ALL {
                assert!(
                    !meals_for_slot(goal, slot, &none).is_empty(),
                    "no {slot} meals for {goal}"
                );
            }
        }
    }

    #[test]
    fn sensitivity_filter_removes_tagged_meals() {
        let dairy_free = BTreeSet::from([FoodSensitivity::Dairy]);
        let meals = meals_for_slot(Goal::WeightLoss, MealType::Breakfast, &dairy_free);
        assert!(meals.iter().all(|m| !m.allergens.contains(&FoodSensitivity::Dairy)));
        assert!(!meals.iter().any(|m| m.name == "Greek Yogurt & Berries"));
    }

    #[test]
    fn goal_calorie_patterns_hold() {
        for m in meals_for_goal(Goal::WeightLoss) {
            let expected = match m.meal_type {
                MealType::Breakfast => 280,
                MealType::Lunch => 350,
                MealType::Dinner => 420,
                MealType::Snack => 180,
            };
            assert_eq!(m.calories, expected, "{}", m.name);
        }
        for m in meals_for_goal(Goal::MuscleGain) {
            let expected = match m.meal_type {
                MealType::Breakfast => 450,
                MealType::Lunch => 550,
                MealType::Dinner => 620,
                MealType::Snack => 320,
            };
            assert_eq!(m.calories, expected, "{}", m.name);
        }
    }
}
