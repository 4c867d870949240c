// ABOUTME: Equipment-aware randomized workout generator with progressive overload
// ABOUTME: Six-day templates per goal; cardio durations and hold times scale with weekly intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Algorithmic Workout Generator
//!
//! Sessions follow a six-slot weekly template per goal. The training-day
//! counter indexes the template with an explicit modulo, so a counter past
//! six wraps instead of panicking. Cardio instructions come from a
//! `(goal, difficulty)` table with durations scaled by the week's intensity
//! multiplier; strength instructions are drawn from the exercise catalog,
//! filtered by equipment and tier, shuffled with the caller's RNG, and
//! formatted against the goal's set/rep scheme.
//!
//! Exercise identity is random per call; everything else (set counts, rep
//! ranges, equipment compliance, session names) is deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::TrainingConfig;
use crate::models::{Difficulty, Goal, Profile, Workout};
use crate::physiology;
use crate::workouts::exercises::{self, BodyPart, Exercise, ExerciseKind};

/// Strength focus of a template slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Upper-body session
    Upper,
    /// Lower-body session
    Lower,
    /// Core session
    Core,
    /// Mixed session: 2 upper, 2 lower, 1 core
    FullBody,
}

struct DaySlot {
    name: &'static str,
    focus: Focus,
}

const WEIGHT_LOSS_WEEK: [DaySlot; 6] = [
    DaySlot { name: "Full Body Cardio & Strength", focus: Focus::FullBody },
    DaySlot { name: "Lower Body & HIIT", focus: Focus::Lower },
    DaySlot { name: "Upper Body & Cardio", focus: Focus::Upper },
    DaySlot { name: "Core & Endurance Cardio", focus: Focus::Core },
    DaySlot { name: "Full Body Circuit", focus: Focus::FullBody },
    DaySlot { name: "Active Recovery & Cardio", focus: Focus::Core },
];

const MUSCLE_GAIN_WEEK: [DaySlot; 6] = [
    DaySlot { name: "Chest & Triceps", focus: Focus::Upper },
    DaySlot { name: "Legs & Core", focus: Focus::Lower },
    DaySlot { name: "Back & Biceps", focus: Focus::Upper },
    DaySlot { name: "Shoulders & Core", focus: Focus::Upper },
    DaySlot { name: "Leg Power Day", focus: Focus::Lower },
    DaySlot { name: "Full Body Strength", focus: Focus::FullBody },
];

const MAINTENANCE_WEEK: [DaySlot; 6] = [
    DaySlot { name: "Upper Body Strength", focus: Focus::Upper },
    DaySlot { name: "Lower Body & Cardio", focus: Focus::Lower },
    DaySlot { name: "Full Body Circuit", focus: Focus::FullBody },
    DaySlot { name: "Core & Conditioning", focus: Focus::Core },
    DaySlot { name: "Upper Body & Cardio", focus: Focus::Upper },
    DaySlot { name: "Lower Body & Flexibility", focus: Focus::Lower },
];

const fn week_template(goal: Goal) -> &'static [DaySlot; 6] {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS_WEEK,
        Goal::MuscleGain => &MUSCLE_GAIN_WEEK,
        Goal::Maintenance => &MAINTENANCE_WEEK,
    }
}

struct RepScheme {
    sets: u32,
    reps: &'static str,
}

const fn rep_scheme(goal: Goal) -> RepScheme {
    match goal {
        Goal::WeightLoss => RepScheme { sets: 3, reps: "12-15" },
        Goal::MuscleGain => RepScheme { sets: 4, reps: "8-12" },
        Goal::Maintenance => RepScheme { sets: 3, reps: "10-12" },
    }
}

/// Generates the workout for a 1-based week and training-day counter
pub fn generate<R: Rng>(
    config: &TrainingConfig,
    profile: &Profile,
    week: u32,
    training_day: u32,
    rng: &mut R,
) -> Workout {
    let template = week_template(profile.goal);
    let slot = &template[(training_day.saturating_sub(1) as usize) % template.len()];
    let intensity = config
        .intensity
        .intensity_for_week(profile.difficulty, week);

    Workout {
        name: format!("{} - Week {week}", slot.name),
        cardio: cardio_block(profile, intensity),
        strength: strength_block(config, profile, slot.focus, intensity, rng),
    }
}

fn scaled(minutes: f64, intensity: f64) -> i64 {
    (minutes * intensity).round() as i64
}

fn cardio_block(profile: &Profile, intensity: f64) -> Vec<String> {
    let zones = physiology::heart_rate_zones(profile.age);
    let (z2, z3, z4) = (zones.moderate, zones.vigorous, zones.peak);
    match (profile.goal, profile.difficulty) {
        (Goal::WeightLoss, Difficulty::Beginner) => vec![
            format!("Brisk walk: {} min @ {z2} bpm", scaled(20.0, intensity)),
            format!(
                "Light jog intervals: 1 min jog / 2 min walk x {}",
                scaled(6.0, intensity)
            ),
            format!("Incline walk: {} min @ 5-8% incline", scaled(15.0, intensity)),
        ],
        (Goal::WeightLoss, Difficulty::Intermediate) => vec![
            format!("Steady run: {} min @ {z2}-{z3} bpm", scaled(30.0, intensity)),
            format!("HIIT intervals: 30s sprint / 90s jog x {}", scaled(10.0, intensity)),
            format!("Cycling: {} min moderate pace", scaled(35.0, intensity)),
        ],
        (Goal::WeightLoss, Difficulty::Advanced) => vec![
            format!("Long run: {} min @ {z3} bpm", scaled(45.0, intensity)),
            format!("Sprint intervals: 45s sprint / 60s rest x {}", scaled(12.0, intensity)),
            format!("Rowing: {} min @ {z3}-{z4} bpm", scaled(25.0, intensity)),
        ],
        (Goal::MuscleGain, Difficulty::Beginner) => vec![
            format!("Light cardio: {} min easy pace", scaled(15.0, intensity)),
            format!("Active recovery walk: {} min", scaled(20.0, intensity)),
        ],
        (Goal::MuscleGain, Difficulty::Intermediate) => vec![
            format!("Moderate cardio: {} min @ {z2} bpm", scaled(20.0, intensity)),
            format!("Jump rope: {} min (rest as needed)", scaled(10.0, intensity)),
        ],
        (Goal::MuscleGain, Difficulty::Advanced) => vec![
            format!("HIIT conditioning: 20s work / 40s rest x {}", scaled(15.0, intensity)),
            format!("Bike sprints: 30s all-out / 90s easy x {}", scaled(8.0, intensity)),
        ],
        (Goal::Maintenance, Difficulty::Beginner) => vec![
            format!("Walk/jog combo: {} min @ comfortable pace", scaled(25.0, intensity)),
            format!("Swimming: {} min easy laps", scaled(20.0, intensity)),
        ],
        (Goal::Maintenance, Difficulty::Intermediate) => vec![
            format!("Run: {} min @ {z2}-{z3} bpm", scaled(30.0, intensity)),
            format!("Cycling: {} min moderate intensity", scaled(35.0, intensity)),
        ],
        (Goal::Maintenance, Difficulty::Advanced) => vec![
            format!("Tempo run: {} min @ {z3} bpm", scaled(35.0, intensity)),
            format!("Mixed cardio: {} min (bike/row/run combo)", scaled(30.0, intensity)),
        ],
    }
}

fn strength_block<R: Rng>(
    config: &TrainingConfig,
    profile: &Profile,
    focus: Focus,
    intensity: f64,
    rng: &mut R,
) -> Vec<String> {
    let scheme = rep_scheme(profile.goal);
    let selected = match focus {
        Focus::Upper => pick(profile, BodyPart::Upper, session_count(config, profile), rng),
        Focus::Lower => pick(profile, BodyPart::Lower, session_count(config, profile), rng),
        Focus::Core => pick(profile, BodyPart::Core, session_count(config, profile), rng),
        Focus::FullBody => {
            let mut mixed = pick(profile, BodyPart::Upper, 2, rng);
            mixed.extend(pick(profile, BodyPart::Lower, 2, rng));
            mixed.extend(pick(profile, BodyPart::Core, 1, rng));
            mixed
        }
    };
    // One line per exercise; completion flags map onto these by index.
    selected
        .iter()
        .map(|e| format_exercise(e, &scheme, intensity))
        .collect()
}

const fn session_count(config: &TrainingConfig, profile: &Profile) -> usize {
    config.exercise_selection.count_for(profile.difficulty)
}

/// Filters the catalog, shuffles, and takes up to `count` entries.
///
/// Undersized pools return everything available rather than erroring;
/// bodyweight beginner coverage keeps pools non-empty for every body part.
fn pick<R: Rng>(
    profile: &Profile,
    part: BodyPart,
    count: usize,
    rng: &mut R,
) -> Vec<&'static Exercise> {
    let mut pool: Vec<&'static Exercise> = exercises::for_body_part(part)
        .filter(|e| e.is_available(profile.difficulty, |eq| profile.equipment.contains(&eq)))
        .collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

fn format_exercise(exercise: &Exercise, scheme: &RepScheme, intensity: f64) -> String {
    match exercise.kind {
        ExerciseKind::Reps => {
            format!("{}: {} x {}", exercise.name, scheme.sets, scheme.reps)
        }
        ExerciseKind::Hold { base_secs } => {
            let secs = (base_secs * intensity).round() as i64;
            format!("{}: {} x {secs}s", exercise.name, scheme.sets)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Equipment;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn profile(goal: Goal, difficulty: Difficulty, equipment: &[Equipment]) -> Profile {
        Profile {
            goal,
            difficulty,
            equipment: equipment.iter().copied().collect(),
            ..Profile::default()
        }
    }

    #[test]
    fn day_counter_wraps_past_six() {
        let config = TrainingConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let p = profile(Goal::Maintenance, Difficulty::Beginner, &[]);
        let day1 = generate(&config, &p, 1, 1, &mut rng);
        let day7 = generate(&config, &p, 1, 7, &mut rng);
        assert!(day1.name.starts_with("Upper Body Strength"));
        assert!(day7.name.starts_with("Upper Body Strength"));
    }

    #[test]
    fn bodyweight_profile_never_gets_equipment_exercises() {
        let config = TrainingConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = profile(Goal::WeightLoss, Difficulty::Advanced, &[]);
        for day in 1..=6 {
            let workout = generate(&config, &p, 3, day, &mut rng);
            for line in &workout.strength {
                assert!(!line.contains("Barbell"), "{line}");
                assert!(!line.contains("Leg press"), "{line}");
                assert!(!line.contains("Pull-ups"), "{line}");
                assert!(!line.contains("Face pulls"), "{line}");
            }
        }
    }

    #[test]
    fn strength_lines_use_goal_rep_scheme() {
        let config = TrainingConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let p = profile(Goal::MuscleGain, Difficulty::Intermediate, &[Equipment::Dumbbells]);
        let workout = generate(&config, &p, 1, 1, &mut rng);
        // Intermediate sessions draw 6 exercises, one line each
        assert_eq!(workout.strength.len(), 6);
        let reps: Vec<_> = workout
            .strength
            .iter()
            .filter(|l| l.contains("x 8-12"))
            .collect();
        assert!(!reps.is_empty());
        // Every strength line is a formatted exercise, never an
        // interleaved instruction
        assert!(workout.strength.iter().all(|l| l.contains(" x ")));
    }

    #[test]
    fn full_body_mixes_regions() {
        let config = TrainingConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = profile(Goal::MuscleGain, Difficulty::Beginner, &[]);
        // Slot 6 of the muscle-gain template is Full Body Strength
        let workout = generate(&config, &p, 1, 6, &mut rng);
        assert!(workout.name.starts_with("Full Body Strength"));
        // 2 upper + 2 lower + 1 core
        assert_eq!(workout.strength.len(), 5);
    }

    #[test]
    fn cardio_durations_scale_with_week() {
        let config = TrainingConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let p = profile(Goal::Maintenance, Difficulty::Intermediate, &[]);
        let week1 = generate(&config, &p, 1, 1, &mut rng);
        let week11 = generate(&config, &p, 11, 1, &mut rng);
        // Intensity 1.0 -> "Run: 30 min", intensity 1.5 -> "Run: 45 min"
        assert!(week1.cardio[0].starts_with("Run: 30 min"));
        assert!(week11.cardio[0].starts_with("Run: 45 min"));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = TrainingConfig::default();
        let p = profile(Goal::WeightLoss, Difficulty::Intermediate, &[Equipment::Dumbbells]);
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);
        let a = generate(&config, &p, 2, 3, &mut rng_a);
        let b = generate(&config, &p, 2, 3, &mut rng_b);
        assert_eq!(a, b);
    }
}
