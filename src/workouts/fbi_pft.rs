// ABOUTME: FBI Physical Fitness Test preparation program (2025 event format)
// ABOUTME: Six-day cycle targeting pull-ups, 300m sprint, push-ups, and the 1.5-mile run
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # FBI PFT Program
//!
//! Prepares for the four 2025-format events: pull-ups (untimed), 300-meter
//! sprint, push-ups (untimed), and the 1.5-mile run. Days cycle through
//! event-specific strength and track work, a combined conditioning day, and
//! a weekly full test simulation. Sprint volumes and run prescriptions step
//! up with the training phase; set counts step up with difficulty.

use crate::models::{Difficulty, Equipment, Profile, Workout};
use crate::workouts::{EquipmentLevel, TrainingPhase};

/// Buckets equipment for pull-up centric training.
///
/// A pull-up bar plus any loadable weight counts as a full gym; a bar,
/// dumbbells, or bands alone still allow assisted progressions.
#[must_use]
pub fn equipment_level(profile: &Profile) -> EquipmentLevel {
    let has = |e: Equipment| profile.equipment.contains(&e);
    if has(Equipment::PullUpBar) && (has(Equipment::Barbell) || has(Equipment::Dumbbells)) {
        EquipmentLevel::FullGym
    } else if has(Equipment::PullUpBar)
        || has(Equipment::Dumbbells)
        || has(Equipment::ResistanceBands)
    {
        EquipmentLevel::Limited
    } else {
        EquipmentLevel::Minimal
    }
}

/// Workout for a 1-based week within a `total_weeks` plan.
///
/// `total_weeks` is the plan's normalized length, which may differ from the
/// raw `profile.weeks`; periodization follows the weeks actually generated.
#[must_use]
pub fn generate(profile: &Profile, week: u32, total_weeks: u32, training_day: u32) -> Workout {
    let phase = TrainingPhase::for_week(week, total_weeks);
    let level = equipment_level(profile);
    let difficulty = profile.difficulty;

    let (name, strength, cardio) = match (training_day.saturating_sub(1)) % 6 {
        0 => (
            "Pull-Up Strength Development",
            pull_up_exercises(difficulty, level, false),
            vec!["Light jog - 10-15 minutes (recovery)".to_owned()],
        ),
        1 => (
            "300m Sprint Training",
            vec![
                "Core stability - 3 sets planks 30-60s".to_owned(),
                "Leg swings - 2 sets x 10 each direction".to_owned(),
            ],
            sprint_workout(difficulty, phase),
        ),
        2 => (
            "Push-Up Volume & Endurance",
            push_up_exercises(difficulty, level, false),
            vec!["Easy run - 2-3 miles at conversational pace".to_owned()],
        ),
        3 => (
            "1.5-Mile Run Development",
            vec![
                "Light upper body - 2 sets x 10 push-ups".to_owned(),
                "Core work - 2 sets x 20 crunches".to_owned(),
            ],
            run_workout(difficulty, phase),
        ),
        4 => {
            let mut strength = pull_up_exercises(difficulty, level, true);
            strength.extend(push_up_exercises(difficulty, level, true));
            (
                "Full Body Conditioning",
                strength,
                vec!["Tempo run - 20-30 minutes at moderate-hard pace".to_owned()],
            )
        }
        _ => ("FBI PFT Full Simulation", simulation(difficulty), Vec::new()),
    };

    Workout {
        name: format!("{name} - Week {week}"),
        cardio,
        strength,
    }
}

const fn working_sets(difficulty: Difficulty, light: bool) -> u32 {
    if light {
        3
    } else {
        match difficulty {
            Difficulty::Beginner => 4,
            Difficulty::Intermediate => 5,
            Difficulty::Advanced => 6,
        }
    }
}

fn pull_up_exercises(difficulty: Difficulty, level: EquipmentLevel, light: bool) -> Vec<String> {
    let sets = working_sets(difficulty, light);
    match level {
        EquipmentLevel::FullGym | EquipmentLevel::Limited => {
            let (pulldown, row) = if level == EquipmentLevel::FullGym {
                ("Lat Pulldowns", "Barbell Rows")
            } else {
                ("Band-assisted Pull-ups", "Inverted Rows")
            };
            vec![
                format!("Pull-ups (strict form) - {sets} sets x max reps (2-3 min rest)"),
                "Negative Pull-ups (slow descent) - 3 sets x 3-5 reps".to_owned(),
                format!("{pulldown} - 3 sets x 8-12 reps"),
                format!("{row} - 3 sets x 10-12 reps"),
                "Dead Hangs - 3 sets x max time (build grip strength)".to_owned(),
                "Scapular Pull-ups - 2 sets x 10 reps (control at top)".to_owned(),
            ]
        }
        EquipmentLevel::Minimal => vec![
            format!("Assisted Pull-ups (chair/partner) - {sets} sets x max reps"),
            "Negative Pull-ups (jump up, slow down) - 4 sets x 5 reps".to_owned(),
            "Door Frame Rows or Table Rows - 4 sets x 12-15 reps".to_owned(),
            "Flexed Arm Hang - 3 sets x max time".to_owned(),
            "Towel Grip Rows - 3 sets x 10 reps (use doorframe)".to_owned(),
            "Band Pull-aparts - 3 sets x 15 reps (if bands available)".to_owned(),
        ],
    }
}

fn push_up_exercises(difficulty: Difficulty, level: EquipmentLevel, light: bool) -> Vec<String> {
    let sets = working_sets(difficulty, light);
    let mut exercises = vec![
        format!("Standard Push-ups - {sets} sets x max reps (2 min rest)"),
        "Wide-grip Push-ups - 3 sets x max reps".to_owned(),
        "Diamond Push-ups - 3 sets x max reps".to_owned(),
        "Decline Push-ups (feet elevated) - 3 sets x 15-20 reps".to_owned(),
        "Push-up Hold (top position) - 3 sets x 30-45s".to_owned(),
        "Shoulder Taps (in plank) - 3 sets x 20 total".to_owned(),
    ];
    match level {
        EquipmentLevel::FullGym => exercises.extend([
            "Bench Press - 3 sets x 8-10 reps".to_owned(),
            "Dumbbell Flyes - 3 sets x 12 reps".to_owned(),
            "Tricep Dips - 3 sets x 12-15 reps".to_owned(),
        ]),
        EquipmentLevel::Limited => exercises.extend([
            "Dumbbell Chest Press - 3 sets x 10-12 reps".to_owned(),
            "Tricep Extensions - 3 sets x 12 reps".to_owned(),
        ]),
        EquipmentLevel::Minimal => {}
    }
    exercises
}

fn sprint_workout(difficulty: Difficulty, phase: TrainingPhase) -> Vec<String> {
    let intervals = match (phase, difficulty) {
        (TrainingPhase::Foundation, Difficulty::Beginner) => "6-8",
        (TrainingPhase::Foundation, Difficulty::Intermediate)
        | (TrainingPhase::Development, Difficulty::Beginner) => "8-10",
        (TrainingPhase::Foundation, Difficulty::Advanced)
        | (TrainingPhase::Development, Difficulty::Intermediate)
        | (TrainingPhase::Peak, Difficulty::Beginner) => "10-12",
        (TrainingPhase::Development, Difficulty::Advanced)
        | (TrainingPhase::Peak, Difficulty::Intermediate) => "12-15",
        (TrainingPhase::Peak, Difficulty::Advanced) => "15-18",
    };
    let pace = match difficulty {
        Difficulty::Beginner => "90-95% effort",
        Difficulty::Intermediate => "95% effort",
        Difficulty::Advanced => "95-100% effort (race pace)",
    };
    match phase {
        TrainingPhase::Foundation => vec![
            "Dynamic warm-up - 10 minutes (leg swings, high knees, butt kicks)".to_owned(),
            format!("{intervals} x 100m sprints @ {pace} (60-90s rest)"),
            "4 x 50m acceleration drills".to_owned(),
            "Cool-down jog - 5 minutes".to_owned(),
        ],
        TrainingPhase::Development => vec![
            "Dynamic warm-up - 10 minutes".to_owned(),
            format!("{intervals} x 150m sprints @ {pace} (2 min rest)"),
            "4 x 300m @ 90-95% (3 min rest) - practice pacing".to_owned(),
            "Cool-down jog - 5 minutes".to_owned(),
        ],
        TrainingPhase::Peak => vec![
            "Dynamic warm-up - 15 minutes (include strides)".to_owned(),
            format!("{intervals} x 200m sprints @ {pace} (2-3 min rest)"),
            "2-3 x 300m time trials (full recovery between)".to_owned(),
            "Cool-down jog - 10 minutes".to_owned(),
        ],
    }
}

fn run_workout(difficulty: Difficulty, phase: TrainingPhase) -> Vec<String> {
    match phase {
        TrainingPhase::Foundation => {
            let miles = match difficulty {
                Difficulty::Beginner => "2-3",
                Difficulty::Intermediate => "3-4",
                Difficulty::Advanced => "4-5",
            };
            vec![
                "Warm-up - 10 minutes easy jog".to_owned(),
                format!("Easy run - {miles} miles at conversational pace"),
                "Focus on building aerobic base".to_owned(),
                "Cool-down - 5 minutes walk".to_owned(),
                "Stretching routine - 10 minutes".to_owned(),
            ]
        }
        TrainingPhase::Development => {
            let miles = match difficulty {
                Difficulty::Beginner => "1-1.5",
                Difficulty::Intermediate => "1.5-2",
                Difficulty::Advanced => "2-2.5",
            };
            vec![
                "Warm-up - 10 minutes easy + 4 x 100m strides".to_owned(),
                format!("Tempo run - {miles} miles at threshold pace"),
                "Run at comfortably hard effort (can speak short sentences)".to_owned(),
                "Cool-down - 10 minutes easy".to_owned(),
                "Dynamic stretching - 10 minutes".to_owned(),
            ]
        }
        TrainingPhase::Peak => {
            let target = match difficulty {
                Difficulty::Beginner => "12:00-11:30 (male) or 14:00-13:30 (female)",
                Difficulty::Intermediate => "10:30-10:00 (male) or 12:30-12:00 (female)",
                Difficulty::Advanced => "9:30-9:00 (male) or 11:30-11:00 (female)",
            };
            vec![
                "Warm-up - 15 minutes easy + dynamic drills + 6 x 100m strides".to_owned(),
                "1.5-mile time trial at race pace".to_owned(),
                format!("Target: {target}"),
                "Focus on even pacing - negative split if possible".to_owned(),
                "Cool-down - 10-15 minutes easy".to_owned(),
                "Foam rolling and stretching - 15 minutes".to_owned(),
            ]
        }
    }
}

fn simulation(difficulty: Difficulty) -> Vec<String> {
    let (pull_ups, sprint, push_ups, run) = match difficulty {
        Difficulty::Beginner => (
            "6-8 (male) / 3-4 (female)",
            "<52s (male) / <65s (female)",
            "40+ (male) / 22+ (female)",
            "<11:30 (male) / <13:30 (female)",
        ),
        Difficulty::Intermediate => (
            "10-12 (male) / 5-6 (female)",
            "<46s (male) / <58s (female)",
            "50+ (male) / 30+ (female)",
            "<10:00 (male) / <12:00 (female)",
        ),
        Difficulty::Advanced => (
            "15+ (male) / 8+ (female)",
            "<43s (male) / <53s (female)",
            "65+ (male) / 40+ (female)",
            "<9:00 (male) / <11:00 (female)",
        ),
    };
    vec![
        "FBI PFT simulation - 2025 format:".to_owned(),
        "1. Pull-ups (untimed, continuous motion) - max reps without stopping".to_owned(),
        format!("   Target: {pull_ups}, then 5 minutes rest"),
        "2. 300-meter sprint - all-out effort on track or measured course".to_owned(),
        format!("   Target: {sprint}, then 5 minutes rest"),
        "3. Push-ups (untimed, continuous motion) - max reps in proper form".to_owned(),
        format!("   Target: {push_ups}, then 5 minutes rest"),
        "4. 1.5-mile run - timed run for best effort".to_owned(),
        format!("   Target: {run}"),
        "Scoring: need 10+ total points (minimum 1 point per event)".to_owned(),
        "Record all results and compare to official FBI scoring tables".to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn profile(difficulty: Difficulty, equipment: &[Equipment]) -> Profile {
        Profile {
            difficulty,
            equipment: equipment.iter().copied().collect(),
            ..Profile::default()
        }
    }

    #[test]
    fn equipment_bucketing_matches_program_needs() {
        let full = profile(Difficulty::Beginner, &[Equipment::PullUpBar, Equipment::Dumbbells]);
        assert_eq!(equipment_level(&full), EquipmentLevel::FullGym);
        let bar_only = profile(Difficulty::Beginner, &[Equipment::PullUpBar]);
        assert_eq!(equipment_level(&bar_only), EquipmentLevel::Limited);
        let bands = profile(Difficulty::Beginner, &[Equipment::ResistanceBands]);
        assert_eq!(equipment_level(&bands), EquipmentLevel::Limited);
        let nothing = Profile {
            equipment: BTreeSet::new(),
            ..Profile::default()
        };
        assert_eq!(equipment_level(&nothing), EquipmentLevel::Minimal);
        // A barbell without a pull-up bar is not a full gym here
        let barbell = profile(Difficulty::Beginner, &[Equipment::Barbell]);
        assert_eq!(equipment_level(&barbell), EquipmentLevel::Minimal);
    }

    #[test]
    fn six_day_cycle_wraps() {
        let p = profile(Difficulty::Intermediate, &[]);
        let day6 = generate(&p, 2, 12, 6);
        let day12 = generate(&p, 2, 12, 12);
        assert!(day6.name.starts_with("FBI PFT Full Simulation"));
        assert_eq!(day6.name, day12.name);
        assert!(day6.cardio.is_empty());
    }

    #[test]
    fn sets_scale_with_difficulty() {
        let beginner = generate(&profile(Difficulty::Beginner, &[Equipment::PullUpBar]), 1, 12, 1);
        let advanced = generate(&profile(Difficulty::Advanced, &[Equipment::PullUpBar]), 1, 12, 1);
        assert!(beginner.strength[0].contains("4 sets"));
        assert!(advanced.strength[0].contains("6 sets"));
    }

    #[test]
    fn sprint_volume_steps_up_by_phase() {
        let p = profile(Difficulty::Intermediate, &[]);
        // 12-week plan: week 2 foundation, week 6 development, week 10 peak
        let foundation = generate(&p, 2, 12, 2);
        let peak = generate(&p, 10, 12, 2);
        assert!(foundation.cardio.iter().any(|l| l.contains("8-10 x 100m")));
        assert!(peak.cardio.iter().any(|l| l.contains("12-15 x 200m")));
    }

    #[test]
    fn periodization_follows_the_plan_length_not_the_raw_profile() {
        // A clamped plan passes its actual length in; the profile's raw
        // week request must not stretch the phases.
        let p = Profile {
            weeks: 99,
            ..profile(Difficulty::Intermediate, &[])
        };
        let final_week = generate(&p, 52, 52, 2);
        assert!(
            final_week.cardio.iter().any(|l| l.contains("12-15 x 200m")),
            "week 52 of 52 should run peak-phase intervals"
        );
    }

    #[test]
    fn conditioning_day_combines_both_libraries() {
        let p = profile(Difficulty::Beginner, &[]);
        let workout = generate(&p, 1, 12, 5);
        assert!(workout.strength.iter().any(|l| l.contains("Assisted Pull-ups")));
        assert!(workout.strength.iter().any(|l| l.contains("Standard Push-ups")));
        // Light version uses 3 sets for the main movements
        assert!(workout.strength[0].contains("3 sets"));
    }
}
