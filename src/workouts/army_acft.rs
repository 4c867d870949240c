// ABOUTME: Army Combat Fitness Test preparation program with selectable event emphasis
// ABOUTME: Balanced, strength, and endurance variants share the same exercise libraries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Army ACFT Program
//!
//! Covers the six ACFT events: 3-rep-max deadlift, standing power throw,
//! hand-release push-ups, sprint-drag-carry, plank (or leg tuck), and the
//! 2-mile run. The profile's [`ArmyGoalFocus`] selects one of three six-day
//! cycles; all three end the week with a full test simulation. Deadlift
//! percentages and plank hold targets step up with the training phase.

use crate::models::{ArmyGoalFocus, Difficulty, Equipment, Profile, Workout};
use crate::workouts::{EquipmentLevel, TrainingPhase};

/// Buckets equipment for barbell-centric ACFT training.
///
/// A barbell with cable or machine access counts as a full gym; dumbbells,
/// bands, or a lone barbell allow limited substitutions.
#[must_use]
pub fn equipment_level(profile: &Profile) -> EquipmentLevel {
    let has = |e: Equipment| profile.equipment.contains(&e);
    if has(Equipment::Barbell) && (has(Equipment::Cable) || has(Equipment::Machine)) {
        EquipmentLevel::FullGym
    } else if has(Equipment::Dumbbells)
        || has(Equipment::ResistanceBands)
        || has(Equipment::Barbell)
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
    let day = (training_day.saturating_sub(1)) % 6;
    let difficulty = profile.difficulty;

    let (name, strength, cardio) = match profile.army_focus {
        ArmyGoalFocus::Balanced => balanced_day(day, difficulty, level, phase),
        ArmyGoalFocus::Strength => strength_day(day, difficulty, level, phase),
        ArmyGoalFocus::Endurance => endurance_day(day, difficulty, level, phase),
    };

    Workout {
        name: format!("{name} - Week {week}"),
        cardio,
        strength,
    }
}

type DayBlocks = (&'static str, Vec<String>, Vec<String>);

fn balanced_day(
    day: u32,
    difficulty: Difficulty,
    level: EquipmentLevel,
    phase: TrainingPhase,
) -> DayBlocks {
    match day {
        0 => (
            "Deadlift & Core Strength",
            deadlift_exercises(difficulty, level, phase, false),
            vec![format!("Plank Progressions - {}", plank_time(difficulty, phase))],
        ),
        1 => (
            "Upper Body Power & Push",
            push_up_variations(difficulty, level, false),
            vec!["10-15 min easy jog or row (recovery pace)".to_owned()],
        ),
        2 => (
            "Sprint-Drag-Carry Training",
            carry_exercises(difficulty, level),
            balanced_sprint_drills(difficulty),
        ),
        3 => (
            "Power Throw & Explosive Work",
            power_throw_exercises(difficulty, level),
            vec!["Dynamic warm-up drills - 10 minutes".to_owned()],
        ),
        4 => (
            "2-Mile Run Conditioning",
            vec!["Light core work - 3 sets planks".to_owned()],
            two_mile_run(difficulty, phase),
        ),
        _ => (
            "Full ACFT Simulation",
            simulation(),
            vec!["Complete 2-mile run at target pace".to_owned()],
        ),
    }
}

fn strength_day(
    day: u32,
    difficulty: Difficulty,
    level: EquipmentLevel,
    phase: TrainingPhase,
) -> DayBlocks {
    match day {
        0 => {
            let mut lifts = deadlift_exercises(difficulty, level, phase, false);
            lifts.extend(lower_accessories(level));
            ("Max Deadlift Development", lifts, Vec::new())
        }
        1 => {
            let mut lifts = power_throw_exercises(difficulty, level);
            lifts.extend(upper_accessories(level));
            (
                "Power Throw & Explosive Training",
                lifts,
                vec!["High-intensity sled pushes - 5 sets of 20 yards".to_owned()],
            )
        }
        2 => (
            "Push-Up Strength & Volume",
            push_up_variations(difficulty, level, true),
            vec![format!("Core work - {} total", plank_time(difficulty, phase))],
        ),
        3 => (
            "Sprint Power & Carries",
            carry_exercises(difficulty, level),
            vec!["Sprint intervals - 8-12 x 40 yards with full recovery".to_owned()],
        ),
        4 => {
            let mut lifts = olympic_lifts(difficulty, level);
            lifts.extend(carry_exercises(difficulty, level));
            ("Full Body Power", lifts, Vec::new())
        }
        _ => (
            "ACFT Event Practice",
            simulation(),
            vec!["2-mile run - moderate pace (not max effort)".to_owned()],
        ),
    }
}

fn endurance_day(
    day: u32,
    difficulty: Difficulty,
    level: EquipmentLevel,
    phase: TrainingPhase,
) -> DayBlocks {
    match day {
        0 => (
            "Endurance Base Run",
            vec![format!("Core stability - {}", plank_time(difficulty, phase))],
            vec![
                "Easy run - 3-5 miles at conversational pace".to_owned(),
                "Cool-down walk - 5 minutes".to_owned(),
            ],
        ),
        1 => (
            "Sprint-Drag-Carry Conditioning",
            carry_exercises(difficulty, level),
            endurance_sprint_circuit(difficulty),
        ),
        2 => (
            "Tempo Run & Strength",
            vec![
                "Push-ups - 3-4 sets to near failure".to_owned(),
                "Planks - 3 sets max hold".to_owned(),
            ],
            tempo_run(difficulty),
        ),
        3 => (
            "Interval Training",
            deadlift_exercises(difficulty, level, phase, true),
            vec![
                "Run intervals - 6-10 x 400m at 2-mile race pace".to_owned(),
                "Active recovery between sets".to_owned(),
            ],
        ),
        4 => (
            "Long Slow Distance",
            vec!["Bodyweight circuit - 20 minutes".to_owned()],
            vec![
                "Long run - 5-8 miles at easy pace".to_owned(),
                "Mobility work - 10 minutes".to_owned(),
            ],
        ),
        _ => (
            "ACFT Simulation",
            simulation(),
            vec!["2-mile run at target pace".to_owned()],
        ),
    }
}

fn deadlift_exercises(
    difficulty: Difficulty,
    level: EquipmentLevel,
    phase: TrainingPhase,
    light: bool,
) -> Vec<String> {
    let percent = match (phase, difficulty) {
        (TrainingPhase::Foundation, Difficulty::Beginner) => "50-60%",
        (TrainingPhase::Foundation, Difficulty::Intermediate)
        | (TrainingPhase::Development, Difficulty::Beginner) => "60-70%",
        (TrainingPhase::Foundation, Difficulty::Advanced)
        | (TrainingPhase::Peak, Difficulty::Beginner) => "70-75%",
        (TrainingPhase::Development, Difficulty::Intermediate) => "70-80%",
        (TrainingPhase::Development, Difficulty::Advanced)
        | (TrainingPhase::Peak, Difficulty::Intermediate) => "75-85%",
        (TrainingPhase::Peak, Difficulty::Advanced) => "85-90%",
    };
    let (sets, reps) = if light {
        ("3-4", "5-8")
    } else {
        match difficulty {
            Difficulty::Beginner => ("4-5", "8-10"),
            Difficulty::Intermediate => ("5-6", "5-8"),
            Difficulty::Advanced => ("6-8", "3-5"),
        }
    };
    match level {
        EquipmentLevel::FullGym => vec![
            format!("Conventional Deadlift - {sets} sets x {reps} reps @ {percent} 1RM"),
            "Romanian Deadlifts - 3 sets x 8-12 reps".to_owned(),
            "Barbell Hip Thrusts - 3 sets x 10-15 reps".to_owned(),
            "Hamstring Curls - 3 sets x 12-15 reps".to_owned(),
        ],
        EquipmentLevel::Limited => vec![
            format!("Dumbbell Deadlift - {sets} sets x {reps} reps (heavy DBs)"),
            "Single-leg Romanian DL - 3 sets x 10 each leg".to_owned(),
            "Goblet Squats - 3 sets x 12-15 reps".to_owned(),
            "Glute Bridges - 3 sets x 15-20 reps".to_owned(),
        ],
        EquipmentLevel::Minimal => vec![
            format!("Single-leg Deadlift - {sets} sets x {reps} each leg"),
            "Nordic Hamstring Curls - 3 sets x 5-8 reps".to_owned(),
            "Jump Squats - 3 sets x 10-12 reps".to_owned(),
            "Glute Bridges - 4 sets x 20 reps".to_owned(),
        ],
    }
}

fn push_up_variations(difficulty: Difficulty, level: EquipmentLevel, volume_day: bool) -> Vec<String> {
    let base: f64 = match difficulty {
        Difficulty::Beginner => 4.0,
        Difficulty::Intermediate => 5.0,
        Difficulty::Advanced => 6.0,
    };
    let sets = (base * if volume_day { 1.5 } else { 1.0 }).round() as i64;
    match level {
        EquipmentLevel::FullGym => {
            let bench_reps = match difficulty {
                Difficulty::Beginner => "8-10",
                Difficulty::Intermediate => "6-8",
                Difficulty::Advanced => "5-6",
            };
            vec![
                format!("Bench Press - {sets} sets x {bench_reps} reps"),
                "Incline Dumbbell Press - 3 sets x 10-12 reps".to_owned(),
                "Push-ups - 3-4 sets x max reps (2 min rest)".to_owned(),
                "Dips - 3 sets x 8-12 reps".to_owned(),
                "Tricep Pushdowns - 3 sets x 12-15 reps".to_owned(),
            ]
        }
        EquipmentLevel::Limited => vec![
            format!("Dumbbell Chest Press - {sets} sets x 10-12 reps"),
            "Push-ups - 4-5 sets x max reps".to_owned(),
            "Dumbbell Flyes - 3 sets x 12-15 reps".to_owned(),
            "Diamond Push-ups - 3 sets x max reps".to_owned(),
        ],
        EquipmentLevel::Minimal => vec![
            format!("Standard Push-ups - {sets} sets x max reps (2 min rest)"),
            "Wide-grip Push-ups - 3 sets x max reps".to_owned(),
            "Diamond Push-ups - 3 sets x max reps".to_owned(),
            "Decline Push-ups (feet elevated) - 3 sets x max reps".to_owned(),
            "Plyometric Push-ups - 3 sets x 8-10 reps".to_owned(),
        ],
    }
}

fn power_throw_exercises(difficulty: Difficulty, level: EquipmentLevel) -> Vec<String> {
    let throw_sets = match difficulty {
        Difficulty::Beginner => 3,
        Difficulty::Intermediate => 4,
        Difficulty::Advanced => 5,
    };
    match level {
        EquipmentLevel::FullGym => vec![
            format!("Medicine Ball Overhead Throw - {throw_sets} sets x 5-8 throws"),
            "Medicine Ball Slam - 3 sets x 10 reps".to_owned(),
            "Seated Box Jumps - 3 sets x 5 reps".to_owned(),
            "Cable Wood Chops - 3 sets x 10 each side".to_owned(),
            "Landmine Press - 3 sets x 8-10 reps".to_owned(),
        ],
        EquipmentLevel::Limited => vec![
            format!("Medicine Ball Overhead Throw - {throw_sets} sets x 5-8 throws"),
            "Medicine Ball Slam - 3 sets x 10 reps".to_owned(),
            "Dumbbell Push Press - 3 sets x 8-10 reps".to_owned(),
            "Rotational Med Ball Throws - 3 sets x 8 each side".to_owned(),
        ],
        EquipmentLevel::Minimal => vec![
            "Explosive Push-ups - 4 sets x 6-8 reps".to_owned(),
            "Jump Squats - 4 sets x 8-10 reps".to_owned(),
            "Burpee Broad Jumps - 3 sets x 5-8 reps".to_owned(),
            "Plyo Push-ups - 3 sets x 6-8 reps".to_owned(),
        ],
    }
}

fn carry_exercises(difficulty: Difficulty, level: EquipmentLevel) -> Vec<String> {
    let distance = match difficulty {
        Difficulty::Beginner => "25 yards",
        Difficulty::Intermediate => "40 yards",
        Difficulty::Advanced => "50 yards",
    };
    match level {
        EquipmentLevel::FullGym => vec![
            format!("Sled Push - 5-8 sets x {distance}"),
            format!("Farmer's Carry (heavy) - 4-6 sets x {distance}"),
            format!("Sandbag Carry - 4 sets x {distance}"),
            format!("Kettlebell Rack Carry - 3 sets x {distance} each side"),
            "Barbell Walking Lunges - 3 sets x 20 steps".to_owned(),
        ],
        EquipmentLevel::Limited => vec![
            format!("Dumbbell Farmer's Carry - 5-6 sets x {distance}"),
            format!("Sandbag/Heavy Object Carry - 4 sets x {distance}"),
            format!("Overhead Carry - 3 sets x {distance}"),
            format!("Suitcase Carry - 3 sets x {distance} each side"),
        ],
        EquipmentLevel::Minimal => vec![
            format!("Bear Crawl - 5 sets x {distance}"),
            "Broad Jumps - 5 sets x 10 jumps".to_owned(),
            format!("Fireman Carry (partner or heavy pack) - 4 sets x {distance}"),
            format!("Sprint-Backpedal Drills - 6 sets x {distance}"),
        ],
    }
}

fn balanced_sprint_drills(difficulty: Difficulty) -> Vec<String> {
    let sprints = match difficulty {
        Difficulty::Beginner => "6-8",
        Difficulty::Intermediate => "8-10",
        Difficulty::Advanced => "10-12",
    };
    vec![
        format!("Sprint intervals - {sprints} x 40 yards @ 90% effort"),
        "Lateral shuffle drills - 4 sets x 20 yards each direction".to_owned(),
        "Backpedal sprints - 4 sets x 20 yards".to_owned(),
        "Pro agility shuttle - 4-6 reps".to_owned(),
    ]
}

fn endurance_sprint_circuit(difficulty: Difficulty) -> Vec<String> {
    let rounds = match difficulty {
        Difficulty::Beginner => "4-5",
        Difficulty::Intermediate => "5-6",
        Difficulty::Advanced => "6-8",
    };
    vec![
        format!("Sprint-Drag-Carry Circuit - {rounds} rounds:"),
        "  Sprint 50 yards".to_owned(),
        "  Drag sled/partner 50 yards".to_owned(),
        "  Lateral shuffle 50 yards".to_owned(),
        "  Carry kettlebells 50 yards".to_owned(),
        "  Sprint 50 yards".to_owned(),
        "Rest 2-3 minutes between rounds".to_owned(),
    ]
}

fn two_mile_run(difficulty: Difficulty, phase: TrainingPhase) -> Vec<String> {
    match phase {
        TrainingPhase::Foundation => {
            let minutes = match difficulty {
                Difficulty::Beginner => "15-20",
                Difficulty::Intermediate => "20-25",
                Difficulty::Advanced => "25-30",
            };
            vec![
                format!("Easy run - {minutes} minutes"),
                "Focus on building aerobic base".to_owned(),
                "Keep heart rate in Zone 2 (conversational pace)".to_owned(),
            ]
        }
        TrainingPhase::Development => {
            let miles = match difficulty {
                Difficulty::Beginner => "1-1.5",
                Difficulty::Intermediate => "1.5-2",
                Difficulty::Advanced => "2-2.5",
            };
            vec![
                format!("Tempo run - {miles} miles at threshold pace"),
                "Warm-up 10 minutes easy".to_owned(),
                "Cool-down 5-10 minutes easy".to_owned(),
            ]
        }
        TrainingPhase::Peak => vec![
            "Time trial - 2 miles at race pace".to_owned(),
            "Warm-up 15 minutes (dynamic drills + strides)".to_owned(),
            "Cool-down 10 minutes easy".to_owned(),
        ],
    }
}

fn tempo_run(difficulty: Difficulty) -> Vec<String> {
    let minutes = match difficulty {
        Difficulty::Beginner => 15,
        Difficulty::Intermediate => 20,
        Difficulty::Advanced => 25,
    };
    vec![
        "Warm-up - 10 minutes easy jog".to_owned(),
        format!("Tempo run - {minutes} minutes at comfortably hard pace"),
        "Cool-down - 5-10 minutes easy".to_owned(),
        "Stretching routine - 10 minutes".to_owned(),
    ]
}

fn lower_accessories(level: EquipmentLevel) -> Vec<String> {
    if level == EquipmentLevel::FullGym {
        vec![
            "Front Squats - 3 sets x 8-10 reps".to_owned(),
            "Bulgarian Split Squats - 3 sets x 10 each leg".to_owned(),
            "Leg Press - 3 sets x 12-15 reps".to_owned(),
        ]
    } else {
        vec![
            "Goblet Squats - 3 sets x 12-15 reps".to_owned(),
            "Lunges - 3 sets x 10 each leg".to_owned(),
            "Single-leg RDL - 3 sets x 10 each leg".to_owned(),
        ]
    }
}

fn upper_accessories(level: EquipmentLevel) -> Vec<String> {
    if level == EquipmentLevel::FullGym {
        vec![
            "Overhead Press - 3 sets x 8-10 reps".to_owned(),
            "Bent-over Rows - 3 sets x 10-12 reps".to_owned(),
            "Cable Flyes - 3 sets x 12-15 reps".to_owned(),
        ]
    } else {
        vec![
            "Dumbbell Shoulder Press - 3 sets x 10-12 reps".to_owned(),
            "Bent-over DB Rows - 3 sets x 12 reps".to_owned(),
            "Push-up variations - 3 sets x max reps".to_owned(),
        ]
    }
}

fn olympic_lifts(difficulty: Difficulty, level: EquipmentLevel) -> Vec<String> {
    if level == EquipmentLevel::FullGym {
        let sets = match difficulty {
            Difficulty::Beginner => 3,
            Difficulty::Intermediate => 4,
            Difficulty::Advanced => 5,
        };
        vec![
            format!("Power Clean - {sets} sets x 3-5 reps"),
            format!("Push Jerk - {sets} sets x 3-5 reps"),
            "Hang Snatch - 3 sets x 3 reps".to_owned(),
        ]
    } else {
        vec![
            "Dumbbell Clean and Press - 4 sets x 6-8 reps".to_owned(),
            "Dumbbell Snatch - 3 sets x 5 each arm".to_owned(),
            "Jump Squats - 3 sets x 8-10 reps".to_owned(),
        ]
    }
}

fn plank_time(difficulty: Difficulty, phase: TrainingPhase) -> &'static str {
    match (phase, difficulty) {
        (TrainingPhase::Foundation, Difficulty::Beginner) => "1-2 min holds",
        (TrainingPhase::Foundation, Difficulty::Intermediate)
        | (TrainingPhase::Development, Difficulty::Beginner) => "2-3 min holds",
        (TrainingPhase::Foundation, Difficulty::Advanced)
        | (TrainingPhase::Development, Difficulty::Intermediate)
        | (TrainingPhase::Peak, Difficulty::Beginner) => "3-4 min holds",
        (TrainingPhase::Development, Difficulty::Advanced)
        | (TrainingPhase::Peak, Difficulty::Intermediate) => "4-5 min holds",
        (TrainingPhase::Peak, Difficulty::Advanced) => "5+ min holds",
    }
}

fn simulation() -> Vec<String> {
    vec![
        "3-Rep Max Deadlift (work up to heavy triple)".to_owned(),
        "Standing Power Throw - 3 attempts for max distance".to_owned(),
        "Hand-Release Push-ups - 2 minutes max reps".to_owned(),
        "Sprint-Drag-Carry - full event simulation".to_owned(),
        "Leg Tuck or Plank - choose your event (max reps or max time)".to_owned(),
        "2-Mile Run - target race pace".to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(focus: ArmyGoalFocus, difficulty: Difficulty, equipment: &[Equipment]) -> Profile {
        Profile {
            army_focus: focus,
            difficulty,
            equipment: equipment.iter().copied().collect(),
            ..Profile::default()
        }
    }

    #[test]
    fn equipment_bucketing_rewards_barbell_access() {
        let full = profile(ArmyGoalFocus::Balanced, Difficulty::Beginner, &[Equipment::Barbell, Equipment::Machine]);
        assert_eq!(equipment_level(&full), EquipmentLevel::FullGym);
        let barbell_only = profile(ArmyGoalFocus::Balanced, Difficulty::Beginner, &[Equipment::Barbell]);
        assert_eq!(equipment_level(&barbell_only), EquipmentLevel::Limited);
        let pull_up_bar = profile(ArmyGoalFocus::Balanced, Difficulty::Beginner, &[Equipment::PullUpBar]);
        assert_eq!(equipment_level(&pull_up_bar), EquipmentLevel::Minimal);
    }

    #[test]
    fn focus_selects_distinct_cycles() {
        let balanced = generate(&profile(ArmyGoalFocus::Balanced, Difficulty::Beginner, &[]), 1, 12, 1);
        let strength = generate(&profile(ArmyGoalFocus::Strength, Difficulty::Beginner, &[]), 1, 12, 1);
        let endurance = generate(&profile(ArmyGoalFocus::Endurance, Difficulty::Beginner, &[]), 1, 12, 1);
        assert!(balanced.name.starts_with("Deadlift & Core Strength"));
        assert!(strength.name.starts_with("Max Deadlift Development"));
        assert!(endurance.name.starts_with("Endurance Base Run"));
    }

    #[test]
    fn every_focus_ends_the_week_with_a_simulation() {
        for focus in [ArmyGoalFocus::Balanced, ArmyGoalFocus::Strength, ArmyGoalFocus::Endurance] {
            let workout = generate(&profile(focus, Difficulty::Intermediate, &[]), 4, 12, 6);
            assert!(
                workout.strength.iter().any(|l| l.contains("3-Rep Max Deadlift")),
                "{focus:?} day 6 missing simulation"
            );
        }
    }

    #[test]
    fn deadlift_percentages_step_with_phase() {
        let p = profile(ArmyGoalFocus::Balanced, Difficulty::Advanced, &[Equipment::Barbell, Equipment::Cable]);
        // 12-week plan: week 1 foundation, week 11 peak
        let foundation = generate(&p, 1, 12, 1);
        let peak = generate(&p, 11, 12, 1);
        assert!(foundation.strength[0].contains("70-75% 1RM"));
        assert!(peak.strength[0].contains("85-90% 1RM"));
    }

    #[test]
    fn volume_day_increases_push_sets() {
        let p = profile(ArmyGoalFocus::Strength, Difficulty::Intermediate, &[]);
        // 5 base sets * 1.5 rounds to 8
        let workout = generate(&p, 1, 12, 3);
        assert!(workout.strength[0].contains("8 sets"), "{}", workout.strength[0]);
    }

    #[test]
    fn fixed_program_is_deterministic() {
        let p = profile(ArmyGoalFocus::Endurance, Difficulty::Advanced, &[Equipment::Dumbbells]);
        assert_eq!(generate(&p, 5, 12, 2), generate(&p, 5, 12, 2));
    }
}
