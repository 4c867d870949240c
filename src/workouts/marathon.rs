// ABOUTME: Marathon training program with progressive weekly mileage
// ABOUTME: Six-day cycle: easy, strength/core, tempo, speed-or-cross-train, long, recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Marathon Program
//!
//! Weekly mileage grows linearly from a level-based starting point; the
//! week's runs take fixed fractions of that mileage (long run 40/35/30% by
//! level, tempo 20%, easy 25%, recovery a flat 3 miles). Speed work appears
//! for advanced runners from week one and for everyone after week eight;
//! earlier weeks substitute low-impact cross-training.

use crate::models::{Difficulty, Gender, Profile, Workout};

/// Mileage variables for one training week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekMileage {
    /// Total planned miles for the week
    pub weekly: f64,
    /// Long run distance
    pub long_run: i64,
    /// Tempo run distance
    pub tempo_run: i64,
    /// Easy run distance
    pub easy_run: i64,
    /// Recovery run distance, always 3
    pub recovery_run: i64,
    /// Whether this week includes interval work
    pub has_speed_work: bool,
}

/// Mileage plan for a 1-based week at a difficulty level
#[must_use]
pub fn week_mileage(difficulty: Difficulty, week: u32) -> WeekMileage {
    let (base, increase, long_pct) = match difficulty {
        Difficulty::Beginner => (15.0, 1.5, 0.4),
        Difficulty::Intermediate => (25.0, 1.5, 0.35),
        Difficulty::Advanced => (35.0, 2.5, 0.3),
    };
    let weekly = f64::from(week).mul_add(increase, base);
    WeekMileage {
        weekly,
        long_run: (weekly * long_pct).round() as i64,
        tempo_run: (weekly * 0.2).round() as i64,
        easy_run: (weekly * 0.25).round() as i64,
        recovery_run: 3,
        has_speed_work: difficulty == Difficulty::Advanced || week > 8,
    }
}

/// Workout for a 1-based week and training-day counter
#[must_use]
pub fn generate(profile: &Profile, week: u32, training_day: u32) -> Workout {
    let mileage = week_mileage(profile.difficulty, week);
    let level = profile.difficulty;

    let (name, cardio, strength) = match (training_day.saturating_sub(1)) % 6 {
        0 => (
            "Easy Run",
            easy_run(mileage.easy_run, level),
            vec!["Light stretching - 10 minutes".to_owned()],
        ),
        1 => (
            "Strength & Core Training",
            vec!["Optional: 20-30 min easy bike or swim (cross-training)".to_owned()],
            strength_core(level),
        ),
        2 => (
            "Tempo Run",
            tempo_run(mileage.tempo_run, level),
            vec![
                "Post-run stretching - 10 minutes".to_owned(),
                "Core activation: plank hold - 2 sets x 30-45s".to_owned(),
            ],
        ),
        3 => {
            if mileage.has_speed_work {
                (
                    "Speed Work & Intervals",
                    speed_work(level, week, profile.gender),
                    vec![
                        "Dynamic stretching - 10 minutes".to_owned(),
                        "Leg swings - 2 sets x 10 each".to_owned(),
                    ],
                )
            } else {
                ("Cross Training", cross_training(level), Vec::new())
            }
        }
        4 => (
            "Long Run",
            long_run(mileage.long_run, level, week),
            vec![
                "Post-run recovery protocol:".to_owned(),
                "  Walk 5-10 minutes".to_owned(),
                "  Static stretching - 15 minutes".to_owned(),
                "  Foam rolling - 10 minutes".to_owned(),
            ],
        ),
        _ => (
            "Recovery Run",
            recovery_run(mileage.recovery_run, level),
            vec!["Yoga or light stretching - 20-30 minutes".to_owned()],
        ),
    };

    Workout {
        name: format!("{name} - Week {week}"),
        cardio,
        strength,
    }
}

const fn km(miles: i64) -> i64 {
    // Display-only conversion, matches the published plan tables
    (miles * 16) / 10
}

fn easy_run(miles: i64, level: Difficulty) -> Vec<String> {
    let (pace, km_pace) = match level {
        Difficulty::Beginner => ("10:00-11:00/mi", "6:13-6:50/km"),
        Difficulty::Intermediate => ("9:00-10:00/mi", "5:35-6:13/km"),
        Difficulty::Advanced => ("8:00-9:00/mi", "4:58-5:35/km"),
    };
    vec![
        format!("Easy aerobic run - {miles} miles ({} km)", km(miles)),
        format!("Target pace: {pace} ({km_pace})"),
        "Effort: Conversational pace - should be able to speak in full sentences".to_owned(),
        "Focus: Building aerobic base and endurance".to_owned(),
        "Warm-up: 5-10 min easy jog".to_owned(),
        "Cool-down: 5 min walk".to_owned(),
    ]
}

fn strength_core(level: Difficulty) -> Vec<String> {
    let sets = match level {
        Difficulty::Beginner => "2-3",
        Difficulty::Intermediate => "3",
        Difficulty::Advanced => "3-4",
    };
    let mut lines = vec![
        "Lower body strength:".to_owned(),
        format!("  Single-leg squats - {sets} sets x 10 each leg"),
        format!("  Walking lunges - {sets} sets x 12 each leg"),
        format!("  Romanian deadlifts - {sets} sets x 12 reps"),
        format!("  Calf raises - {sets} sets x 15-20 reps"),
        format!("  Glute bridges - {sets} sets x 15 reps"),
        "Core circuit:".to_owned(),
        format!("  Plank hold - {sets} sets x 45-60s"),
        format!("  Side planks - {sets} sets x 30-45s each side"),
        format!("  Dead bugs - {sets} sets x 12 each side"),
        format!("  Bird dogs - {sets} sets x 10 each side"),
        format!("  Russian twists - {sets} sets x 20 total"),
    ];
    if level == Difficulty::Advanced {
        lines.extend([
            "Plyometrics (skip if fatigued):".to_owned(),
            "  Box jumps - 3 sets x 8 reps".to_owned(),
            "  Single-leg hops - 3 sets x 10 each leg".to_owned(),
        ]);
    }
    lines
}

fn tempo_run(miles: i64, level: Difficulty) -> Vec<String> {
    let (pace, km_pace) = match level {
        Difficulty::Beginner => ("9:00-9:30/mi", "5:35-5:54/km"),
        Difficulty::Intermediate => ("8:00-8:30/mi", "4:58-5:17/km"),
        Difficulty::Advanced => ("7:15-7:45/mi", "4:30-4:49/km"),
    };
    vec![
        "Warm-up: 10-15 min easy jog + dynamic stretches".to_owned(),
        format!("Tempo run - {miles} miles ({} km)", km(miles)),
        format!("Target pace: {pace} ({km_pace})"),
        "Effort: 80-85% max HR - comfortably hard".to_owned(),
        "Should be able to speak short phrases but not full sentences".to_owned(),
        "Cool-down: 10 min easy jog".to_owned(),
    ]
}

fn speed_work(level: Difficulty, week: u32, gender: Gender) -> Vec<String> {
    match level {
        Difficulty::Beginner => vec![
            "Warm-up: 15 min easy jog + strides (4 x 100m)".to_owned(),
            "Interval workout:".to_owned(),
            "  6 x 400m @ 5K pace (90s recovery jog between)".to_owned(),
            "  Focus on consistent splits".to_owned(),
            "Cool-down: 10 min easy jog".to_owned(),
        ],
        Difficulty::Intermediate => {
            let intervals = if week % 2 == 0 {
                "  8 x 800m @ 10K pace (2 min recovery)"
            } else {
                "  5 x 1 mile @ half-marathon pace (3 min recovery)"
            };
            vec![
                "Warm-up: 15 min easy jog + dynamic drills + 6 x 100m strides".to_owned(),
                "Interval workout:".to_owned(),
                intervals.to_owned(),
                "  Focus on negative splits (faster second half)".to_owned(),
                "Cool-down: 10-15 min easy jog".to_owned(),
            ]
        }
        Difficulty::Advanced => {
            let goal_pace = match gender {
                Gender::Male => "6:30-7:00/mi",
                Gender::Female => "7:30-8:00/mi",
            };
            let intervals = match week % 3 {
                0 => format!("  10 x 1000m @ {goal_pace} (90s recovery)"),
                1 => "  Yasso 800s: 8 x 800m @ target marathon time".to_owned(),
                _ => "  Tempo intervals: 3 x 2 miles @ marathon pace (2 min recovery)".to_owned(),
            };
            vec![
                "Warm-up: 2 miles easy + dynamic drills + 8 x 100m strides".to_owned(),
                "Advanced speed workout:".to_owned(),
                intervals,
                "Cool-down: 1-2 miles easy jog".to_owned(),
            ]
        }
    }
}

fn cross_training(level: Difficulty) -> Vec<String> {
    let duration = match level {
        Difficulty::Beginner => "30-40",
        Difficulty::Intermediate => "40-50",
        Difficulty::Advanced => "45-60",
    };
    vec![
        "Cross-training options (choose one):".to_owned(),
        format!("  Cycling - {duration} minutes at moderate intensity"),
        format!("  Swimming - {duration} minutes continuous"),
        format!("  Elliptical - {duration} minutes"),
        format!("  Rowing - {duration} minutes"),
        "Keep effort conversational - Zone 2 heart rate".to_owned(),
    ]
}

fn long_run(miles: i64, level: Difficulty, week: u32) -> Vec<String> {
    let (pace, km_pace, minutes_per_mile) = match level {
        Difficulty::Beginner => ("10:30-11:30/mi", "6:32-7:09/km", 11),
        Difficulty::Intermediate => ("9:30-10:30/mi", "5:54-6:32/km", 10),
        Difficulty::Advanced => ("8:30-9:30/mi", "5:17-5:54/km", 9),
    };
    let duration = miles * minutes_per_mile;
    let mut lines = vec![
        format!("Long run - {miles} miles ({} km)", km(miles)),
        format!("Target pace: {pace} ({km_pace})"),
        format!("Estimated duration: {}:{:02} hours", duration / 60, duration % 60),
        "Effort: Easy conversational pace - 65-75% max HR".to_owned(),
        "Start slower than target pace (negative split)".to_owned(),
        "Practice race-day fueling and hydration".to_owned(),
    ];
    if week >= 12 {
        lines.push("Last 3-4 miles: pick up pace to marathon goal pace".to_owned());
    }
    lines
}

fn recovery_run(miles: i64, level: Difficulty) -> Vec<String> {
    let pace = match level {
        Difficulty::Beginner => "11:00-12:00/mi",
        Difficulty::Intermediate => "10:00-11:00/mi",
        Difficulty::Advanced => "9:00-10:00/mi",
    };
    vec![
        format!("Recovery run - {miles} miles ({} km)", km(miles)),
        format!("Target pace: {pace} - very easy"),
        "Effort: Should feel effortless - could maintain for hours".to_owned(),
        "Replace with complete rest if feeling very fatigued or sore".to_owned(),
    ]
}
