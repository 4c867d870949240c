// ABOUTME: Legacy fixed 12-week FBI preparation table, three phases of six set days
// ABOUTME: Fully static; the same week and day always produce identical output
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Classic FBI Program
//!
//! The predecessor of the phase-parameterized [`super::fbi_pft`] generator:
//! a hand-written 12-week table with three four-week phases (foundation and
//! endurance, power and performance, simulation and peak readiness). Weeks
//! past twelve stay in the final phase. Unknown day numbers return a rest
//! day rather than an error, matching the table's forgiving lookup
//! semantics.

use crate::models::Workout;

/// Phase of the classic 12-week program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramPhase {
    /// Weeks 1-4
    FoundationEndurance,
    /// Weeks 5-8
    PowerPerformance,
    /// Weeks 9-12 (and beyond)
    SimulationPeak,
}

impl ProgramPhase {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FoundationEndurance => "Foundation & Endurance",
            Self::PowerPerformance => "Power & Performance",
            Self::SimulationPeak => "Simulation & Peak Readiness",
        }
    }
}

/// Phase for a 1-based week number
#[must_use]
pub const fn phase_for_week(week: u32) -> ProgramPhase {
    if week <= 4 {
        ProgramPhase::FoundationEndurance
    } else if week <= 8 {
        ProgramPhase::PowerPerformance
    } else {
        ProgramPhase::SimulationPeak
    }
}

fn workout(name: &str, cardio: &[&str], strength: &[&str]) -> Workout {
    Workout {
        name: name.to_owned(),
        cardio: cardio.iter().map(|l| (*l).to_owned()).collect(),
        strength: strength.iter().map(|l| (*l).to_owned()).collect(),
    }
}

/// Workout for a 1-based week and day 1-6; any other day is a rest day
#[must_use]
pub fn workout_for_day(week: u32, day: u32) -> Workout {
    match phase_for_week(week) {
        ProgramPhase::FoundationEndurance => foundation_day(day),
        ProgramPhase::PowerPerformance => power_day(day),
        ProgramPhase::SimulationPeak => peak_day(day),
    }
}

fn rest_day() -> Workout {
    workout("Rest Day", &[], &[])
}

fn foundation_day(day: u32) -> Workout {
    match day {
        1 => workout(
            "Speed Technique + Upper Body Strength",
            &["8x100m sprints @ 80% effort (60s rest)", "400m cooldown jog"],
            &[
                "Push-ups: 5x max reps",
                "Dumbbell rows: 3x10",
                "Shoulder press: 3x12",
                "Plank: 3x30s",
            ],
        ),
        2 => workout(
            "Aerobic Endurance + Lower Body Power",
            &["3-4 mile steady run (Zone 2 effort)"],
            &["Squats: 4x12", "Lunges: 3x20 steps", "Calf raises: 3x20", "Leg raises: 3x15"],
        ),
        3 => workout(
            "Core Endurance + Anaerobic Conditioning",
            &["6x200m sprints @ 85-90% (90s rest)"],
            &[
                "Sit-ups: 3x 1-min sets",
                "Side planks: 3x30s",
                "Flutter kicks: 3x25",
                "V-ups: 3x15",
            ],
        ),
        4 => workout(
            "Tempo Run + Upper Endurance",
            &["30-40 min run @ moderate-hard pace"],
            &[
                "Incline push-ups: 3x20",
                "Pull-ups or band-assisted: 4x max",
                "Shoulder flys: 3x15",
                "Reverse crunches: 3x20",
            ],
        ),
        5 => workout(
            "Tactical Hybrid Circuit",
            &[
                "Hybrid Circuit (4 rounds):",
                "  400m run",
                "  15 push-ups",
                "  20 squats",
                "  25 sit-ups",
                "  1-min plank",
                "  Rest 90s between rounds",
            ],
            &[],
        ),
        6 => workout(
            "Long Endurance + Functional Strength",
            &["5-mile run or 60-min cycle"],
            &[
                "Deadlifts: 4x8",
                "Step-ups: 3x12 each leg",
                "Russian twists: 3x20",
                "Plank: 3x45s",
            ],
        ),
        _ => rest_day(),
    }
}

fn power_day(day: u32) -> Workout {
    match day {
        1 => workout(
            "FBI PFT Simulation",
            &[
                "Full FBI PFT Test Simulation:",
                "  1. Sit-ups (1 min)",
                "  2. 300m sprint",
                "  3. Push-ups (to failure)",
                "  4. 1.5-mile run",
                "Record all results. Compare weekly.",
            ],
            &[],
        ),
        2 => workout(
            "Upper Power + Short Sprints",
            &["10x100m sprints (30s rest)"],
            &[
                "Push-ups: 6x max",
                "Dips or diamond push-ups: 3x15",
                "Pull-ups: 3x max",
                "Shoulder press: 3x10",
                "Plank + side plank combo: 3x45s",
            ],
        ),
        3 => workout(
            "Core Power + Agility",
            &["8x300m intervals @ 90% (90s rest)"],
            &[
                "Sit-ups: 4x 1-min sets",
                "Weighted Russian twists: 3x20",
                "Hanging leg raises: 3x12",
                "Superman hold: 3x30s",
            ],
        ),
        4 => workout(
            "Distance + Lower Strength",
            &["4-5 miles (tempo pace)"],
            &["Squats: 4x10", "Lunges: 3x20", "Step-ups: 3x12", "Calf raises: 3x20"],
        ),
        5 => workout(
            "Functional Circuit",
            &[
                "Hybrid Circuit (4-5 rounds):",
                "  400m run",
                "  25 push-ups",
                "  25 sit-ups",
                "  20 squats",
                "  10 burpees",
                "  Rest 90s between rounds",
                "Finisher: 5 min jump rope or battle rope",
            ],
            &[],
        ),
        6 => workout(
            "Endurance + Loaded Carry",
            &["Long run (5-6 miles) or 60-min ruck (25-35 lbs)"],
            &[
                "Deadlifts: 4x8",
                "Front squats: 3x10",
                "Farmer's carry: 3x40m",
                "Hanging knee raises: 3x15",
            ],
        ),
        _ => rest_day(),
    }
}

fn peak_day(day: u32) -> Workout {
    match day {
        1 => workout(
            "Full FBI PFT Simulation",
            &[
                "Full FBI PFT Test Simulation:",
                "  1. Sit-ups (1 min)",
                "  2. 300m sprint",
                "  3. Push-ups (to failure)",
                "  4. 1.5-mile run",
                "Perform every week. Aim for consistent pacing.",
                "Week 12 = final benchmark",
            ],
            &[],
        ),
        2 => workout(
            "Power & Speed",
            &["6x300m sprints @ race pace (90s rest)", "3x100m all-out sprints"],
            &[
                "Push-ups: 6x max",
                "Pull-ups: 3x max",
                "Shoulder press: 3x10",
                "Plank: 3x 1 min",
            ],
        ),
        3 => workout(
            "Core & Recovery Conditioning",
            &["20-30 min light jog or row"],
            &[
                "Sit-ups: 4x 1-min sets",
                "Flutter kicks: 3x25",
                "Side planks: 3x45s",
                "Stretch & mobility drills",
            ],
        ),
        4 => workout(
            "Distance & Lower Body Burn",
            &["5-6 miles steady-state"],
            &["Squats: 4x12", "Lunges: 3x20", "Step-ups: 3x15", "Calf raises: 3x25"],
        ),
        5 => workout(
            "Tactical Endurance Circuit",
            &[
                "Hybrid Circuit (5 rounds):",
                "  400m run",
                "  20 push-ups",
                "  20 sit-ups",
                "  15 squats",
                "  10 burpees",
                "  1-min plank",
                "  Rest 90s between rounds",
                "Optional Finisher: Hill sprints x6",
            ],
            &[],
        ),
        6 => workout(
            "Simulation Prep + Mobility",
            &["2-mile easy jog"],
            &[
                "Light Circuit (2 rounds):",
                "  20 push-ups",
                "  20 sit-ups",
                "  10 pull-ups",
                "  20 squats",
                "Recovery:",
                "  Yoga flow (20-30 min)",
                "  Full-body stretch",
                "  Focus on breathing and recovery",
            ],
        ),
        _ => rest_day(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundaries() {
        assert_eq!(phase_for_week(1), ProgramPhase::FoundationEndurance);
        assert_eq!(phase_for_week(4), ProgramPhase::FoundationEndurance);
        assert_eq!(phase_for_week(5), ProgramPhase::PowerPerformance);
        assert_eq!(phase_for_week(8), ProgramPhase::PowerPerformance);
        assert_eq!(phase_for_week(9), ProgramPhase::SimulationPeak);
        assert_eq!(phase_for_week(40), ProgramPhase::SimulationPeak);
    }

    #[test]
    fn unknown_day_is_a_rest_day() {
        let rest = workout_for_day(1, 7);
        assert_eq!(rest.name, "Rest Day");
        assert!(rest.cardio.is_empty());
        assert!(rest.strength.is_empty());
        assert_eq!(workout_for_day(1, 0).name, "Rest Day");
    }

    #[test]
    fn table_is_static_per_phase() {
        assert_eq!(workout_for_day(1, 3), workout_for_day(4, 3));
        assert_ne!(workout_for_day(4, 3).name, workout_for_day(5, 3).name);
    }
}
