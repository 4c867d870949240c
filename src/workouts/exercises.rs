// ABOUTME: Static strength exercise catalog tagged with body part, tier, and equipment
// ABOUTME: Bodyweight entries have empty equipment lists and are always available
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Exercise Catalog
//!
//! Each entry names the body part it trains, the minimum difficulty tier it
//! is appropriate for, the equipment it requires (all listed pieces), and
//! whether it is rep-based or a timed hold. Hold entries carry a base
//! duration in seconds that the generator scales with weekly intensity.
//!
//! Every body part has bodyweight beginner entries, so a user with no
//! equipment always gets a full session.

use crate::models::{Difficulty, Equipment};

/// How an exercise is prescribed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExerciseKind {
    /// Sets of the goal's rep range
    Reps,
    /// Timed hold, base seconds scaled by intensity
    Hold {
        /// Duration at intensity 1.0
        base_secs: f64,
    },
}

/// Body region an exercise trains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    /// Chest, back, shoulders, arms
    Upper,
    /// Quads, hamstrings, glutes, calves
    Lower,
    /// Abdominals and trunk stabilizers
    Core,
}

/// A catalog entry
#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    /// Display name, including any per-side note
    pub name: &'static str,
    /// Body region trained
    pub body_part: BodyPart,
    /// Minimum difficulty tier
    pub tier: Difficulty,
    /// Required equipment; empty means bodyweight only
    pub equipment: &'static [Equipment],
    /// Rep-based or timed hold
    pub kind: ExerciseKind,
}

impl Exercise {
    /// Whether this entry fits a difficulty tier and equipment set
    #[must_use]
    pub fn is_available(&self, difficulty: Difficulty, has: impl Fn(Equipment) -> bool) -> bool {
        self.tier.tier() <= difficulty.tier() && self.equipment.iter().all(|e| has(*e))
    }
}

const fn reps(
    name: &'static str,
    body_part: BodyPart,
    tier: Difficulty,
    equipment: &'static [Equipment],
) -> Exercise {
    Exercise {
        name,
        body_part,
        tier,
        equipment,
        kind: ExerciseKind::Reps,
    }
}

const fn hold(
    name: &'static str,
    body_part: BodyPart,
    tier: Difficulty,
    equipment: &'static [Equipment],
    base_secs: f64,
) -> Exercise {
    Exercise {
        name,
        body_part,
        tier,
        equipment,
        kind: ExerciseKind::Hold { base_secs },
    }
}

use BodyPart::{Core, Lower, Upper};
use Difficulty::{Advanced, Beginner, Intermediate};
use Equipment::{Barbell, Cable, Dumbbells, Machine, PullUpBar, ResistanceBands};

/// The full catalog
pub const CATALOG: &[Exercise] = &[
    // Upper body
    reps("Push-ups", Upper, Beginner, &[]),
    reps("Dumbbell rows (each arm)", Upper, Beginner, &[Dumbbells]),
    reps("Shoulder press", Upper, Beginner, &[Dumbbells]),
    reps("Bicep curls", Upper, Beginner, &[Dumbbells]),
    reps("Tricep dips", Upper, Beginner, &[]),
    reps("Band pull-aparts", Upper, Beginner, &[ResistanceBands]),
    reps("Pike push-ups", Upper, Beginner, &[]),
    reps("Bent-over rows", Upper, Intermediate, &[Dumbbells]),
    reps("Overhead press", Upper, Intermediate, &[Barbell]),
    reps("Pull-ups", Upper, Intermediate, &[PullUpBar]),
    reps("Chest press", Upper, Intermediate, &[Dumbbells]),
    reps("Face pulls", Upper, Intermediate, &[Cable]),
    reps("Diamond push-ups", Upper, Intermediate, &[]),
    reps("Weighted push-ups", Upper, Advanced, &[]),
    reps("Barbell rows", Upper, Advanced, &[Barbell]),
    reps("Arnold press", Upper, Advanced, &[Dumbbells]),
    reps("Archer push-ups", Upper, Advanced, &[]),
    // Lower body
    reps("Bodyweight squats", Lower, Beginner, &[]),
    reps("Lunges (each leg)", Lower, Beginner, &[]),
    reps("Glute bridges", Lower, Beginner, &[]),
    reps("Calf raises", Lower, Beginner, &[]),
    hold("Wall sit", Lower, Beginner, &[], 30.0),
    reps("Banded lateral walks", Lower, Beginner, &[ResistanceBands]),
    reps("Goblet squats", Lower, Intermediate, &[Dumbbells]),
    reps("Bulgarian split squats (each leg)", Lower, Intermediate, &[Dumbbells]),
    reps("Romanian deadlifts", Lower, Intermediate, &[Barbell]),
    reps("Step-ups (each leg)", Lower, Intermediate, &[]),
    reps("Leg press", Lower, Intermediate, &[Machine]),
    reps("Jump squats", Lower, Intermediate, &[]),
    reps("Barbell squats", Lower, Advanced, &[Barbell]),
    reps("Deadlifts", Lower, Advanced, &[Barbell]),
    reps("Front squats", Lower, Advanced, &[Barbell]),
    reps("Walking lunges (weighted)", Lower, Advanced, &[Dumbbells]),
    reps("Hamstring curls", Lower, Advanced, &[Machine]),
    reps("Pistol squat progressions (each leg)", Lower, Advanced, &[]),
    // Core
    reps("Crunches", Core, Beginner, &[]),
    hold("Plank", Core, Beginner, &[], 30.0),
    hold("Side plank (each side)", Core, Beginner, &[], 20.0),
    reps("Dead bug", Core, Beginner, &[]),
    reps("Bird dogs (each side)", Core, Beginner, &[]),
    reps("Sit-ups", Core, Intermediate, &[]),
    reps("Russian twists", Core, Intermediate, &[]),
    reps("Leg raises", Core, Intermediate, &[]),
    reps("Mountain climbers", Core, Intermediate, &[]),
    reps("Bicycle crunches", Core, Intermediate, &[]),
    reps("Hanging knee raises", Core, Intermediate, &[PullUpBar]),
    reps("Pallof press", Core, Intermediate, &[Cable]),
    hold("Forearm plank", Core, Intermediate, &[], 45.0),
    reps("Hanging leg raises", Core, Advanced, &[PullUpBar]),
    reps("Dragon flags", Core, Advanced, &[]),
    hold("L-sit hold", Core, Advanced, &[], 20.0),
    hold("Weighted plank", Core, Advanced, &[], 60.0),
    reps("Windshield wipers", Core, Advanced, &[PullUpBar]),
];

/// Catalog entries for one body part
pub fn for_body_part(part: BodyPart) -> impl Iterator<Item = &'static Exercise> {
    CATALOG.iter().filter(move |e| e.body_part == part)
}
