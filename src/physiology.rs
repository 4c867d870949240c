// ABOUTME: Physiological formulas shared by nutrition and training modules
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, and age-predicted heart rate zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Physiological Calculations
//!
//! ## Scientific Foundation
//!
//! - Mifflin, M. D., St Jeor, S. T., et al. (1990). "A new predictive
//!   equation for resting energy expenditure in healthy individuals."
//!   American Journal of Clinical Nutrition, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Fox, S. M., Naughton, J. P., Haskell, W. L. (1971). "Physical activity
//!   and the prevention of coronary heart disease." Annals of Clinical
//!   Research, 3(6), 404-432. (220 - age maximum heart rate)
//!
//! All outputs are rounded to whole numbers at the boundary; intermediate
//! math stays in `f64`.

use crate::config::nutrition::{ActivityFactorsConfig, BmrConfig};
use crate::models::{Gender, PlanType, Profile};

/// Basal Metabolic Rate via Mifflin-St Jeor, unrounded kcal/day
#[must_use]
pub fn bmr(config: &BmrConfig, profile: &Profile) -> f64 {
    let gender_constant = match profile.gender {
        Gender::Male => config.male_constant,
        Gender::Female => config.female_constant,
    };
    config
        .weight_coefficient
        .mul_add(profile.weight_kg, config.height_coefficient * profile.height_cm)
        - config.age_coefficient * f64::from(profile.age)
        + gender_constant
}

/// Activity multiplier for a plan type.
///
/// Structured test-prep plans (FBI PFT, Army ACFT) train at "very active";
/// everything else assumes "moderately active".
#[must_use]
pub const fn activity_factor(config: &ActivityFactorsConfig, plan_type: PlanType) -> f64 {
    if plan_type.is_high_activity() {
        config.very_active
    } else {
        config.moderately_active
    }
}

/// Total Daily Energy Expenditure, rounded kcal/day
#[must_use]
pub fn tdee(bmr: f64, activity_factor: f64) -> i32 {
    (bmr * activity_factor).round() as i32
}

/// Age-predicted maximum heart rate (Fox formula)
#[must_use]
pub const fn max_heart_rate(age: u32) -> u32 {
    if age >= 220 {
        0
    } else {
        220 - age
    }
}

/// Training heart rate zones as beats per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateZones {
    /// Moderate zone, 70% of max
    pub moderate: u32,
    /// Vigorous zone, 80% of max
    pub vigorous: u32,
    /// Peak zone, 90% of max
    pub peak: u32,
}

/// Heart rate zones at 70/80/90% of age-predicted max
#[must_use]
pub fn heart_rate_zones(age: u32) -> HeartRateZones {
    let max = f64::from(max_heart_rate(age));
    HeartRateZones {
        moderate: (max * 0.7).round() as u32,
        vigorous: (max * 0.8).round() as u32,
        peak: (max * 0.9).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn reference_profile() -> Profile {
        Profile {
            gender: Gender::Male,
            age: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            goal: Goal::Maintenance,
            ..Profile::default()
        }
    }

    #[test]
    fn bmr_matches_published_mifflin_st_jeor() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 800 + 1125 - 150 + 5 = 1780
        let config = BmrConfig::default();
        let value = bmr(&config, &reference_profile());
        assert!((value - 1780.0).abs() < f64::EPSILON);
    }

    #[test]
    fn female_constant_shifts_bmr_down() {
        let config = BmrConfig::default();
        let mut profile = reference_profile();
        profile.gender = Gender::Female;
        let value = bmr(&config, &profile);
        assert!((value - 1614.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tdee_rounds_scaled_bmr() {
        // 1780 * 1.55 = 2759
        assert_eq!(tdee(1780.0, 1.55), 2759);
        // 1780 * 1.725 = 3070.5 -> 3071
        assert_eq!(tdee(1780.0, 1.725), 3071);
    }

    #[test]
    fn test_prep_plans_use_very_active_factor() {
        let config = ActivityFactorsConfig::default();
        assert!(
            (activity_factor(&config, PlanType::FbiPft) - 1.725).abs() < f64::EPSILON
        );
        assert!(
            (activity_factor(&config, PlanType::ArmyPft) - 1.725).abs() < f64::EPSILON
        );
        assert!(
            (activity_factor(&config, PlanType::Marathon) - 1.55).abs() < f64::EPSILON
        );
        assert!(
            (activity_factor(&config, PlanType::Algorithmic) - 1.55).abs() < f64::EPSILON
        );
    }

    #[test]
    fn heart_rate_zones_for_thirty_year_old() {
        let zones = heart_rate_zones(30);
        assert_eq!(max_heart_rate(30), 190);
        assert_eq!(zones.moderate, 133);
        assert_eq!(zones.vigorous, 152);
        assert_eq!(zones.peak, 171);
    }
}
