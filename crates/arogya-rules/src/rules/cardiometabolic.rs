use arogya_core::models::recommendation::{Reason, RecommendationKey};

use crate::ScreeningRule;
use crate::facts::{Facts, Finding};
use crate::thresholds::BASELINE_SCREENING_MIN_AGE;

/// Blood pressure check for every adult from 30.
pub struct BloodPressure;

impl ScreeningRule for BloodPressure {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::Bp
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        facts
            .age_at_least(BASELINE_SCREENING_MIN_AGE)
            .then(|| Finding::new(Reason::BpReason))
    }
}

/// Blood sugar screening from 30. Known diabetics get the diabetic
/// monitoring checks instead.
pub struct BloodSugar;

impl ScreeningRule for BloodSugar {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::Sugar
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        (facts.age_at_least(BASELINE_SCREENING_MIN_AGE) && !facts.is_diabetic)
            .then(|| Finding::new(Reason::SugarReason))
    }
}

pub struct DiabeticRetinopathy;

impl ScreeningRule for DiabeticRetinopathy {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::DiabeticRetinopathy
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        facts
            .is_diabetic
            .then(|| Finding::new(Reason::ReasonDiabeticRetinopathy))
    }
}

pub struct DiabeticFoot;

impl ScreeningRule for DiabeticFoot {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::DiabeticFoot
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        facts
            .is_diabetic
            .then(|| Finding::new(Reason::ReasonDiabeticFoot))
    }
}

pub struct DiabeticKidney;

impl ScreeningRule for DiabeticKidney {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::DiabeticKidney
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        facts
            .is_diabetic
            .then(|| Finding::new(Reason::ReasonDiabeticKidney))
    }
}
