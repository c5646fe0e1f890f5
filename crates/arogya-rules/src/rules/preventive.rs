use arogya_core::models::profile::{HepatitisHistory, HpvVaccineStatus, SaltIntake};
use arogya_core::models::recommendation::{Reason, RecommendationKey};

use crate::ScreeningRule;
use crate::facts::{Facts, Finding};
use crate::thresholds::{GASTRIC_SCREENING_MIN_AGE, HPV_PREVENTION_MAX_AGE};

pub struct GastricScreening;

impl ScreeningRule for GastricScreening {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::GastricScreening
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        (facts.profile.salt_intake == SaltIntake::High
            && facts.age_at_least(GASTRIC_SCREENING_MIN_AGE))
        .then(|| Finding::new(Reason::GastricScreeningReason))
    }
}

pub struct LiverHepatitis;

impl ScreeningRule for LiverHepatitis {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::LiverHep
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        (facts.profile.hepatitis_history != HepatitisHistory::None)
            .then(|| Finding::new(Reason::LiverHepReason))
    }
}

/// HPV catch-up vaccination up to 45 for anyone not fully vaccinated.
pub struct HpvPrevention;

impl ScreeningRule for HpvPrevention {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::HpvPrevention
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        let eligible_age = facts.age.is_some_and(|a| a <= HPV_PREVENTION_MAX_AGE);
        (facts.profile.hpv_vaccine_status != HpvVaccineStatus::Complete && eligible_age)
            .then(|| Finding::new(Reason::HpvPreventionReason))
    }
}

/// Baseline diet and activity advice. Always included.
pub struct Lifestyle;

impl ScreeningRule for Lifestyle {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::Lifestyle
    }

    fn evaluate(&self, _facts: &Facts<'_>) -> Option<Finding> {
        Some(Finding::new(Reason::LifestyleReason))
    }
}
