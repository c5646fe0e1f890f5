use arogya_core::models::profile::{CookingFuel, SmokingStatus};
use arogya_core::models::recommendation::{Reason, RecommendationKey};

use crate::ScreeningRule;
use crate::facts::{Facts, Finding};
use crate::thresholds::{
    PULMONOLOGIST_CONSULT_MIN_FACTORS, PULMONOLOGIST_CONSULT_MIN_PACK_YEARS,
};

/// Lung function check after dust or smoke exposure: biomass cooking fuel
/// or marble/mining work.
pub struct OccupationalLung;

impl ScreeningRule for OccupationalLung {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::OccupationalLung
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        let profile = facts.profile;
        (profile.cooking_fuel_type == CookingFuel::Biomass || profile.marble_mining_exposure)
            .then(|| Finding::new(Reason::OccupationalLungReason))
    }
}

/// Specialist referral when several lung risks stack up and the patient
/// is not already headed for a screening CT.
pub struct PulmonologistConsult;

impl ScreeningRule for PulmonologistConsult {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::PulmonologistConsult
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        let profile = facts.profile;
        let risk_factors = [
            profile.smoking_status == SmokingStatus::Former
                && facts.pack_years >= PULMONOLOGIST_CONSULT_MIN_PACK_YEARS,
            profile.marble_mining_exposure,
            profile.cooking_fuel_type == CookingFuel::Biomass,
        ];
        let count = risk_factors.into_iter().filter(|f| *f).count();

        (count >= PULMONOLOGIST_CONSULT_MIN_FACTORS && !facts.lung_eligible)
            .then(|| Finding::new(Reason::PulmonologistConsultReason))
    }
}
