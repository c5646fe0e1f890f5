//! Post-processing of derived recommendations.
//!
//! Overlapping single-condition checks are merged into composite pathways,
//! then the list is ordered high priority first.

use arogya_core::models::profile::PatientProfile;
use arogya_core::models::recommendation::{
    Priority, Reason, Recommendation, RecommendationKey,
};

use crate::thresholds::{ELEVATED_SCORE, waist_threshold_cm};

pub fn consolidate(
    candidates: Vec<Recommendation>,
    profile: &PatientProfile,
    score: u8,
) -> Vec<Recommendation> {
    let has = |key| candidates.iter().any(|r: &Recommendation| r.key == key);

    let merge_lung = has(RecommendationKey::OccupationalLung)
        && has(RecommendationKey::PulmonologistConsult);
    let add_metabolic = score >= ELEVATED_SCORE
        && has(RecommendationKey::Bp)
        && has(RecommendationKey::Sugar)
        && profile.waist_cm() >= waist_threshold_cm(profile.is_male());

    let mut recs = candidates;

    // Occupational exposure plus the multi-factor referral become one
    // specialist assessment.
    if merge_lung {
        recs.retain(|r| {
            r.key != RecommendationKey::OccupationalLung
                && r.key != RecommendationKey::PulmonologistConsult
        });
        recs.push(Recommendation::new(
            RecommendationKey::ComprehensiveLungAssessment,
            Reason::ComprehensiveLungAssessmentReason,
            Priority::High,
        ));
    }

    // Added alongside BP and sugar, which stay in the list.
    if add_metabolic {
        recs.push(Recommendation::new(
            RecommendationKey::MetabolicSyndromeProtocol,
            Reason::MetabolicSyndromeProtocolReason,
            Priority::High,
        ));
    }

    // Stable: derivation order is kept within each tier.
    recs.sort_by_key(|r| !r.is_high_priority());
    recs
}
