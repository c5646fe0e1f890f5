use arogya_core::models::recommendation::{
    FREQ_BP_HIGH, Priority, Recommendation, RecommendationKey,
};

use crate::derive::Candidate;
use crate::thresholds::ELEVATED_SCORE;

/// Checks escalated to high priority once the CBAC score is elevated.
const SCORE_ESCALATED: [RecommendationKey; 6] = [
    RecommendationKey::Bp,
    RecommendationKey::Sugar,
    RecommendationKey::Oral,
    RecommendationKey::Cervix,
    RecommendationKey::BreastGeneral,
    RecommendationKey::BreastCbe,
];

/// Always high priority, whatever the score.
const ALWAYS_HIGH: [RecommendationKey; 7] = [
    RecommendationKey::Lung,
    RecommendationKey::LiverHep,
    RecommendationKey::OccupationalLung,
    RecommendationKey::Oral,
    RecommendationKey::DiabeticRetinopathy,
    RecommendationKey::DiabeticFoot,
    RecommendationKey::DiabeticKidney,
];

/// Turn candidates into recommendations with a priority and, for BP, a
/// score-dependent frequency. Order is preserved.
pub fn assign(candidates: &[Candidate], score: u8) -> Vec<Recommendation> {
    let elevated = score >= ELEVATED_SCORE;

    candidates
        .iter()
        .map(|candidate| {
            let key = candidate.key;
            let high = (elevated && SCORE_ESCALATED.contains(&key))
                || candidate.finding.high_risk
                || ALWAYS_HIGH.contains(&key);
            let priority = if high { Priority::High } else { Priority::Normal };

            let mut rec = Recommendation::new(key, candidate.finding.reason, priority);
            if key == RecommendationKey::Bp && elevated {
                rec.frequency = FREQ_BP_HIGH.to_string();
            }
            rec
        })
        .collect()
}
