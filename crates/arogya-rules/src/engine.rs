use arogya_core::models::analysis::{AnalysisResult, DISCLAIMER};
use arogya_core::models::profile::PatientProfile;

use crate::alert::lifestyle_risk_alert;
use crate::consolidate::consolidate;
use crate::derive::derive;
use crate::facts::Facts;
use crate::priority;
use crate::scoring::compute_score;

/// Analyze a profile using today's year for quit-date arithmetic.
pub fn analyze(profile: &PatientProfile) -> AnalysisResult {
    analyze_at(profile, current_year())
}

/// Analyze a profile as of `reference_year`.
///
/// Deterministic: the same profile and year always give the same result.
pub fn analyze_at(profile: &PatientProfile, reference_year: i32) -> AnalysisResult {
    let cbac_score = compute_score(profile);
    let facts = Facts::new(profile, reference_year);

    let candidates = derive(&facts);
    let prioritized = priority::assign(&candidates, cbac_score);
    let recommendations = consolidate(prioritized, profile, cbac_score);

    tracing::debug!(
        cbac_score,
        recommendations = recommendations.len(),
        "screening analysis complete"
    );

    AnalysisResult {
        cbac_score,
        recommendations,
        has_lifestyle_risk_alert: lifestyle_risk_alert(&facts),
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// The current calendar year in the system time zone.
pub fn current_year() -> i32 {
    i32::from(jiff::Zoned::now().year())
}
