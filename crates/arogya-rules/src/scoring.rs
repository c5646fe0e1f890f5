//! CBAC (Community-Based Assessment Checklist) score.
//!
//! Seven independent factors are summed and capped at
//! [`CBAC_SCORE_MAX`]. Each factor is non-negative, so the score is always
//! within 0–10.

use arogya_core::models::profile::{
    AlcoholFrequency, PatientProfile, PhysicalActivity, SmokingStatus,
};

use crate::thresholds::{
    CBAC_AGE_BRACKET_HIGH, CBAC_AGE_BRACKET_LOW, CBAC_AGE_BRACKET_MEDIUM, CBAC_AGE_MIN,
    CBAC_SCORE_MAX, waist_threshold_cm,
};

/// Compute the CBAC score for a profile.
///
/// A missing age is scored as the youngest bracket so incomplete profiles
/// never look riskier than they are.
pub fn compute_score(profile: &PatientProfile) -> u8 {
    let total = age_points(profile.age.unwrap_or(0))
        + tobacco_points(profile)
        + alcohol_points(profile)
        + waist_points(profile)
        + activity_points(profile)
        + family_history_points(profile)
        + personal_history_points(profile);
    total.min(CBAC_SCORE_MAX)
}

fn age_points(age: u32) -> u8 {
    match age {
        a if a < CBAC_AGE_MIN => 0,
        a if a <= CBAC_AGE_BRACKET_LOW => 1,
        a if a <= CBAC_AGE_BRACKET_MEDIUM => 2,
        a if a <= CBAC_AGE_BRACKET_HIGH => 3,
        _ => 4,
    }
}

fn tobacco_points(profile: &PatientProfile) -> u8 {
    if profile.uses_tobacco_now() {
        2
    } else if profile.smoking_status == SmokingStatus::Former {
        1
    } else {
        0
    }
}

fn alcohol_points(profile: &PatientProfile) -> u8 {
    u8::from(profile.alcohol_frequency == AlcoholFrequency::High)
}

fn waist_points(profile: &PatientProfile) -> u8 {
    if profile.waist_cm() > waist_threshold_cm(profile.is_male()) {
        2
    } else {
        0
    }
}

fn activity_points(profile: &PatientProfile) -> u8 {
    u8::from(profile.physical_activity == PhysicalActivity::Sedentary)
}

fn family_history_points(profile: &PatientProfile) -> u8 {
    let has_ncd = profile
        .effective_family_history()
        .iter()
        .filter_map(|h| h.known_condition())
        .any(|c| c.is_ncd());
    u8::from(has_ncd)
}

fn personal_history_points(profile: &PatientProfile) -> u8 {
    if profile.personal_diagnoses().any(|c| c.is_ncd()) {
        2
    } else {
        0
    }
}
