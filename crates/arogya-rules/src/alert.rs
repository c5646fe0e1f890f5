use arogya_core::models::condition::Condition;
use arogya_core::models::profile::{AlcoholFrequency, SmokingStatus};

use crate::facts::{Facts, has_early_onset};
use crate::thresholds::{LIFESTYLE_ALERT_MAX_AGE, LIFESTYLE_ALERT_MIN_PACK_YEARS};

/// Early-warning flag for patients under 40, whose CBAC score is held down
/// by the age factor. Independent of the score.
///
/// Fires on heavy smoking history, current smoking combined with heavy
/// drinking, or a relative diagnosed with cancer, heart disease or stroke
/// before 50.
pub fn lifestyle_risk_alert(facts: &Facts<'_>) -> bool {
    if !facts.age.is_some_and(|a| a > 0 && a < LIFESTYLE_ALERT_MAX_AGE) {
        return false;
    }

    let profile = facts.profile;
    let heavy_smoking = facts.pack_years > LIFESTYLE_ALERT_MIN_PACK_YEARS;
    let smokes_and_drinks = profile.smoking_status == SmokingStatus::Current
        && profile.alcohol_frequency == AlcoholFrequency::High;

    let early_onset_family = has_early_onset(facts.family_history.iter().filter(|h| {
        h.known_condition().is_some_and(|c| {
            c.is_cancer() || c == Condition::HeartDisease || c == Condition::Stroke
        })
    }));

    heavy_smoking || smokes_and_drinks || early_onset_family
}
