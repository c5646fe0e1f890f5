//! Headline observations for the results summary: the first positive habit
//! found and the two most pressing risk factors.

use arogya_core::models::insight::{Insight, PrimaryInsights};
use arogya_core::models::profile::{
    AlcoholFrequency, CookingFuel, PatientProfile, PhysicalActivity, SaltIntake, SmokingStatus,
};

use crate::thresholds::{
    BMI_NORMAL_LOWER, BMI_NORMAL_UPPER, BMI_OVERWEIGHT_UPPER, waist_threshold_cm,
};

const MAX_FOCUS_AREAS: usize = 2;

type Check = fn(&PatientProfile) -> bool;

/// Ranked best first.
const POSITIVE_FINDINGS: [(&str, &str, Check); 5] = [
    ("activity", "positive_finding_activity", |p| {
        matches!(
            p.physical_activity,
            PhysicalActivity::Active | PhysicalActivity::Moderate
        )
    }),
    ("no_smoking", "positive_finding_no_smoking", |p| {
        p.smoking_status == SmokingStatus::Never && !p.uses_smokeless_tobacco
    }),
    ("low_salt", "positive_finding_low_salt", |p| {
        p.salt_intake == SaltIntake::Low
    }),
    ("no_alcohol", "positive_finding_no_alcohol", |p| {
        p.alcohol_frequency == AlcoholFrequency::None
    }),
    ("healthy_bmi", "positive_finding_healthy_bmi", |p| {
        p.bmi()
            .is_some_and(|bmi| (BMI_NORMAL_LOWER..BMI_NORMAL_UPPER).contains(&bmi))
    }),
];

/// Ranked most pressing first.
const RISK_FACTORS: [(&str, &str, Check); 8] = [
    ("smoking", "risk_insight_smoking", |p| p.uses_tobacco_now()),
    ("obesity", "risk_insight_obesity", |p| {
        p.bmi().is_some_and(|bmi| bmi >= BMI_OVERWEIGHT_UPPER)
    }),
    ("high_waist", "risk_insight_waist", |p| {
        p.waist_cm() > waist_threshold_cm(p.is_male())
    }),
    ("sedentary", "risk_insight_sedentary", |p| {
        p.physical_activity == PhysicalActivity::Sedentary
    }),
    ("alcohol", "risk_insight_alcohol", |p| {
        p.alcohol_frequency == AlcoholFrequency::High
    }),
    ("salt", "risk_insight_salt", |p| p.salt_intake == SaltIntake::High),
    ("family_history", "risk_insight_family_history", |p| {
        !p.effective_family_history().is_empty()
    }),
    ("biomass", "risk_insight_biomass", |p| {
        p.cooking_fuel_type == CookingFuel::Biomass
    }),
];

pub fn primary_insights(profile: &PatientProfile) -> PrimaryInsights {
    let positive_finding = POSITIVE_FINDINGS
        .iter()
        .find(|(_, _, check)| check(profile))
        .map(|(key, label_key, _)| insight(key, label_key));

    let focus_areas = RISK_FACTORS
        .iter()
        .filter(|(_, _, check)| check(profile))
        .take(MAX_FOCUS_AREAS)
        .map(|(key, label_key, _)| insight(key, label_key))
        .collect();

    PrimaryInsights {
        positive_finding,
        focus_areas,
    }
}

fn insight(key: &str, label_key: &str) -> Insight {
    Insight {
        key: key.to_string(),
        label_key: label_key.to_string(),
    }
}
