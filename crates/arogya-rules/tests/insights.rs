mod common;

use arogya_core::models::condition::Condition;
use arogya_core::models::profile::{
    AlcoholFrequency, CookingFuel, PatientProfile, PhysicalActivity, SaltIntake, Sex,
    SmokingStatus,
};
use arogya_rules::insights::primary_insights;

use common::{base_profile, relative};

fn focus_keys(profile: &PatientProfile) -> Vec<String> {
    primary_insights(profile)
        .focus_areas
        .into_iter()
        .map(|i| i.key)
        .collect()
}

#[test]
fn active_patient_leads_with_activity() {
    let insights = primary_insights(&base_profile());
    let positive = insights.positive_finding.unwrap();
    assert_eq!(positive.key, "activity");
    assert_eq!(positive.label_key, "positive_finding_activity");
    assert!(insights.focus_areas.is_empty());
}

#[test]
fn positive_finding_falls_through_ranking() {
    let profile = PatientProfile {
        physical_activity: PhysicalActivity::Sedentary,
        smoking_status: SmokingStatus::Current,
        salt_intake: SaltIntake::High,
        alcohol_frequency: AlcoholFrequency::High,
        ..base_profile()
    };
    // 65 kg at 170 cm is a healthy BMI.
    assert_eq!(
        primary_insights(&profile).positive_finding.unwrap().key,
        "healthy_bmi"
    );

    let no_bmi = PatientProfile {
        height: None,
        ..profile
    };
    assert!(primary_insights(&no_bmi).positive_finding.is_none());
}

#[test]
fn focus_areas_keep_top_two() {
    let profile = PatientProfile {
        uses_smokeless_tobacco: true,
        weight: Some(80.0),
        physical_activity: PhysicalActivity::Sedentary,
        cooking_fuel_type: CookingFuel::Biomass,
        ..base_profile()
    };
    assert_eq!(focus_keys(&profile), vec!["smoking", "obesity"]);
}

#[test]
fn waist_focus_compares_centimetres() {
    // 33 in = 83.8 cm: over the female cutoff only.
    let mut profile = PatientProfile {
        waist_circumference: 33.0,
        ..base_profile()
    };
    assert!(focus_keys(&profile).is_empty());

    profile.sex = Some(Sex::Female);
    assert_eq!(focus_keys(&profile), vec!["high_waist"]);
}

#[test]
fn family_history_focus_respects_unsure() {
    let mut profile = PatientProfile {
        family_history: vec![relative(Condition::Stroke, None)],
        ..base_profile()
    };
    assert_eq!(focus_keys(&profile), vec!["family_history"]);

    profile.family_history_unsure = true;
    assert!(focus_keys(&profile).is_empty());
}
