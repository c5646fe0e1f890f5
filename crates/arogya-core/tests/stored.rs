use arogya_core::error::CoreError;
use arogya_core::models::profile::{PatientProfile, Relationship, Sex, SmokingStatus};
use arogya_core::stored::sanitize_stored_profile;
use serde_json::json;

#[test]
fn keeps_well_typed_fields() {
    let stored = json!({
        "name": "Ravi",
        "age": 51,
        "gender": "male",
        "smokingStatus": "current",
        "smokingSticksPerDay": 12,
        "personalConditions": ["Stroke"]
    });

    let profile = sanitize_stored_profile(stored).unwrap();
    assert_eq!(profile.name, "Ravi");
    assert_eq!(profile.age, Some(51));
    assert_eq!(profile.sex, Some(Sex::Male));
    assert_eq!(profile.smoking_status, SmokingStatus::Current);
    assert_eq!(profile.smoking_sticks_per_day, 12.0);
    assert_eq!(profile.personal_conditions, vec!["Stroke".to_string()]);
}

#[test]
fn wrong_types_fall_back_to_defaults() {
    let stored = json!({
        "name": "Ravi",
        "age": "fifty",
        "smokingStatus": "sometimes",
        "familyHistory": "none",
        "waistCircumference": 34
    });

    let profile = sanitize_stored_profile(stored).unwrap();
    let defaults = PatientProfile::default();
    assert_eq!(profile.name, "Ravi");
    assert_eq!(profile.age, defaults.age);
    assert_eq!(profile.smoking_status, defaults.smoking_status);
    assert!(profile.family_history.is_empty());
    assert_eq!(profile.waist_circumference, 34.0);
}

#[test]
fn unknown_keys_are_dropped() {
    let stored = json!({ "name": "Ravi", "favouriteColour": "blue" });
    let profile = sanitize_stored_profile(stored).unwrap();
    assert_eq!(profile.name, "Ravi");
}

#[test]
fn legacy_packs_convert_to_sticks() {
    let stored = json!({
        "smokingStatus": "current",
        "smokingPacksPerDay": 1.5,
        "smokingYears": 10
    });

    let profile = sanitize_stored_profile(stored).unwrap();
    assert_eq!(profile.smoking_sticks_per_day, 30.0);
    assert_eq!(profile.pack_years(), 15.0);
}

#[test]
fn legacy_packs_convert_when_sticks_are_zero() {
    let stored = json!({ "smokingPacksPerDay": 2, "smokingSticksPerDay": 0 });
    let profile = sanitize_stored_profile(stored).unwrap();
    assert_eq!(profile.smoking_sticks_per_day, 40.0);
}

#[test]
fn saved_sticks_win_over_legacy_packs() {
    let stored = json!({ "smokingPacksPerDay": 2, "smokingSticksPerDay": 8 });
    let profile = sanitize_stored_profile(stored).unwrap();
    assert_eq!(profile.smoking_sticks_per_day, 8.0);
}

#[test]
fn non_object_is_rejected() {
    let err = sanitize_stored_profile(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, CoreError::NotAnObject));
}

#[test]
fn bad_family_entries_do_not_discard_the_rest() {
    let stored = json!({
        "age": 35,
        "gender": "female",
        "familyHistory": [
            { "condition": "Breast Cancer", "relativeAgeAtDiagnosis": 40, "relationship": "parent" },
            { "condition": "Colon Cancer", "relativeAgeAtDiagnosis": -1 },
            { "condition": "Stroke", "relationship": "cousin" },
            { "relativeAgeAtDiagnosis": 50 },
            "Heart Disease"
        ]
    });

    let profile = sanitize_stored_profile(stored).unwrap();
    let history = &profile.family_history;
    assert_eq!(history.len(), 3);

    assert_eq!(history[0].condition, "Breast Cancer");
    assert_eq!(history[0].relative_age_at_diagnosis, Some(40));
    assert_eq!(history[0].relationship, Some(Relationship::Parent));

    assert_eq!(history[1].condition, "Colon Cancer");
    assert_eq!(history[1].relative_age_at_diagnosis, None);

    assert_eq!(history[2].condition, "Stroke");
    assert_eq!(history[2].relationship, None);
}

#[test]
fn fractional_ages_are_truncated() {
    let stored = json!({
        "age": 45.7,
        "familyHistory": [
            { "condition": "Prostate Cancer", "relativeAgeAtDiagnosis": 42.5 },
            { "condition": "Colon Cancer", "relativeAgeAtDiagnosis": 0.4 }
        ]
    });

    let profile = sanitize_stored_profile(stored).unwrap();
    assert_eq!(profile.age, Some(45));
    assert_eq!(profile.family_history.len(), 2);
    assert_eq!(profile.family_history[0].relative_age_at_diagnosis, Some(42));
    assert_eq!(profile.family_history[1].relative_age_at_diagnosis, None);
}

#[test]
fn negative_age_falls_back() {
    let profile = sanitize_stored_profile(json!({ "age": -3 })).unwrap();
    assert_eq!(profile.age, None);
}
