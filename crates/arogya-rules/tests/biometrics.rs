mod common;

use arogya_core::models::biometrics::BiometricStatus;
use arogya_core::models::profile::{PatientProfile, Sex};
use arogya_rules::biometrics::{BMI_BORDERLINE_NOTE, WAIST_BORDERLINE_NOTE, analyze};

use common::base_profile;

fn with_bmi_inputs(height: Option<f64>, weight: Option<f64>) -> PatientProfile {
    PatientProfile {
        height,
        weight,
        ..base_profile()
    }
}

#[test]
fn healthy_bmi() {
    let result = analyze(&with_bmi_inputs(Some(170.0), Some(60.0)));
    assert_eq!(result.bmi.value, 20.8);
    assert_eq!(result.bmi.status, BiometricStatus::Healthy);
    assert!(result.bmi.note.is_none());
}

#[test]
fn borderline_bmi_carries_note() {
    // 63 / 1.7² ≈ 21.8 is just under the band; 64 kg ≈ 22.1 is inside it.
    let result = analyze(&with_bmi_inputs(Some(170.0), Some(64.0)));
    assert_eq!(result.bmi.status, BiometricStatus::Borderline);
    let note = result.bmi.note.unwrap();
    assert_eq!(note.key, BMI_BORDERLINE_NOTE);
    assert_eq!(note.threshold, 23.0);

    let below = analyze(&with_bmi_inputs(Some(170.0), Some(63.0)));
    assert_eq!(below.bmi.status, BiometricStatus::Healthy);
}

#[test]
fn high_risk_bmi() {
    let result = analyze(&with_bmi_inputs(Some(160.0), Some(60.0)));
    assert_eq!(result.bmi.value, 23.4);
    assert_eq!(result.bmi.status, BiometricStatus::HighRisk);
    assert!(result.bmi.note.is_none());
}

#[test]
fn missing_measurements_are_healthy() {
    for (height, weight) in [
        (None, Some(70.0)),
        (Some(170.0), None),
        (Some(0.0), Some(70.0)),
        (Some(170.0), Some(0.0)),
    ] {
        let result = analyze(&with_bmi_inputs(height, weight));
        assert_eq!(result.bmi.value, 0.0);
        assert_eq!(result.bmi.status, BiometricStatus::Healthy);
    }
}

#[test]
fn waist_thresholds_by_sex() {
    // 34 in = 86.36 cm.
    let mut profile = PatientProfile {
        waist_circumference: 34.0,
        ..base_profile()
    };
    let male = analyze(&profile);
    assert_eq!(male.waist.status, BiometricStatus::Borderline);
    let note = male.waist.note.unwrap();
    assert_eq!(note.key, WAIST_BORDERLINE_NOTE);
    assert_eq!(note.threshold, 35.4);

    profile.sex = Some(Sex::Female);
    let female = analyze(&profile);
    assert_eq!(female.waist.status, BiometricStatus::HighRisk);
    assert_eq!(female.waist.value, 34.0);
}

#[test]
fn female_borderline_waist() {
    // 30 in = 76.2 cm, within 95% of 80 cm.
    let profile = PatientProfile {
        sex: Some(Sex::Female),
        waist_circumference: 30.0,
        ..base_profile()
    };
    let result = analyze(&profile);
    assert_eq!(result.waist.status, BiometricStatus::Borderline);
    assert_eq!(result.waist.note.unwrap().threshold, 31.5);
}

#[test]
fn zero_waist_is_healthy() {
    let profile = PatientProfile {
        waist_circumference: 0.0,
        ..base_profile()
    };
    assert_eq!(analyze(&profile).waist.status, BiometricStatus::Healthy);
}
