use arogya_core::models::biometrics::{
    BiometricAnalysis, BiometricNote, BiometricReading, BiometricStatus,
};
use arogya_core::models::profile::{CM_PER_INCH, PatientProfile};

use crate::thresholds::{BMI_NORMAL_UPPER, BORDERLINE_RATIO, waist_threshold_cm};

pub const BMI_BORDERLINE_NOTE: &str = "borderline_note_bmi";
pub const WAIST_BORDERLINE_NOTE: &str = "borderline_note_waist";

/// Classify BMI and waist circumference against the high-risk thresholds.
///
/// Missing or zero measurements produce a value of 0 and a healthy status
/// rather than an error.
pub fn analyze(profile: &PatientProfile) -> BiometricAnalysis {
    let bmi = profile.bmi().unwrap_or(0.0);
    let bmi_status = classify(bmi, BMI_NORMAL_UPPER);
    let bmi_note = (bmi_status == BiometricStatus::Borderline).then(|| BiometricNote {
        key: BMI_BORDERLINE_NOTE.to_string(),
        threshold: BMI_NORMAL_UPPER,
    });

    let threshold_cm = waist_threshold_cm(profile.is_male());
    let waist_status = classify(profile.waist_cm(), threshold_cm);
    let waist_note = (waist_status == BiometricStatus::Borderline).then(|| BiometricNote {
        key: WAIST_BORDERLINE_NOTE.to_string(),
        threshold: round1(threshold_cm / CM_PER_INCH),
    });

    BiometricAnalysis {
        bmi: BiometricReading {
            value: round1(bmi),
            status: bmi_status,
            note: bmi_note,
        },
        waist: BiometricReading {
            value: profile.waist_circumference,
            status: waist_status,
            note: waist_note,
        },
    }
}

fn classify(value: f64, threshold: f64) -> BiometricStatus {
    if value >= threshold {
        BiometricStatus::HighRisk
    } else if value >= threshold * BORDERLINE_RATIO {
        BiometricStatus::Borderline
    } else {
        BiometricStatus::Healthy
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
