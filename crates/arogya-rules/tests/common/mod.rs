#![allow(dead_code)]

use arogya_core::models::condition::Condition;
use arogya_core::models::profile::{FamilyHistoryCondition, PatientProfile, Sex};

pub const YEAR: i32 = 2026;

/// A 30-year-old man with unremarkable answers.
pub fn base_profile() -> PatientProfile {
    PatientProfile {
        name: "Test".to_string(),
        age: Some(30),
        sex: Some(Sex::Male),
        height: Some(170.0),
        weight: Some(65.0),
        waist_circumference: 32.0,
        ..Default::default()
    }
}

pub fn relative(condition: Condition, age: Option<u32>) -> FamilyHistoryCondition {
    FamilyHistoryCondition {
        condition: condition.label().to_string(),
        relative_age_at_diagnosis: age,
        relationship: None,
    }
}

pub fn label(condition: Condition) -> String {
    condition.label().to_string()
}
