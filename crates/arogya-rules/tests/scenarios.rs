//! End-to-end pipeline checks on representative patients.

mod common;

use arogya_core::models::analysis::{DISCLAIMER, RiskBand};
use arogya_core::models::condition::Condition;
use arogya_core::models::profile::{
    AlcoholFrequency, CookingFuel, HepatitisHistory, HpvVaccineStatus, PatientProfile, Sex,
    SmokingStatus,
};
use arogya_core::models::recommendation::{
    FREQ_BP_HIGH, FREQ_BP_NORMAL, Priority, Reason, RecommendationKey,
};
use arogya_rules::analyze_at;

use common::{YEAR, base_profile, label, relative};

fn keys(result: &arogya_core::models::analysis::AnalysisResult) -> Vec<RecommendationKey> {
    result.recommendations.iter().map(|r| r.key).collect()
}

#[test]
fn metabolic_syndrome() {
    let profile = PatientProfile {
        name: "Rajesh".to_string(),
        age: Some(45),
        sex: Some(Sex::Male),
        height: Some(170.0),
        weight: Some(90.0),
        waist_circumference: 40.0,
        smoking_status: SmokingStatus::Current,
        smoking_sticks_per_day: 20.0,
        smoking_years: 20.0,
        personal_conditions: vec![label(Condition::HighBloodPressure)],
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    assert_eq!(result.cbac_score, 8);
    assert_eq!(result.risk_band(), RiskBand::High);

    assert_eq!(
        keys(&result),
        vec![
            RecommendationKey::Bp,
            RecommendationKey::Sugar,
            RecommendationKey::Oral,
            RecommendationKey::MetabolicSyndromeProtocol,
            RecommendationKey::Prostate,
            RecommendationKey::ColonGeneral,
            RecommendationKey::HpvPrevention,
            RecommendationKey::Lifestyle,
        ]
    );

    let bp = result.get(RecommendationKey::Bp).unwrap();
    assert_eq!(bp.priority, Priority::High);
    assert_eq!(bp.frequency, FREQ_BP_HIGH);
    assert_eq!(
        result.get(RecommendationKey::Sugar).unwrap().priority,
        Priority::High
    );
    assert_eq!(
        result
            .get(RecommendationKey::MetabolicSyndromeProtocol)
            .unwrap()
            .priority,
        Priority::High
    );
    assert!(!result.has_lifestyle_risk_alert);
    assert_eq!(result.disclaimer, DISCLAIMER);
}

#[test]
fn never_smoker_young_healthy() {
    let profile = PatientProfile {
        age: Some(25),
        hpv_vaccine_status: HpvVaccineStatus::Complete,
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    assert_eq!(result.cbac_score, 0);
    assert_eq!(result.risk_band(), RiskBand::Low);
    assert_eq!(keys(&result), vec![RecommendationKey::Lifestyle]);
    assert_eq!(result.recommendations[0].priority, Priority::Normal);
    assert!(!result.has_lifestyle_risk_alert);
}

#[test]
fn young_unvaccinated_adult_gets_hpv_advice() {
    let profile = PatientProfile {
        age: Some(25),
        ..base_profile()
    };
    let result = analyze_at(&profile, YEAR);
    assert_eq!(
        keys(&result),
        vec![RecommendationKey::HpvPrevention, RecommendationKey::Lifestyle]
    );
}

#[test]
fn hereditary_breast_risk() {
    let profile = PatientProfile {
        age: Some(32),
        sex: Some(Sex::Female),
        family_history: vec![relative(Condition::BreastCancer, Some(40))],
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    let breast = result.get(RecommendationKey::BreastGeneral).unwrap();
    assert_eq!(breast.reason, Reason::BreastGeneralHighRiskReasonAge);
    assert_eq!(breast.priority, Priority::High);
    // High-risk flag puts it ahead of the score-independent checks.
    assert_eq!(result.recommendations[0].key, RecommendationKey::BreastGeneral);

    assert!(result.has(RecommendationKey::Cervix));
    assert!(result.has(RecommendationKey::BreastCbe));
    assert!(result.has_lifestyle_risk_alert);
}

#[test]
fn former_smoker_lung_eligibility_lapse() {
    let profile = PatientProfile {
        age: Some(62),
        smoking_status: SmokingStatus::Former,
        smoking_sticks_per_day: 20.0,
        smoking_years: 25.0,
        quit_smoking_year: Some(YEAR - 20),
        ..base_profile()
    };
    assert_eq!(profile.pack_years(), 25.0);

    let result = analyze_at(&profile, YEAR);
    assert!(!result.has(RecommendationKey::Lung));
    assert!(!result.has(RecommendationKey::PulmonologistConsult));
}

#[test]
fn occupational_lung_risk_is_consolidated() {
    let profile = PatientProfile {
        age: Some(52),
        cooking_fuel_type: CookingFuel::Biomass,
        marble_mining_exposure: true,
        smoking_status: SmokingStatus::Former,
        smoking_sticks_per_day: 20.0,
        smoking_years: 15.0,
        quit_smoking_year: Some(2020),
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    assert_eq!(result.cbac_score, 4);
    assert_eq!(
        keys(&result),
        vec![
            RecommendationKey::Bp,
            RecommendationKey::Sugar,
            RecommendationKey::ComprehensiveLungAssessment,
            RecommendationKey::Prostate,
            RecommendationKey::ColonGeneral,
            RecommendationKey::Lifestyle,
        ]
    );
    assert!(!result.has(RecommendationKey::MetabolicSyndromeProtocol));
}

#[test]
fn lynch_syndrome_suspect() {
    let profile = PatientProfile {
        age: Some(42),
        family_history: vec![
            relative(Condition::ColonCancer, Some(45)),
            relative(Condition::UterineCancer, Some(50)),
        ],
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    let colon = result.get(RecommendationKey::ColonGeneral).unwrap();
    assert_eq!(colon.reason, Reason::ColonGeneralHighRiskReasonAge);
    assert_eq!(colon.priority, Priority::High);
    assert!(!result.has(RecommendationKey::Prostate));

    // Start age is 35: one year younger and the rule no longer fires.
    let younger = PatientProfile {
        age: Some(34),
        ..profile.clone()
    };
    assert!(!analyze_at(&younger, YEAR).has(RecommendationKey::ColonGeneral));
    let at_start = PatientProfile {
        age: Some(35),
        ..profile
    };
    assert!(analyze_at(&at_start, YEAR).has(RecommendationKey::ColonGeneral));
}

#[test]
fn diabetic_management() {
    let profile = PatientProfile {
        age: Some(55),
        sex: Some(Sex::Female),
        height: Some(160.0),
        weight: Some(80.0),
        personal_conditions: vec![label(Condition::DiabetesType2)],
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    assert_eq!(result.cbac_score, 7);
    assert!(!result.has(RecommendationKey::Sugar));
    assert!(!result.has(RecommendationKey::MetabolicSyndromeProtocol));
    for key in [
        RecommendationKey::DiabeticRetinopathy,
        RecommendationKey::DiabeticFoot,
        RecommendationKey::DiabeticKidney,
    ] {
        assert_eq!(result.get(key).unwrap().priority, Priority::High);
    }
    assert_eq!(
        result.get(RecommendationKey::ColonGeneral).unwrap().priority,
        Priority::Normal
    );
}

#[test]
fn oral_cancer_high_risk() {
    let profile = PatientProfile {
        age: Some(28),
        uses_smokeless_tobacco: true,
        smokeless_tobacco_products: vec!["gutka".to_string()],
        has_oral_signs: true,
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    assert_eq!(result.cbac_score, 2);
    assert_eq!(result.recommendations[0].key, RecommendationKey::Oral);
    assert_eq!(result.recommendations[0].priority, Priority::High);
    assert!(!result.has(RecommendationKey::Bp));
}

#[test]
fn liver_and_alcohol() {
    let profile = PatientProfile {
        age: Some(38),
        alcohol_frequency: AlcoholFrequency::High,
        hepatitis_history: HepatitisHistory::HepB,
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    assert_eq!(result.cbac_score, 2);
    assert_eq!(result.recommendations[0].key, RecommendationKey::LiverHep);
    let bp = result.get(RecommendationKey::Bp).unwrap();
    assert_eq!(bp.priority, Priority::Normal);
    assert_eq!(bp.frequency, FREQ_BP_NORMAL);
}

#[test]
fn lung_ct_eligible_heavy_smoker() {
    let profile = PatientProfile {
        age: Some(60),
        smoking_status: SmokingStatus::Current,
        smoking_sticks_per_day: 40.0,
        smoking_years: 30.0,
        ..base_profile()
    };

    let result = analyze_at(&profile, YEAR);
    let lung = result.get(RecommendationKey::Lung).unwrap();
    assert_eq!(lung.priority, Priority::High);
    assert_eq!(lung.reason, Reason::LungReason);
}

#[test]
fn missing_age_is_not_an_error() {
    let profile = PatientProfile {
        age: None,
        ..base_profile()
    };
    let result = analyze_at(&profile, YEAR);
    assert_eq!(result.cbac_score, 0);
    assert_eq!(keys(&result), vec![RecommendationKey::Lifestyle]);
}

#[test]
fn recommendation_message_keys() {
    let profile = PatientProfile {
        age: Some(45),
        ..base_profile()
    };
    let result = analyze_at(&profile, YEAR);
    let colon = result.get(RecommendationKey::ColonGeneral).unwrap();
    assert_eq!(colon.category_key, "rec_cat_digestive");
    assert_eq!(colon.test, "rec_test_colon_general");
    assert_eq!(colon.frequency, "rec_freq_colon_general");
}
