//! arogya-rules
//!
//! The NCD screening engine. Pure functions only: a profile goes in, a
//! scored and prioritized set of screening recommendations comes out.
//! No I/O and no shared state.

pub mod alert;
pub mod biometrics;
pub mod consolidate;
pub mod derive;
pub mod engine;
pub mod facts;
pub mod insights;
pub mod priority;
pub mod rules;
pub mod scoring;
pub mod thresholds;

use arogya_core::models::recommendation::RecommendationKey;

use facts::{Facts, Finding};

pub use engine::{analyze, analyze_at, current_year};

/// Trait implemented by each screening rule.
pub trait ScreeningRule: Send + Sync {
    /// The recommendation this rule produces.
    fn key(&self) -> RecommendationKey;

    /// Decide whether the recommendation applies, and why.
    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding>;
}

/// Return all registered rules in derivation order.
///
/// The order is significant: final sorting is stable within a priority
/// tier, so it decides how recommendations are listed.
pub fn all_rules() -> Vec<Box<dyn ScreeningRule>> {
    vec![
        Box::new(rules::cardiometabolic::BloodPressure),
        Box::new(rules::cardiometabolic::BloodSugar),
        Box::new(rules::cardiometabolic::DiabeticRetinopathy),
        Box::new(rules::cardiometabolic::DiabeticFoot),
        Box::new(rules::cardiometabolic::DiabeticKidney),
        Box::new(rules::cancer::Oral),
        Box::new(rules::cancer::LungCt),
        Box::new(rules::cancer::Cervix),
        Box::new(rules::cancer::Mammogram),
        Box::new(rules::cancer::BreastExam),
        Box::new(rules::cancer::Prostate),
        Box::new(rules::cancer::Colorectal),
        Box::new(rules::respiratory::OccupationalLung),
        Box::new(rules::respiratory::PulmonologistConsult),
        Box::new(rules::preventive::GastricScreening),
        Box::new(rules::preventive::LiverHepatitis),
        Box::new(rules::preventive::HpvPrevention),
        Box::new(rules::preventive::Lifestyle),
    ]
}

/// Look up a rule by the recommendation it produces.
pub fn get_rule(key: RecommendationKey) -> Option<Box<dyn ScreeningRule>> {
    all_rules().into_iter().find(|r| r.key() == key)
}
