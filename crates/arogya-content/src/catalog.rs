//! Message catalogs: turn the engine's keys into text a patient can read.

use arogya_core::models::recommendation::{Recommendation, RecommendationKey};
use serde::Serialize;

/// Category shown for a recommendation key the catalog does not know.
pub const UNKNOWN_CATEGORY: &str = "Info";
/// Reason shown for a recommendation key the catalog does not know.
pub const UNKNOWN_RECOMMENDATION_REASON: &str = "Reason not available";
/// Reason shown when the recommendation is known but its reason is not.
pub const UNKNOWN_REASON: &str = "Consult your doctor for personalized advice.";

/// Display strings for one recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayContent {
    pub category: String,
    pub test: String,
    pub frequency: String,
    pub reason: String,
}

/// Extra material shown when a recommendation is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetailBlock {
    Text { title: String, body: String },
    /// Name of an interactive widget the front end knows how to draw.
    Interactive { component: String },
}

/// A source of display text for message keys, reason keys and
/// recommendation details.
pub trait ContentCatalog: Send + Sync {
    /// Text for a message key, if the catalog has one.
    fn message(&self, key: &str) -> Option<&str>;

    /// Text for a reason key, if the catalog has one.
    fn reason(&self, reason_key: &str) -> Option<&str>;

    /// Detail blocks for a recommendation key. Empty when there are none.
    fn details(&self, key: &str) -> Vec<DetailBlock>;

    /// Text for a message key, or the key itself when it is unknown.
    fn text(&self, key: &str) -> String {
        self.message(key).unwrap_or(key).to_string()
    }

    /// Display strings for a recommendation key and reason key, using the
    /// key's default category, test and frequency.
    fn resolve(&self, key: &str, reason_key: &str) -> DisplayContent {
        let Some(rec) = RecommendationKey::from_str_key(key) else {
            tracing::debug!(key, "unknown recommendation key");
            return DisplayContent {
                category: UNKNOWN_CATEGORY.to_string(),
                test: key.to_string(),
                frequency: String::new(),
                reason: UNKNOWN_RECOMMENDATION_REASON.to_string(),
            };
        };

        DisplayContent {
            category: self.text(rec.category_key()),
            test: self.text(&rec.test_key()),
            frequency: self.text(&rec.frequency_key()),
            reason: self.reason(reason_key).unwrap_or(UNKNOWN_REASON).to_string(),
        }
    }

    /// Display strings for a recommendation as the engine emitted it. Unlike
    /// [`resolve`](Self::resolve) this honors the recommendation's own
    /// frequency, which the engine raises for elevated scores.
    fn display(&self, rec: &Recommendation) -> DisplayContent {
        DisplayContent {
            category: self.text(&rec.category_key),
            test: self.text(&rec.test),
            frequency: self.text(&rec.frequency),
            reason: self
                .reason(rec.reason.as_str())
                .unwrap_or(UNKNOWN_REASON)
                .to_string(),
        }
    }
}

/// The built-in English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl ContentCatalog for English {
    fn message(&self, key: &str) -> Option<&str> {
        lookup(MESSAGES, key)
    }

    fn reason(&self, reason_key: &str) -> Option<&str> {
        lookup(REASONS, reason_key)
    }

    fn details(&self, key: &str) -> Vec<DetailBlock> {
        let component = match RecommendationKey::from_str_key(key) {
            Some(RecommendationKey::Bp) => "AnimatedHeart",
            Some(RecommendationKey::Sugar) => "AnimatedBloodSugar",
            _ => return Vec::new(),
        };
        vec![DetailBlock::Interactive {
            component: component.to_string(),
        }]
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const MESSAGES: &[(&str, &str)] = &[
    // Categories
    ("rec_cat_cardio", "Heart Health"),
    ("rec_cat_metabolic", "Metabolic Health"),
    ("rec_cat_cancer", "Cancer Screening"),
    ("rec_cat_womens", "Women's Health"),
    ("rec_cat_mens", "Men's Health"),
    ("rec_cat_digestive", "Digestive Health"),
    ("rec_cat_respiratory", "Lung Health"),
    ("rec_cat_liver", "Liver Health"),
    ("rec_cat_preventive", "Prevention"),
    ("rec_cat_wellbeing", "Wellbeing"),
    // Tests
    ("rec_test_bp", "Blood Pressure Check"),
    ("rec_test_sugar", "Blood Sugar Test (FBS / HbA1c)"),
    ("rec_test_diabetic_retinopathy", "Dilated Eye Examination"),
    ("rec_test_diabetic_foot", "Diabetic Foot Examination"),
    ("rec_test_diabetic_kidney", "Kidney Function Tests (uACR and eGFR)"),
    ("rec_test_oral", "Oral Visual Examination"),
    ("rec_test_lung", "Low-Dose CT Scan of the Chest"),
    ("rec_test_cervix", "Cervical Screening (VIA / Pap Smear / HPV Test)"),
    ("rec_test_breast_general", "Mammogram"),
    ("rec_test_breast_cbe", "Clinical Breast Examination"),
    ("rec_test_prostate", "PSA Test Discussion"),
    ("rec_test_colon_general", "Colorectal Screening (FIT / Colonoscopy)"),
    ("rec_test_occupational_lung", "Chest X-Ray and Spirometry"),
    ("rec_test_pulmonologist_consult", "Pulmonologist Consultation"),
    ("rec_test_gastric_screening", "Baseline Gastric Check"),
    ("rec_test_liver_hep", "Liver Function Tests and Ultrasound"),
    ("rec_test_hpv_prevention", "HPV Vaccination"),
    ("rec_test_lifestyle", "Lifestyle Counselling"),
    (
        "rec_test_comprehensive_lung_assessment",
        "Comprehensive Lung Assessment (Spirometry, Chest X-Ray, Specialist Review)",
    ),
    (
        "rec_test_metabolic_syndrome_protocol",
        "Metabolic Syndrome Management Plan",
    ),
    // Frequencies
    ("rec_freq_bp_normal", "Once a year"),
    ("rec_freq_bp_high", "Every 3 to 6 months"),
    ("rec_freq_sugar", "Once a year"),
    ("rec_freq_diabetic_retinopathy", "Once a year"),
    ("rec_freq_diabetic_foot", "At every visit, at least once a year"),
    ("rec_freq_diabetic_kidney", "Once a year"),
    ("rec_freq_oral", "Once a year"),
    ("rec_freq_lung", "Once a year"),
    ("rec_freq_cervix", "Every 5 years"),
    ("rec_freq_breast_general", "Every 1 to 2 years"),
    ("rec_freq_breast_cbe", "Once a year"),
    ("rec_freq_prostate", "Discuss with your doctor"),
    ("rec_freq_colon_general", "FIT yearly, or colonoscopy every 10 years"),
    ("rec_freq_occupational_lung", "Every 2 years"),
    ("rec_freq_pulmonologist_consult", "As advised by your doctor"),
    ("rec_freq_gastric_screening", "Once, then as advised"),
    ("rec_freq_liver_hep", "Every 6 months"),
    ("rec_freq_hpv_prevention", "Complete the full course"),
    ("rec_freq_lifestyle", "Ongoing"),
    ("rec_freq_comprehensive_lung_assessment", "As soon as possible"),
    ("rec_freq_metabolic_syndrome_protocol", "Review every 3 months"),
    // Risk bands
    ("cbac_low", "Low risk"),
    ("cbac_medium", "Moderate risk"),
    ("cbac_high", "High risk"),
    // Biometric status and notes
    ("status_healthy", "Healthy"),
    ("status_borderline", "Borderline"),
    ("status_high_risk", "High risk"),
    (
        "borderline_note_bmi",
        "Your BMI is close to the high-risk threshold of",
    ),
    (
        "borderline_note_waist",
        "Your waist measurement is close to the high-risk threshold (inches) of",
    ),
    // Insights
    ("positive_finding_activity", "You keep physically active."),
    ("positive_finding_no_smoking", "You do not use tobacco."),
    ("positive_finding_low_salt", "You keep your salt intake low."),
    ("positive_finding_no_alcohol", "You do not drink alcohol."),
    ("positive_finding_healthy_bmi", "Your BMI is in the healthy range."),
    ("risk_insight_smoking", "Tobacco use"),
    ("risk_insight_obesity", "Body weight above the healthy range"),
    ("risk_insight_waist", "High waist circumference"),
    ("risk_insight_sedentary", "Low physical activity"),
    ("risk_insight_alcohol", "Frequent alcohol use"),
    ("risk_insight_salt", "High salt intake"),
    ("risk_insight_family_history", "Family history of disease"),
    ("risk_insight_biomass", "Smoke from biomass cooking fuel"),
    // Alert
    (
        "lifestyle_alert",
        "Your habits or family history put you at higher risk than your score suggests. Talk to a doctor early.",
    ),
];

const REASONS: &[(&str, &str)] = &[
    (
        "bp_reason",
        "Recommended for all adults over 30 to monitor for high blood pressure.",
    ),
    (
        "sugar_reason",
        "Recommended for all adults over 30 to screen for diabetes and pre-diabetes.",
    ),
    (
        "reason_diabetic_retinopathy",
        "Essential for detecting diabetic retinopathy, a leading cause of vision loss.",
    ),
    (
        "reason_diabetic_foot",
        "Crucial for early detection of ulcers and nerve damage.",
    ),
    (
        "reason_diabetic_kidney",
        "Necessary to monitor for diabetic nephropathy, a major cause of kidney failure.",
    ),
    (
        "oral_reason",
        "High risk due to tobacco use or observed oral patches.",
    ),
    (
        "lung_reason",
        "Recommended for current or former heavy smokers aged 50–80 to screen for lung cancer.",
    ),
    (
        "cervix_reason",
        "Recommended for women aged 30–65 to screen for cervical cancer.",
    ),
    (
        "breast_general_reason",
        "Recommended for women aged 40–74 to screen for breast cancer.",
    ),
    (
        "breast_general_high_risk_reason",
        "Earlier screening is recommended due to family history, genetic ancestry, or other risk factors.",
    ),
    (
        "breast_general_high_risk_reason_age",
        "Earlier screening is critical due to a close relative being diagnosed under age 50.",
    ),
    (
        "breast_cbe_reason",
        "Recommended as part of an annual check-up for women over 30.",
    ),
    (
        "prostate_reason",
        "Recommended for men to discuss with their doctor, typically starting at age 45.",
    ),
    (
        "prostate_high_risk_reason",
        "Earlier screening is critical due to a family history of prostate cancer.",
    ),
    (
        "prostate_high_risk_reason_age",
        "Earlier screening is critical due to a close relative being diagnosed with prostate cancer under age 50.",
    ),
    (
        "colon_general_reason",
        "Recommended for adults aged 45–75 to screen for colorectal cancer.",
    ),
    (
        "colon_general_high_risk_reason",
        "Earlier screening is recommended due to a family history of colon cancer.",
    ),
    (
        "colon_general_high_risk_reason_age",
        "Earlier screening is critical due to a close relative being diagnosed under age 50.",
    ),
    (
        "colon_general_high_risk_reason_uterine",
        "Earlier screening is recommended. A family history of uterine cancer can increase colorectal cancer risk (Lynch syndrome).",
    ),
    (
        "occupational_lung_reason",
        "Recommended due to occupational exposure to dust (biomass fuel, marble/mining).",
    ),
    (
        "pulmonologist_consult_reason",
        "Multiple risk factors warrant a pulmonologist evaluation.",
    ),
    (
        "gastric_screening_reason",
        "A baseline check is advised due to a high-salt diet, a risk factor for stomach issues.",
    ),
    (
        "liver_hep_reason",
        "Regular monitoring is crucial for individuals with a history of Hepatitis B or C.",
    ),
    (
        "hpv_prevention_reason",
        "Vaccination can prevent HPV-related cancers. Recommended if not fully vaccinated.",
    ),
    (
        "lifestyle_reason",
        "General advice for improving diet, activity, and habits to reduce long-term health risks.",
    ),
    (
        "comprehensive_lung_assessment_reason",
        "Combined occupational and domestic exposure requires specialist assessment.",
    ),
    (
        "metabolic_syndrome_protocol_reason",
        "Multiple metabolic risk factors require a holistic lifestyle-based approach.",
    ),
];
