use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stable identifier of a screening recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationKey {
    Bp,
    Sugar,
    DiabeticRetinopathy,
    DiabeticFoot,
    DiabeticKidney,
    Oral,
    Lung,
    Cervix,
    BreastGeneral,
    BreastCbe,
    Prostate,
    ColonGeneral,
    OccupationalLung,
    PulmonologistConsult,
    GastricScreening,
    LiverHep,
    HpvPrevention,
    Lifestyle,
    ComprehensiveLungAssessment,
    MetabolicSyndromeProtocol,
}

impl RecommendationKey {
    pub const ALL: [RecommendationKey; 20] = [
        RecommendationKey::Bp,
        RecommendationKey::Sugar,
        RecommendationKey::DiabeticRetinopathy,
        RecommendationKey::DiabeticFoot,
        RecommendationKey::DiabeticKidney,
        RecommendationKey::Oral,
        RecommendationKey::Lung,
        RecommendationKey::Cervix,
        RecommendationKey::BreastGeneral,
        RecommendationKey::BreastCbe,
        RecommendationKey::Prostate,
        RecommendationKey::ColonGeneral,
        RecommendationKey::OccupationalLung,
        RecommendationKey::PulmonologistConsult,
        RecommendationKey::GastricScreening,
        RecommendationKey::LiverHep,
        RecommendationKey::HpvPrevention,
        RecommendationKey::Lifestyle,
        RecommendationKey::ComprehensiveLungAssessment,
        RecommendationKey::MetabolicSyndromeProtocol,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecommendationKey::Bp => "bp",
            RecommendationKey::Sugar => "sugar",
            RecommendationKey::DiabeticRetinopathy => "diabetic_retinopathy",
            RecommendationKey::DiabeticFoot => "diabetic_foot",
            RecommendationKey::DiabeticKidney => "diabetic_kidney",
            RecommendationKey::Oral => "oral",
            RecommendationKey::Lung => "lung",
            RecommendationKey::Cervix => "cervix",
            RecommendationKey::BreastGeneral => "breast_general",
            RecommendationKey::BreastCbe => "breast_cbe",
            RecommendationKey::Prostate => "prostate",
            RecommendationKey::ColonGeneral => "colon_general",
            RecommendationKey::OccupationalLung => "occupational_lung",
            RecommendationKey::PulmonologistConsult => "pulmonologist_consult",
            RecommendationKey::GastricScreening => "gastric_screening",
            RecommendationKey::LiverHep => "liver_hep",
            RecommendationKey::HpvPrevention => "hpv_prevention",
            RecommendationKey::Lifestyle => "lifestyle",
            RecommendationKey::ComprehensiveLungAssessment => "comprehensive_lung_assessment",
            RecommendationKey::MetabolicSyndromeProtocol => "metabolic_syndrome_protocol",
        }
    }

    pub fn from_str_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Message key of the category this test is filed under.
    pub fn category_key(self) -> &'static str {
        use RecommendationKey::*;
        match self {
            Bp => "rec_cat_cardio",
            Sugar | DiabeticRetinopathy | DiabeticFoot | DiabeticKidney
            | MetabolicSyndromeProtocol => "rec_cat_metabolic",
            Oral | Lung => "rec_cat_cancer",
            Cervix | BreastGeneral | BreastCbe => "rec_cat_womens",
            Prostate => "rec_cat_mens",
            ColonGeneral | GastricScreening => "rec_cat_digestive",
            OccupationalLung | PulmonologistConsult | ComprehensiveLungAssessment => {
                "rec_cat_respiratory"
            }
            LiverHep => "rec_cat_liver",
            HpvPrevention => "rec_cat_preventive",
            Lifestyle => "rec_cat_wellbeing",
        }
    }

    /// Message key naming the test, e.g. `rec_test_bp`.
    pub fn test_key(self) -> String {
        format!("rec_test_{}", self.as_str())
    }

    /// Default message key for how often to repeat the test.
    pub fn frequency_key(self) -> String {
        match self {
            RecommendationKey::Bp => FREQ_BP_NORMAL.to_string(),
            other => format!("rec_freq_{}", other.as_str()),
        }
    }
}

impl std::fmt::Display for RecommendationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BP check frequency for scores below the escalation threshold.
pub const FREQ_BP_NORMAL: &str = "rec_freq_bp_normal";
/// BP check frequency once the CBAC score is elevated.
pub const FREQ_BP_HIGH: &str = "rec_freq_bp_high";

/// Why a recommendation was made. Resolved to display text by the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Reason {
    BpReason,
    SugarReason,
    ReasonDiabeticRetinopathy,
    ReasonDiabeticFoot,
    ReasonDiabeticKidney,
    OralReason,
    LungReason,
    CervixReason,
    BreastGeneralReason,
    BreastGeneralHighRiskReason,
    BreastGeneralHighRiskReasonAge,
    BreastCbeReason,
    ProstateReason,
    ProstateHighRiskReason,
    ProstateHighRiskReasonAge,
    ColonGeneralReason,
    ColonGeneralHighRiskReason,
    ColonGeneralHighRiskReasonAge,
    ColonGeneralHighRiskReasonUterine,
    OccupationalLungReason,
    PulmonologistConsultReason,
    GastricScreeningReason,
    LiverHepReason,
    HpvPreventionReason,
    LifestyleReason,
    ComprehensiveLungAssessmentReason,
    MetabolicSyndromeProtocolReason,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::BpReason => "bp_reason",
            Reason::SugarReason => "sugar_reason",
            Reason::ReasonDiabeticRetinopathy => "reason_diabetic_retinopathy",
            Reason::ReasonDiabeticFoot => "reason_diabetic_foot",
            Reason::ReasonDiabeticKidney => "reason_diabetic_kidney",
            Reason::OralReason => "oral_reason",
            Reason::LungReason => "lung_reason",
            Reason::CervixReason => "cervix_reason",
            Reason::BreastGeneralReason => "breast_general_reason",
            Reason::BreastGeneralHighRiskReason => "breast_general_high_risk_reason",
            Reason::BreastGeneralHighRiskReasonAge => "breast_general_high_risk_reason_age",
            Reason::BreastCbeReason => "breast_cbe_reason",
            Reason::ProstateReason => "prostate_reason",
            Reason::ProstateHighRiskReason => "prostate_high_risk_reason",
            Reason::ProstateHighRiskReasonAge => "prostate_high_risk_reason_age",
            Reason::ColonGeneralReason => "colon_general_reason",
            Reason::ColonGeneralHighRiskReason => "colon_general_high_risk_reason",
            Reason::ColonGeneralHighRiskReasonAge => "colon_general_high_risk_reason_age",
            Reason::ColonGeneralHighRiskReasonUterine => "colon_general_high_risk_reason_uterine",
            Reason::OccupationalLungReason => "occupational_lung_reason",
            Reason::PulmonologistConsultReason => "pulmonologist_consult_reason",
            Reason::GastricScreeningReason => "gastric_screening_reason",
            Reason::LiverHepReason => "liver_hep_reason",
            Reason::HpvPreventionReason => "hpv_prevention_reason",
            Reason::LifestyleReason => "lifestyle_reason",
            Reason::ComprehensiveLungAssessmentReason => "comprehensive_lung_assessment_reason",
            Reason::MetabolicSyndromeProtocolReason => "metabolic_syndrome_protocol_reason",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    High,
    Normal,
}

/// One screening recommendation. Every text field holds a message key;
/// the content layer turns keys into display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Recommendation {
    pub key: RecommendationKey,
    pub category_key: String,
    pub test: String,
    pub frequency: String,
    pub reason: Reason,
    pub priority: Priority,
}

impl Recommendation {
    /// A recommendation with the key's default category, test and frequency.
    pub fn new(key: RecommendationKey, reason: Reason, priority: Priority) -> Self {
        Self {
            key,
            category_key: key.category_key().to_string(),
            test: key.test_key(),
            frequency: key.frequency_key(),
            reason,
            priority,
        }
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}
