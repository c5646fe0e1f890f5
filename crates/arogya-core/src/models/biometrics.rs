use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BiometricStatus {
    Healthy,
    /// Within 95–100% of the high-risk threshold.
    Borderline,
    HighRisk,
}

/// Explains a borderline reading: a message key plus the threshold it is
/// measured against, in the unit the patient entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiometricNote {
    pub key: String,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiometricReading {
    /// BMI in kg/m², or waist in inches.
    pub value: f64,
    pub status: BiometricStatus,
    pub note: Option<BiometricNote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiometricAnalysis {
    pub bmi: BiometricReading,
    pub waist: BiometricReading,
}
