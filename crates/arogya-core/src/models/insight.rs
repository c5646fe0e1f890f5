use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single highlighted observation about the patient's habits or biometrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Insight {
    /// Stable identifier, e.g. `smoking`, `healthy_bmi`.
    pub key: String,
    /// Message key of the display label.
    pub label_key: String,
}

/// The best thing the patient is doing plus up to two areas to work on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrimaryInsights {
    pub positive_finding: Option<Insight>,
    pub focus_areas: Vec<Insight>,
}
