use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::{Recommendation, RecommendationKey};

/// Shown under every result.
pub const DISCLAIMER: &str = "Privacy First: No data is stored. Consult a nearby doctor for clinical advice.";

/// The engine's output for one profile. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisResult {
    /// Composite CBAC score, 0–10.
    pub cbac_score: u8,
    /// High priority first; derivation order within a tier.
    pub recommendations: Vec<Recommendation>,
    /// Early warning for younger patients, independent of the score.
    pub has_lifestyle_risk_alert: bool,
    pub disclaimer: String,
}

impl AnalysisResult {
    pub fn has(&self, key: RecommendationKey) -> bool {
        self.recommendations.iter().any(|r| r.key == key)
    }

    pub fn get(&self, key: RecommendationKey) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.key == key)
    }

    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_score(self.cbac_score)
    }
}

/// Display banding of the CBAC score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    /// Score below 4.
    Low,
    /// Score 4–6.
    Medium,
    /// Score 7 and above.
    High,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => RiskBand::Low,
            4..=6 => RiskBand::Medium,
            _ => RiskBand::High,
        }
    }

    /// Message key of the band label.
    pub fn label_key(self) -> &'static str {
        match self {
            RiskBand::Low => "cbac_low",
            RiskBand::Medium => "cbac_medium",
            RiskBand::High => "cbac_high",
        }
    }
}
