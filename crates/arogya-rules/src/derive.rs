use arogya_core::models::recommendation::RecommendationKey;

use crate::all_rules;
use crate::facts::{Facts, Finding};

/// A recommendation that passed its eligibility rule but has no priority yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub key: RecommendationKey,
    pub finding: Finding,
}

/// Run every registered rule against the facts, in registry order.
/// Each key appears at most once.
pub fn derive(facts: &Facts<'_>) -> Vec<Candidate> {
    all_rules()
        .iter()
        .filter_map(|rule| {
            rule.evaluate(facts).map(|finding| Candidate {
                key: rule.key(),
                finding,
            })
        })
        .collect()
}
