mod common;

use std::collections::HashSet;

use arogya_core::models::recommendation::RecommendationKey;
use arogya_rules::facts::Facts;
use arogya_rules::{all_rules, analyze, analyze_at, current_year, get_rule};

use common::{YEAR, base_profile};

#[test]
fn rule_keys_are_unique_and_ordered() {
    let rules = all_rules();
    let keys: Vec<_> = rules.iter().map(|r| r.key()).collect();
    let unique: HashSet<_> = keys.iter().copied().collect();
    assert_eq!(unique.len(), keys.len());
    assert_eq!(keys.first(), Some(&RecommendationKey::Bp));
    assert_eq!(keys.last(), Some(&RecommendationKey::Lifestyle));
}

#[test]
fn composite_pathways_have_no_rule() {
    assert!(get_rule(RecommendationKey::ComprehensiveLungAssessment).is_none());
    assert!(get_rule(RecommendationKey::MetabolicSyndromeProtocol).is_none());
}

#[test]
fn lookup_by_key() {
    let rule = get_rule(RecommendationKey::Lifestyle).unwrap();
    assert_eq!(rule.key(), RecommendationKey::Lifestyle);

    let profile = base_profile();
    assert!(rule.evaluate(&Facts::new(&profile, YEAR)).is_some());
}

#[test]
fn analyze_uses_the_current_year() {
    assert!(current_year() >= 2024);
    let profile = base_profile();
    assert_eq!(analyze(&profile), analyze_at(&profile, current_year()));
}
