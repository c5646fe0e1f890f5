use arogya_core::models::condition::Condition;
use arogya_core::models::profile::SmokingStatus;
use arogya_core::models::recommendation::{Reason, RecommendationKey};

use crate::ScreeningRule;
use crate::facts::{Facts, Finding, has_early_onset, risk_adjusted_start_age};
use crate::thresholds::{
    BREAST_CBE_MIN_AGE, BREAST_SCREENING_HIGH_RISK_MIN_AGE, BREAST_SCREENING_MAX_AGE,
    BREAST_SCREENING_MIN_AGE, CERVICAL_SCREENING_MAX_AGE, CERVICAL_SCREENING_MIN_AGE,
    COLON_SCREENING_HIGH_RISK_MIN_AGE, COLON_SCREENING_MAX_AGE, COLON_SCREENING_MIN_AGE,
    PROSTATE_SCREENING_HIGH_RISK_MIN_AGE, PROSTATE_SCREENING_MIN_AGE,
};

/// Relatives with these cancers raise breast cancer risk (BRCA-linked).
const BREAST_FAMILY: [Condition; 4] = [
    Condition::BreastCancer,
    Condition::OvarianCancer,
    Condition::MaleBreastCancer,
    Condition::PancreaticCancer,
];

/// Colon and uterine cancer cluster in Lynch syndrome.
const COLON_FAMILY: [Condition; 2] = [Condition::ColonCancer, Condition::UterineCancer];

/// Oral visual examination for tobacco users or anyone with visible patches.
pub struct Oral;

impl ScreeningRule for Oral {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::Oral
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        let profile = facts.profile;
        (profile.uses_smokeless_tobacco
            || profile.has_oral_signs
            || profile.smoking_status == SmokingStatus::Current)
            .then(|| Finding::new(Reason::OralReason))
    }
}

/// Low-dose CT for heavy smokers aged 50–80 who still smoke or quit within
/// the last 15 years.
pub struct LungCt;

impl ScreeningRule for LungCt {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::Lung
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        facts
            .lung_eligible
            .then(|| Finding::new(Reason::LungReason))
    }
}

pub struct Cervix;

impl ScreeningRule for Cervix {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::Cervix
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        (facts.profile.is_female()
            && facts.age_between(CERVICAL_SCREENING_MIN_AGE, CERVICAL_SCREENING_MAX_AGE))
        .then(|| Finding::new(Reason::CervixReason))
    }
}

/// Mammography for women 40–74. A family history of breast-linked cancers
/// brings the start age forward.
pub struct Mammogram;

impl ScreeningRule for Mammogram {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::BreastGeneral
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        if !facts.profile.is_female() {
            return None;
        }

        let relatives: Vec<_> = facts.relatives_with(&BREAST_FAMILY).collect();
        let high_risk = !relatives.is_empty();

        let standard = facts.age_between(BREAST_SCREENING_MIN_AGE, BREAST_SCREENING_MAX_AGE);
        let early = high_risk && {
            let start = risk_adjusted_start_age(
                relatives.iter().copied(),
                BREAST_SCREENING_HIGH_RISK_MIN_AGE,
            );
            facts.age_between(start, BREAST_SCREENING_MAX_AGE)
        };
        if !(standard || early) {
            return None;
        }

        if !high_risk {
            return Some(Finding::new(Reason::BreastGeneralReason));
        }
        if has_early_onset(relatives.iter().copied()) {
            Some(Finding::high_risk(Reason::BreastGeneralHighRiskReasonAge))
        } else {
            Some(Finding::high_risk(Reason::BreastGeneralHighRiskReason))
        }
    }
}

/// Clinical breast examination as part of the annual check-up from 30.
pub struct BreastExam;

impl ScreeningRule for BreastExam {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::BreastCbe
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        (facts.profile.is_female() && facts.age_at_least(BREAST_CBE_MIN_AGE))
            .then(|| Finding::new(Reason::BreastCbeReason))
    }
}

/// PSA discussion for men from 45, earlier with a family history of
/// prostate cancer. There is no upper age limit.
pub struct Prostate;

impl ScreeningRule for Prostate {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::Prostate
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        if !facts.profile.is_male() {
            return None;
        }

        let relatives: Vec<_> = facts
            .relatives_with(&[Condition::ProstateCancer])
            .collect();
        let high_risk = !relatives.is_empty();

        let standard = facts.age_at_least(PROSTATE_SCREENING_MIN_AGE);
        let early = high_risk && {
            let start = risk_adjusted_start_age(
                relatives.iter().copied(),
                PROSTATE_SCREENING_HIGH_RISK_MIN_AGE,
            );
            facts.age_at_least(start)
        };
        if !(standard || early) {
            return None;
        }

        if !high_risk {
            return Some(Finding::new(Reason::ProstateReason));
        }
        if has_early_onset(relatives.iter().copied()) {
            Some(Finding::high_risk(Reason::ProstateHighRiskReasonAge))
        } else {
            Some(Finding::high_risk(Reason::ProstateHighRiskReason))
        }
    }
}

/// Colorectal screening for 45–75. Colon or uterine cancer in the family
/// brings the start forward; only colon diagnoses move it below 40.
pub struct Colorectal;

impl ScreeningRule for Colorectal {
    fn key(&self) -> RecommendationKey {
        RecommendationKey::ColonGeneral
    }

    fn evaluate(&self, facts: &Facts<'_>) -> Option<Finding> {
        let relatives: Vec<_> = facts.relatives_with(&COLON_FAMILY).collect();
        let high_risk = !relatives.is_empty();

        let standard = facts.age_between(COLON_SCREENING_MIN_AGE, COLON_SCREENING_MAX_AGE);
        let early = high_risk && {
            let colon_only = relatives
                .iter()
                .copied()
                .filter(|h| h.known_condition() == Some(Condition::ColonCancer));
            let start = risk_adjusted_start_age(colon_only, COLON_SCREENING_HIGH_RISK_MIN_AGE);
            facts.age_between(start, COLON_SCREENING_MAX_AGE)
        };
        if !(standard || early) {
            return None;
        }

        if !high_risk {
            return Some(Finding::new(Reason::ColonGeneralReason));
        }
        let uterine = relatives
            .iter()
            .any(|h| h.known_condition() == Some(Condition::UterineCancer));
        let reason = if has_early_onset(relatives.iter().copied()) {
            Reason::ColonGeneralHighRiskReasonAge
        } else if uterine {
            Reason::ColonGeneralHighRiskReasonUterine
        } else {
            Reason::ColonGeneralHighRiskReason
        };
        Some(Finding::high_risk(reason))
    }
}
