use arogya_core::models::condition::Condition;
use arogya_core::models::profile::{FamilyHistoryCondition, PatientProfile, SmokingStatus};
use arogya_core::models::recommendation::Reason;

use crate::thresholds::{
    ABSOLUTE_MIN_HIGH_RISK_SCREENING_AGE, EARLY_ONSET_CANCER_AGE, FAMILY_ONSET_LEAD_YEARS,
    LUNG_SCREENING_MAX_AGE, LUNG_SCREENING_MIN_AGE, LUNG_SCREENING_MIN_PACK_YEARS,
    LUNG_SCREENING_YEARS_SINCE_QUIT,
};

/// Values derived once from a profile and shared by every rule.
#[derive(Debug, Clone)]
pub struct Facts<'a> {
    pub profile: &'a PatientProfile,
    pub age: Option<u32>,
    pub pack_years: f64,
    /// Family history with the "unsure" override already applied.
    pub family_history: &'a [FamilyHistoryCondition],
    pub is_diabetic: bool,
    pub lung_eligible: bool,
}

impl<'a> Facts<'a> {
    pub fn new(profile: &'a PatientProfile, reference_year: i32) -> Self {
        let age = profile.age;
        let pack_years = profile.pack_years();
        let years_since_quit = profile.years_since_quit(reference_year);

        let meets_lung_criteria = age.is_some_and(|a| {
            (LUNG_SCREENING_MIN_AGE..=LUNG_SCREENING_MAX_AGE).contains(&a)
        }) && pack_years >= LUNG_SCREENING_MIN_PACK_YEARS;
        let within_quit_window = match profile.smoking_status {
            SmokingStatus::Current => true,
            SmokingStatus::Former => {
                years_since_quit.is_some_and(|y| y <= LUNG_SCREENING_YEARS_SINCE_QUIT)
            }
            SmokingStatus::Never => false,
        };

        Self {
            profile,
            age,
            pack_years,
            family_history: profile.effective_family_history(),
            is_diabetic: profile.has_personal(Condition::DiabetesType2),
            lung_eligible: meets_lung_criteria && within_quit_window,
        }
    }

    /// Age is known and at least `min`.
    pub fn age_at_least(&self, min: u32) -> bool {
        self.age.is_some_and(|a| a >= min)
    }

    /// Age is known and within `min..=max`.
    pub fn age_between(&self, min: u32, max: u32) -> bool {
        self.age.is_some_and(|a| (min..=max).contains(&a))
    }

    /// Family history entries for any of `conditions`.
    pub fn relatives_with<'c>(
        &'c self,
        conditions: &'c [Condition],
    ) -> impl Iterator<Item = &'a FamilyHistoryCondition> + 'c {
        self.family_history
            .iter()
            .filter(|h| h.known_condition().is_some_and(|c| conditions.contains(&c)))
    }
}

/// The outcome of a rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub reason: Reason,
    /// Set by hereditary-risk branches; forces high priority.
    pub high_risk: bool,
}

impl Finding {
    pub fn new(reason: Reason) -> Self {
        Self {
            reason,
            high_risk: false,
        }
    }

    pub fn high_risk(reason: Reason) -> Self {
        Self {
            reason,
            high_risk: true,
        }
    }
}

/// Screening start age lowered by family history: ten years before the
/// youngest relative's diagnosis, never later than `default_start` and
/// never earlier than the absolute minimum.
pub fn risk_adjusted_start_age<'h>(
    relatives: impl IntoIterator<Item = &'h FamilyHistoryCondition>,
    default_start: u32,
) -> u32 {
    match relatives.into_iter().filter_map(|h| h.diagnosis_age()).min() {
        Some(youngest) => youngest
            .saturating_sub(FAMILY_ONSET_LEAD_YEARS)
            .min(default_start)
            .max(ABSOLUTE_MIN_HIGH_RISK_SCREENING_AGE),
        None => default_start,
    }
}

/// Whether any relative was diagnosed before the early-onset age.
pub fn has_early_onset<'h>(relatives: impl IntoIterator<Item = &'h FamilyHistoryCondition>) -> bool {
    relatives
        .into_iter()
        .filter_map(|h| h.diagnosis_age())
        .any(|age| age < EARLY_ONSET_CANCER_AGE)
}
