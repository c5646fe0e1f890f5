//! Clinical cutoffs used by the scoring and recommendation rules.
//!
//! Waist and BMI thresholds follow Asian-Indian metabolic standards; lung
//! screening follows USPSTF.

pub const CBAC_SCORE_MAX: u8 = 10;

/// Upper bounds (inclusive) of the 30–39, 40–49 and 50–59 CBAC age brackets.
pub const CBAC_AGE_BRACKET_LOW: u32 = 39;
pub const CBAC_AGE_BRACKET_MEDIUM: u32 = 49;
pub const CBAC_AGE_BRACKET_HIGH: u32 = 59;
pub const CBAC_AGE_MIN: u32 = 30;

/// CBAC score from which BP/sugar/cancer checks are escalated.
pub const ELEVATED_SCORE: u8 = 4;

pub const WAIST_MALE_HIGH_CM: f64 = 90.0;
pub const WAIST_FEMALE_HIGH_CM: f64 = 80.0;

pub const BMI_NORMAL_UPPER: f64 = 23.0;
pub const BMI_OVERWEIGHT_UPPER: f64 = 25.0;
pub const BMI_NORMAL_LOWER: f64 = 18.5;

/// Readings at or above this share of a threshold are borderline.
pub const BORDERLINE_RATIO: f64 = 0.95;

pub const BASELINE_SCREENING_MIN_AGE: u32 = 30;

pub const LUNG_SCREENING_MIN_AGE: u32 = 50;
pub const LUNG_SCREENING_MAX_AGE: u32 = 80;
pub const LUNG_SCREENING_MIN_PACK_YEARS: f64 = 20.0;
pub const LUNG_SCREENING_YEARS_SINCE_QUIT: i32 = 15;

pub const CERVICAL_SCREENING_MIN_AGE: u32 = 30;
pub const CERVICAL_SCREENING_MAX_AGE: u32 = 65;

pub const BREAST_SCREENING_MIN_AGE: u32 = 40;
pub const BREAST_SCREENING_MAX_AGE: u32 = 74;
pub const BREAST_SCREENING_HIGH_RISK_MIN_AGE: u32 = 30;
pub const BREAST_CBE_MIN_AGE: u32 = 30;

pub const COLON_SCREENING_MIN_AGE: u32 = 45;
pub const COLON_SCREENING_MAX_AGE: u32 = 75;
pub const COLON_SCREENING_HIGH_RISK_MIN_AGE: u32 = 40;

pub const PROSTATE_SCREENING_MIN_AGE: u32 = 45;
pub const PROSTATE_SCREENING_HIGH_RISK_MIN_AGE: u32 = 40;

/// Relative diagnosed before this age counts as early onset.
pub const EARLY_ONSET_CANCER_AGE: u32 = 50;
/// Screening starts this many years before the youngest relative's diagnosis.
pub const FAMILY_ONSET_LEAD_YEARS: u32 = 10;
/// No risk-adjusted screening starts earlier than this.
pub const ABSOLUTE_MIN_HIGH_RISK_SCREENING_AGE: u32 = 25;

pub const GASTRIC_SCREENING_MIN_AGE: u32 = 35;
pub const HPV_PREVENTION_MAX_AGE: u32 = 45;

pub const LIFESTYLE_ALERT_MAX_AGE: u32 = 40;
pub const LIFESTYLE_ALERT_MIN_PACK_YEARS: f64 = 15.0;

pub const PULMONOLOGIST_CONSULT_MIN_PACK_YEARS: f64 = 10.0;
pub const PULMONOLOGIST_CONSULT_MIN_FACTORS: usize = 2;

/// Waist threshold in cm for the patient's sex. Female, other and unset
/// share the stricter cutoff.
pub fn waist_threshold_cm(is_male: bool) -> f64 {
    if is_male {
        WAIST_MALE_HIGH_CM
    } else {
        WAIST_FEMALE_HIGH_CM
    }
}
