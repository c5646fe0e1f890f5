use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::condition::Condition;

/// Sticks (cigarettes or bidis) per pack.
pub const STICKS_PER_PACK: f64 = 20.0;

/// Centimetres per inch. Waist circumference is captured in inches.
pub const CM_PER_INCH: f64 = 2.54;

/// The questionnaire answers for one screening session.
///
/// Built once by the form layer and treated as read-only by the engine.
/// Every field has a default so partially filled profiles deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PatientProfile {
    pub name: String,
    /// Age in years. `None` means not provided, which is distinct from 0.
    pub age: Option<u32>,
    #[serde(rename = "gender", deserialize_with = "deserialize_sex")]
    pub sex: Option<Sex>,

    /// Height in cm.
    pub height: Option<f64>,
    /// Weight in kg.
    pub weight: Option<f64>,
    /// Waist circumference in inches.
    pub waist_circumference: f64,

    pub smoking_status: SmokingStatus,
    pub smoking_sticks_per_day: f64,
    pub smoking_years: f64,
    /// Calendar year of quitting; only meaningful for former smokers.
    pub quit_smoking_year: Option<i32>,
    pub uses_smokeless_tobacco: bool,
    pub smokeless_tobacco_products: Vec<String>,

    pub alcohol_frequency: AlcoholFrequency,
    pub salt_intake: SaltIntake,
    pub physical_activity: PhysicalActivity,

    pub cooking_fuel_type: CookingFuel,
    pub marble_mining_exposure: bool,

    pub hpv_vaccine_status: HpvVaccineStatus,
    pub hepatitis_history: HepatitisHistory,

    /// Observed white/red patches in the mouth.
    pub has_oral_signs: bool,

    pub family_history: Vec<FamilyHistoryCondition>,
    /// Patient does not know their family history. Overrides `family_history`.
    pub family_history_unsure: bool,
    pub personal_conditions: Vec<String>,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: None,
            sex: None,
            height: None,
            weight: None,
            waist_circumference: 0.0,
            smoking_status: SmokingStatus::Never,
            smoking_sticks_per_day: 0.0,
            smoking_years: 0.0,
            quit_smoking_year: None,
            uses_smokeless_tobacco: false,
            smokeless_tobacco_products: Vec::new(),
            alcohol_frequency: AlcoholFrequency::None,
            salt_intake: SaltIntake::Moderate,
            physical_activity: PhysicalActivity::Moderate,
            cooking_fuel_type: CookingFuel::Lpg,
            marble_mining_exposure: false,
            hpv_vaccine_status: HpvVaccineStatus::None,
            hepatitis_history: HepatitisHistory::None,
            has_oral_signs: false,
            family_history: Vec::new(),
            family_history_unsure: false,
            personal_conditions: Vec::new(),
        }
    }
}

impl PatientProfile {
    pub fn is_male(&self) -> bool {
        self.sex == Some(Sex::Male)
    }

    pub fn is_female(&self) -> bool {
        self.sex == Some(Sex::Female)
    }

    pub fn waist_cm(&self) -> f64 {
        self.waist_circumference * CM_PER_INCH
    }

    /// Cumulative smoking exposure: packs per day times years smoked.
    ///
    /// Never-smokers always get 0, even if stale stick or year values
    /// remain from an earlier answer.
    pub fn pack_years(&self) -> f64 {
        if self.smoking_status == SmokingStatus::Never {
            return 0.0;
        }
        (self.smoking_sticks_per_day / STICKS_PER_PACK) * self.smoking_years
    }

    /// Years since a former smoker quit, relative to `reference_year`.
    /// `None` unless the patient is a former smoker with a known quit year.
    pub fn years_since_quit(&self, reference_year: i32) -> Option<i32> {
        match (self.smoking_status, self.quit_smoking_year) {
            (SmokingStatus::Former, Some(year)) => Some(reference_year - year),
            _ => None,
        }
    }

    /// Family history as the rules must see it: empty when the patient is
    /// unsure, regardless of stored entries.
    pub fn effective_family_history(&self) -> &[FamilyHistoryCondition] {
        if self.family_history_unsure {
            &[]
        } else {
            &self.family_history
        }
    }

    /// Recognized personal diagnoses. Unknown labels are dropped.
    pub fn personal_diagnoses(&self) -> impl Iterator<Item = Condition> + '_ {
        self.personal_conditions
            .iter()
            .filter_map(|c| Condition::from_label(c))
    }

    pub fn has_personal(&self, condition: Condition) -> bool {
        self.personal_diagnoses().any(|c| c == condition)
    }

    /// Current smoker or smokeless tobacco user.
    pub fn uses_tobacco_now(&self) -> bool {
        self.smoking_status == SmokingStatus::Current || self.uses_smokeless_tobacco
    }

    /// Body-mass index, or `None` when height or weight is missing or zero.
    pub fn bmi(&self) -> Option<f64> {
        match (self.height, self.weight) {
            (Some(h), Some(w)) if h > 0.0 && w > 0.0 => {
                let meters = h / 100.0;
                Some(w / (meters * meters))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FamilyHistoryCondition {
    pub condition: String,
    #[serde(default)]
    pub relative_age_at_diagnosis: Option<u32>,
    #[serde(default)]
    pub relationship: Option<Relationship>,
}

impl FamilyHistoryCondition {
    pub fn known_condition(&self) -> Option<Condition> {
        Condition::from_label(&self.condition)
    }

    /// Diagnosis age when present and positive.
    pub fn diagnosis_age(&self) -> Option<u32> {
        self.relative_age_at_diagnosis.filter(|age| *age > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// The form stores an unselected sex as `""`; treat it like `null`.
fn deserialize_sex<'de, D>(deserializer: D) -> Result<Option<Sex>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some("male") => Ok(Some(Sex::Male)),
        Some("female") => Ok(Some(Sex::Female)),
        Some("other") => Ok(Some(Sex::Other)),
        Some(other) => Err(serde::de::Error::unknown_variant(
            other,
            &["male", "female", "other", ""],
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlcoholFrequency {
    None,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SaltIntake {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PhysicalActivity {
    Sedentary,
    Moderate,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CookingFuel {
    Lpg,
    Biomass,
    Electric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HpvVaccineStatus {
    None,
    Partial,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HepatitisHistory {
    None,
    HepB,
    HepC,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Relationship {
    Parent,
    Sibling,
    Child,
    Extended,
}
