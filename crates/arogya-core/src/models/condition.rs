/// A disease in the fixed screening vocabulary.
///
/// Family and personal history are stored as free strings (the front end
/// writes the display label). Strings outside the vocabulary map to `None`
/// in [`Condition::from_label`] and never match a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    DiabetesType2,
    HighBloodPressure,
    HighCholesterol,
    HeartDisease,
    Stroke,
    Obesity,
    ChronicKidneyDisease,
    BreastCancer,
    MaleBreastCancer,
    ColonCancer,
    ProstateCancer,
    OvarianCancer,
    PancreaticCancer,
    Melanoma,
    UterineCancer,
}

impl Condition {
    pub const ALL: [Condition; 15] = [
        Condition::DiabetesType2,
        Condition::HighBloodPressure,
        Condition::HighCholesterol,
        Condition::HeartDisease,
        Condition::Stroke,
        Condition::Obesity,
        Condition::ChronicKidneyDisease,
        Condition::BreastCancer,
        Condition::MaleBreastCancer,
        Condition::ColonCancer,
        Condition::ProstateCancer,
        Condition::OvarianCancer,
        Condition::PancreaticCancer,
        Condition::Melanoma,
        Condition::UterineCancer,
    ];

    /// Lifestyle NCDs counted by the CBAC family and personal history factors.
    pub const NCD_FAMILY: [Condition; 7] = [
        Condition::HeartDisease,
        Condition::Stroke,
        Condition::HighBloodPressure,
        Condition::DiabetesType2,
        Condition::HighCholesterol,
        Condition::Obesity,
        Condition::ChronicKidneyDisease,
    ];

    pub const CANCERS: [Condition; 8] = [
        Condition::BreastCancer,
        Condition::MaleBreastCancer,
        Condition::ColonCancer,
        Condition::ProstateCancer,
        Condition::OvarianCancer,
        Condition::PancreaticCancer,
        Condition::Melanoma,
        Condition::UterineCancer,
    ];

    /// The label stored in profiles.
    pub fn label(self) -> &'static str {
        match self {
            Condition::DiabetesType2 => "Diabetes (Type 2)",
            Condition::HighBloodPressure => "High Blood Pressure",
            Condition::HighCholesterol => "High Cholesterol",
            Condition::HeartDisease => "Heart Disease",
            Condition::Stroke => "Stroke",
            Condition::Obesity => "Obesity",
            Condition::ChronicKidneyDisease => "Chronic Kidney Disease",
            Condition::BreastCancer => "Breast Cancer",
            Condition::MaleBreastCancer => "Male Breast Cancer",
            Condition::ColonCancer => "Colon Cancer",
            Condition::ProstateCancer => "Prostate Cancer",
            Condition::OvarianCancer => "Ovarian Cancer",
            Condition::PancreaticCancer => "Pancreatic Cancer",
            Condition::Melanoma => "Melanoma",
            Condition::UterineCancer => "Uterine Cancer",
        }
    }

    /// Look up a condition by its stored label. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn is_ncd(self) -> bool {
        Self::NCD_FAMILY.contains(&self)
    }

    pub fn is_cancer(self) -> bool {
        Self::CANCERS.contains(&self)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
