use strum::{Display, EnumIter, EnumString};

use crate::measurement::{Gender, Tone};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyFatRequest {
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: Gender,
    /// Collected alongside the other measurements but not used by the formula.
    pub age_years: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub neck_cm: Option<f64>,
    pub hip_cm: Option<f64>,
}

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum BodyFatCategory {
    #[strum(serialize = "Essential Fat")]
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    pub fn tone(&self) -> Tone {
        match self {
            BodyFatCategory::EssentialFat => Tone::Warning,
            BodyFatCategory::Athletes | BodyFatCategory::Fitness => Tone::Success,
            BodyFatCategory::Average => Tone::Primary,
            BodyFatCategory::Obese => Tone::Destructive,
        }
    }

    /// Typical body-fat range of the category, as shown next to a result.
    pub fn healthy_range(&self, gender: Gender) -> &'static str {
        match (gender, self) {
            (Gender::Male, BodyFatCategory::EssentialFat) => "2-5%",
            (Gender::Male, BodyFatCategory::Athletes) => "6-13%",
            (Gender::Male, BodyFatCategory::Fitness) => "14-17%",
            (Gender::Male, BodyFatCategory::Average) => "18-24%",
            (Gender::Male, BodyFatCategory::Obese) => "25%+",
            (Gender::Female, BodyFatCategory::EssentialFat) => "10-13%",
            (Gender::Female, BodyFatCategory::Athletes) => "14-20%",
            (Gender::Female, BodyFatCategory::Fitness) => "21-24%",
            (Gender::Female, BodyFatCategory::Average) => "25-31%",
            (Gender::Female, BodyFatCategory::Obese) => "32%+",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyFatResult {
    pub gender: Gender,
    pub value: f64,
    /// `None` when the value falls outside every band.
    pub category: Option<BodyFatCategory>,
}
