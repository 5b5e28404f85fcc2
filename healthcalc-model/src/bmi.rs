use strum::{Display, EnumIter, EnumString};

use crate::measurement::Tone;

/// Labels of the four segments of the BMI scale, lowest first.
pub const SCALE_LABELS: [&str; 4] = ["<18.5", "18.5-25", "25-30", ">30"];

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiRequest {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl BmiRequest {
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn tone(&self) -> Tone {
        match self {
            BmiCategory::Underweight | BmiCategory::Overweight => Tone::Warning,
            BmiCategory::Normal => Tone::Success,
            BmiCategory::Obese => Tone::Destructive,
        }
    }

    /// Segment of the BMI scale this category occupies.
    pub fn scale_label(&self) -> &'static str {
        SCALE_LABELS[*self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

/// A [`BmiResult`] together with its marker position (0-100) on the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiReport {
    pub value: f64,
    pub category: BmiCategory,
    pub position: f64,
}

impl BmiReport {
    pub fn new(result: BmiResult, position: f64) -> Self {
        Self {
            value: result.value,
            category: result.category,
            position,
        }
    }
}
