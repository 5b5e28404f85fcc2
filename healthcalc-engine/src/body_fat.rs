use healthcalc_model::body_fat::{BodyFatCategory, BodyFatRequest, BodyFatResult};
use healthcalc_model::measurement::{Field, Gender};
use log::debug;

use crate::error::{positive, InputError, Result};
use crate::{round1, Calculate};

/// Upper bounds (inclusive, in %) of each category, ascending.
const MALE_BANDS: [(f64, BodyFatCategory); 5] = [
    (6.0, BodyFatCategory::EssentialFat),
    (13.0, BodyFatCategory::Athletes),
    (17.0, BodyFatCategory::Fitness),
    (24.0, BodyFatCategory::Average),
    (100.0, BodyFatCategory::Obese),
];

const FEMALE_BANDS: [(f64, BodyFatCategory); 5] = [
    (13.0, BodyFatCategory::EssentialFat),
    (20.0, BodyFatCategory::Athletes),
    (24.0, BodyFatCategory::Fitness),
    (31.0, BodyFatCategory::Average),
    (100.0, BodyFatCategory::Obese),
];

/// Validated circumference measurements. Only the female variant needs the
/// hip, and it cannot be constructed without one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Subject {
    Male {
        height_cm: f64,
        waist_cm: f64,
        neck_cm: f64,
    },
    Female {
        height_cm: f64,
        waist_cm: f64,
        neck_cm: f64,
        hip_cm: f64,
    },
}

impl Subject {
    pub fn gender(&self) -> Gender {
        match self {
            Subject::Male { .. } => Gender::Male,
            Subject::Female { .. } => Gender::Female,
        }
    }

    /// Body-fat percentage by the U.S. Navy method, unrounded.
    pub fn body_fat(&self) -> Result<f64> {
        let density = match *self {
            Subject::Male {
                height_cm,
                waist_cm,
                neck_cm,
            } => {
                let circumference = log10_positive(waist_cm - neck_cm)?;
                1.0324 - 0.19077 * circumference + 0.15456 * height_cm.log10()
            }
            Subject::Female {
                height_cm,
                waist_cm,
                neck_cm,
                hip_cm,
            } => {
                let circumference = log10_positive(waist_cm + hip_cm - neck_cm)?;
                1.29579 - 0.35004 * circumference + 0.22100 * height_cm.log10()
            }
        };

        let body_fat = 495.0 / density - 450.0;
        if body_fat.is_finite() {
            Ok(body_fat)
        } else {
            Err(InputError::UndefinedResult)
        }
    }
}

fn log10_positive(x: f64) -> Result<f64> {
    if x > 0.0 {
        Ok(x.log10())
    } else {
        Err(InputError::UndefinedResult)
    }
}

impl TryFrom<&BodyFatRequest> for Subject {
    type Error = InputError;

    /// Weight is required here even though the formula never reads it.
    fn try_from(request: &BodyFatRequest) -> Result<Self> {
        let height_cm = positive(Field::Height, request.height_cm)?;
        positive(Field::Weight, request.weight_kg)?;
        let waist_cm = positive(Field::Waist, request.waist_cm)?;
        let neck_cm = positive(Field::Neck, request.neck_cm)?;

        Ok(match request.gender {
            Gender::Male => Subject::Male {
                height_cm,
                waist_cm,
                neck_cm,
            },
            Gender::Female => Subject::Female {
                height_cm,
                waist_cm,
                neck_cm,
                hip_cm: positive(Field::Hip, request.hip_cm)?,
            },
        })
    }
}

pub fn compute_body_fat(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
) -> Result<BodyFatResult> {
    BodyFatRequest {
        gender,
        age_years: None,
        height_cm: Some(height_cm),
        weight_kg: Some(weight_kg),
        waist_cm: Some(waist_cm),
        neck_cm: Some(neck_cm),
        hip_cm,
    }
    .calculate()
}

impl Calculate for BodyFatRequest {
    type Output = BodyFatResult;

    fn calculate(&self) -> Result<BodyFatResult> {
        let subject = Subject::try_from(self)?;
        let value = round1(subject.body_fat()?);
        let category = classify(subject.gender(), value);
        debug!("Body fat for {:?}: {}% ({:?})", subject, value, category);

        Ok(BodyFatResult {
            gender: subject.gender(),
            value,
            category,
        })
    }
}

/// Finds the first band whose upper bound is not below the rounded value.
pub fn classify(gender: Gender, value: f64) -> Option<BodyFatCategory> {
    if value < 0.0 {
        return None;
    }
    let bands = match gender {
        Gender::Male => &MALE_BANDS,
        Gender::Female => &FEMALE_BANDS,
    };
    bands
        .iter()
        .find(|(max, _)| value <= *max)
        .map(|(_, category)| *category)
}
