use healthcalc_model::bmi::{BmiCategory, BmiRequest, BmiResult};
use healthcalc_model::measurement::Field;
use log::debug;

use crate::error::{positive, InputError, Result};
use crate::{round1, Calculate};

const UNDERWEIGHT_LIMIT: f64 = 18.5;
const NORMAL_LIMIT: f64 = 25.0;
const OVERWEIGHT_LIMIT: f64 = 30.0;
/// Width of the top segment of the scale, in kg/m².
const OBESE_SPAN: f64 = 10.0;

pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<BmiResult> {
    BmiRequest::new(height_cm, weight_kg).calculate()
}

impl Calculate for BmiRequest {
    type Output = BmiResult;

    fn calculate(&self) -> Result<BmiResult> {
        let height_cm = positive(Field::Height, self.height_cm)?;
        let weight_kg = positive(Field::Weight, self.weight_kg)?;

        let bmi = body_mass_index(height_cm, weight_kg);
        if !bmi.is_finite() {
            return Err(InputError::UndefinedResult);
        }

        let result = BmiResult {
            value: round1(bmi),
            category: classify(bmi),
        };
        debug!(
            "BMI for {} cm, {} kg: {} ({})",
            height_cm, weight_kg, bmi, result.category
        );
        Ok(result)
    }
}

fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / height_m.powi(2)
}

/// Expects the unrounded value, so that 18.49 stays underweight.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_LIMIT {
        BmiCategory::Underweight
    } else if bmi < NORMAL_LIMIT {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_LIMIT {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Locates a rounded BMI on a scale of four equal segments, one per
/// category, returning a position between 0 and 100. Purely for display.
pub fn scale_position(bmi: f64) -> f64 {
    if bmi < UNDERWEIGHT_LIMIT {
        bmi / UNDERWEIGHT_LIMIT * 25.0
    } else if bmi < NORMAL_LIMIT {
        25.0 + (bmi - UNDERWEIGHT_LIMIT) / (NORMAL_LIMIT - UNDERWEIGHT_LIMIT) * 25.0
    } else if bmi < OVERWEIGHT_LIMIT {
        50.0 + (bmi - NORMAL_LIMIT) / (OVERWEIGHT_LIMIT - NORMAL_LIMIT) * 25.0
    } else {
        (75.0 + (bmi - OVERWEIGHT_LIMIT) / OBESE_SPAN * 25.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_bmi_rounds_and_classifies() {
        let test_data = [
            (175.0, 70.0, 22.9, BmiCategory::Normal),
            (170.0, 45.0, 15.6, BmiCategory::Underweight),
            (170.0, 80.0, 27.7, BmiCategory::Overweight),
            (170.0, 95.0, 32.9, BmiCategory::Obese),
        ];

        for (i, (height, weight, value, category)) in test_data.into_iter().enumerate() {
            assert_eq!(
                compute_bmi(height, weight),
                Ok(BmiResult { value, category }),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn lower_bound_of_normal_is_inclusive() {
        let result = compute_bmi(170.0, 53.465).unwrap();
        assert_eq!(result.value, 18.5);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn lower_bound_of_overweight_is_inclusive() {
        let result = compute_bmi(170.0, 72.25).unwrap();
        assert_eq!(result.value, 25.0);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn category_uses_unrounded_value() {
        // 18.4948... displays as 18.5 but is still below the threshold
        let result = compute_bmi(170.0, 53.45).unwrap();
        assert_eq!(result.value, 18.5);
        assert_eq!(result.category, BmiCategory::Underweight);
    }

    #[test]
    fn invalid_measurements_are_rejected() {
        assert_eq!(
            compute_bmi(0.0, 70.0),
            Err(InputError::InvalidMeasurement(Field::Height))
        );
        assert_eq!(
            compute_bmi(170.0, -5.0),
            Err(InputError::InvalidMeasurement(Field::Weight))
        );
        assert_eq!(
            compute_bmi(f64::NAN, 70.0),
            Err(InputError::InvalidMeasurement(Field::Height))
        );
        assert_eq!(
            BmiRequest {
                height_cm: Some(170.0),
                weight_kg: None,
            }
            .calculate(),
            Err(InputError::InvalidMeasurement(Field::Weight))
        );
    }

    #[test]
    fn huge_bmi_is_reported_unchanged() {
        let result = compute_bmi(100.0, 1e308).unwrap();
        assert!(result.value.is_finite());
        assert_eq!(result.value, 1e308);
        assert_eq!(result.category, BmiCategory::Obese);
    }

    #[test]
    fn classify_uses_lower_inclusive_thresholds() {
        let test_data = [
            (18.49, BmiCategory::Underweight),
            (18.5, BmiCategory::Normal),
            (24.99, BmiCategory::Normal),
            (25.0, BmiCategory::Overweight),
            (29.99, BmiCategory::Overweight),
            (30.0, BmiCategory::Obese),
        ];

        for (i, (bmi, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(classify(bmi), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn vanishing_height_is_undefined() {
        assert_eq!(compute_bmi(1e-200, 70.0), Err(InputError::UndefinedResult));
    }

    #[test]
    fn scale_position_interpolates_within_segments() {
        let test_data = [
            (0.0, 0.0),
            (9.25, 12.5),
            (18.5, 25.0),
            (21.75, 37.5),
            (25.0, 50.0),
            (27.5, 62.5),
            (30.0, 75.0),
            (35.0, 87.5),
            (40.0, 100.0),
            (52.3, 100.0),
        ];

        for (i, (bmi, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(scale_position(bmi), expected_output, "Test case #{}", i);
        }
    }
}
