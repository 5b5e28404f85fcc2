//! Property-based tests for the two calculators.

use healthcalc_engine::{bmi, body_fat, compute_bmi, compute_body_fat, round1, scale_position};
use healthcalc_model::measurement::Gender;
use proptest::prelude::*;

proptest! {
    /// The reported BMI is the formula value rounded to one decimal.
    #[test]
    fn bmi_value_is_rounded_formula(height in 50.0f64..250.0, weight in 2.0f64..300.0) {
        let result = compute_bmi(height, weight).unwrap();
        let height_m = height / 100.0;
        prop_assert_eq!(result.value, round1(weight / height_m.powi(2)));
        prop_assert_eq!(result.category, bmi::classify(weight / height_m.powi(2)));
    }

    /// Any non-positive input is rejected.
    #[test]
    fn bmi_rejects_non_positive(height in -500.0f64..=0.0, weight in 2.0f64..300.0) {
        prop_assert!(compute_bmi(height, weight).is_err());
        prop_assert!(compute_bmi(weight, height).is_err());
    }

    /// The display position never leaves the scale and never decreases.
    #[test]
    fn scale_position_is_bounded_and_monotonic(a in 0.0f64..80.0, b in 0.0f64..80.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!((0.0..=100.0).contains(&scale_position(low)));
        prop_assert!(scale_position(low) <= scale_position(high));
    }

    /// A larger waist never lowers the male estimate.
    #[test]
    fn male_body_fat_grows_with_waist(
        height in 150.0f64..210.0,
        neck in 30.0f64..45.0,
        waist in 50.0f64..150.0,
        extra in 0.1f64..20.0,
    ) {
        prop_assume!(waist > neck);
        let smaller = compute_body_fat(Gender::Male, height, 80.0, waist, neck, None).unwrap();
        let larger = compute_body_fat(Gender::Male, height, 80.0, waist + extra, neck, None).unwrap();
        prop_assert!(smaller.value <= larger.value);
    }

    /// Classification agrees with the rounded value that is reported.
    #[test]
    fn category_matches_reported_value(
        height in 150.0f64..200.0,
        waist in 60.0f64..120.0,
        hip in 80.0f64..130.0,
        neck in 28.0f64..40.0,
    ) {
        let result = compute_body_fat(Gender::Female, height, 65.0, waist, neck, Some(hip)).unwrap();
        prop_assert_eq!(result.category, body_fat::classify(Gender::Female, result.value));
    }
}
