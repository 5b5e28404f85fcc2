use clap::Args;
use healthcalc_model::bmi::BmiRequest;
use healthcalc_model::body_fat::BodyFatRequest;
use healthcalc_model::measurement::Gender;

/// Reads a measurement as typed. Blank or non-numeric text counts as missing.
pub fn parse_measurement(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

fn field(text: &Option<String>) -> Option<f64> {
    text.as_deref().and_then(parse_measurement)
}

#[derive(Args, Debug, Default)]
pub struct BmiForm {
    /// Height in cm
    #[arg(long)]
    pub height: Option<String>,
    /// Weight in kg
    #[arg(long)]
    pub weight: Option<String>,
}

impl BmiForm {
    pub fn to_request(&self) -> BmiRequest {
        BmiRequest {
            height_cm: field(&self.height),
            weight_kg: field(&self.weight),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct BodyFatForm {
    #[arg(long, default_value_t = Gender::Male)]
    pub gender: Gender,
    /// Age in years
    #[arg(long)]
    pub age: Option<String>,
    /// Height in cm
    #[arg(long)]
    pub height: Option<String>,
    /// Weight in kg
    #[arg(long)]
    pub weight: Option<String>,
    /// Waist circumference in cm
    #[arg(long)]
    pub waist: Option<String>,
    /// Neck circumference in cm
    #[arg(long)]
    pub neck: Option<String>,
    /// Hip circumference in cm, required for women
    #[arg(long)]
    pub hip: Option<String>,
}

impl BodyFatForm {
    pub fn to_request(&self) -> BodyFatRequest {
        BodyFatRequest {
            gender: self.gender,
            age_years: field(&self.age),
            height_cm: field(&self.height),
            weight_kg: field(&self.weight),
            waist_cm: field(&self.waist),
            neck_cm: field(&self.neck),
            hip_cm: field(&self.hip),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_measurement_accepts_numbers_only() {
        let test_data = [
            ("170", Some(170.0)),
            (" 72.25 ", Some(72.25)),
            ("-5", Some(-5.0)),
            ("", None),
            ("   ", None),
            ("abc", None),
            ("170cm", None),
        ];

        for (i, (text, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(parse_measurement(text), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn body_fat_form_keeps_missing_fields_missing() {
        let form = BodyFatForm {
            gender: Gender::Female,
            height: Some("165".to_owned()),
            waist: Some("70".to_owned()),
            hip: Some("".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            form.to_request(),
            BodyFatRequest {
                gender: Gender::Female,
                age_years: None,
                height_cm: Some(165.0),
                weight_kg: None,
                waist_cm: Some(70.0),
                neck_cm: None,
                hip_cm: None,
            }
        );
    }
}
