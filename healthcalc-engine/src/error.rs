use healthcalc_model::measurement::Field;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(Field),
    #[error("undefined result: measurements do not admit a finite value")]
    UndefinedResult,
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Accepts a measurement only if it is present, finite and strictly positive.
pub fn positive(field: Field, value: Option<f64>) -> Result<f64> {
    match value {
        Some(x) if x.is_finite() && x > 0.0 => Ok(x),
        _ => Err(InputError::InvalidMeasurement(field)),
    }
}
