pub mod bmi;
pub mod body_fat;
pub mod error;

pub use bmi::{compute_bmi, scale_position};
pub use body_fat::compute_body_fat;
pub use error::InputError;

/// Turns a request of raw, possibly missing measurements into a result.
pub trait Calculate {
    type Output;

    fn calculate(&self) -> error::Result<Self::Output>;
}

/// Rounds to one decimal place, halves away from zero. Never yields `-0.0`.
pub fn round1(x: f64) -> f64 {
    let scaled = x * 10.0;
    if !scaled.is_finite() {
        // Too large to carry a fractional digit.
        return x;
    }
    scaled.round() / 10.0 + 0.0
}
