pub mod calculator;
pub mod input;
pub mod render;

use clap::Subcommand;
use healthcalc_engine::InputError;
use log::info;

use crate::calculator::Calculator;
use crate::input::{BmiForm, BodyFatForm};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Remote(#[from] healthcalc_client::Error),
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Body Mass Index from height and weight
    Bmi(BmiForm),
    /// Body fat percentage by the U.S. Navy method
    BodyFat(BodyFatForm),
}

/// Runs one calculation and returns the text to show to the user.
pub async fn run(calculator: &dyn Calculator, command: &Command) -> Result<String, Error> {
    match command {
        Command::Bmi(form) => {
            let report = calculator.bmi(&form.to_request()).await?;
            info!("BMI calculated: {}", report.value);
            Ok(render::render_bmi(&report))
        }
        Command::BodyFat(form) => {
            let result = calculator.body_fat(&form.to_request()).await?;
            info!("Body fat calculated: {}%", result.value);
            Ok(render::render_body_fat(&result))
        }
    }
}
