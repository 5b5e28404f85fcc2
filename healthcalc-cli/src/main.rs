use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use log::{error, info};

use healthcalc_cli::calculator::{Calculator, LocalCalculator, RemoteCalculator};
use healthcalc_cli::Command;

#[derive(Debug, Parser)]
#[command(name = "healthcalc", about = "BMI and body fat calculator", version)]
struct Cli {
    /// Use the API server at this URL instead of computing locally
    #[arg(long, global = true)]
    remote: Option<String>,
    /// log4rs configuration, ignored when the file does not exist
    #[arg(long, global = true, default_value = "log4rs.yml")]
    log_config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    if cli.log_config.exists() {
        log4rs::init_file(&cli.log_config, Default::default())?;
    }

    let calculator: Box<dyn Calculator> = match cli.remote {
        Some(url) => {
            info!("Using API server at {}", url);
            Box::new(RemoteCalculator::new(Box::new(healthcalc_client::create(url))))
        }
        None => Box::new(LocalCalculator),
    };

    match healthcalc_cli::run(calculator.as_ref(), &cli.command).await {
        Ok(output) => {
            print!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Calculation failed: {}", e);
            eprintln!("{}", format!("Please enter valid measurements ({})", e).red());
            Ok(ExitCode::FAILURE)
        }
    }
}
