use std::env;

use dotenv::dotenv;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `HEALTHCALC_HOST` and `HEALTHCALC_PORT`, after loading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_values(
            env::var("HEALTHCALC_HOST").ok(),
            env::var("HEALTHCALC_PORT").ok(),
        )
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
        })
    }
}
