use crate::error::ForecastError;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Runtime configuration. The whole configuration surface is one credential
/// read from the process environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Read the API key from the environment.
    pub fn from_env() -> Result<Self, ForecastError> {
        Self::from_raw(std::env::var(API_KEY_VAR).ok())
    }

    fn from_raw(raw: Option<String>) -> Result<Self, ForecastError> {
        match raw {
            Some(key) if !key.trim().is_empty() => Ok(Self { api_key: key }),
            _ => Err(ForecastError::MissingApiKey { var: API_KEY_VAR }),
        }
    }
}
