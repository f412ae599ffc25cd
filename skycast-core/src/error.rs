use thiserror::Error;

/// The suspension points of the session pipeline, named for timeout reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Permission,
    Location,
    Forecast,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Permission => "the permission decision",
            Stage::Location => "the coordinate fix",
            Stage::Forecast => "the forecast response",
        };
        f.write_str(s)
    }
}

/// Everything that can go wrong between launch and a rendered forecast.
///
/// `PermissionDenied` is terminal for the session; the remaining variants are
/// surfaced as a visible error state so the view never stays in its loading
/// state indefinitely.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("location permission was denied")]
    PermissionDenied,

    #[error("could not resolve device coordinates: {0}")]
    LocationUnavailable(String),

    #[error("timed out waiting for {0}")]
    Timeout(Stage),

    #[error("forecast request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to reach the forecast service")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse the forecast response")]
    Parse(#[from] serde_json::Error),

    #[error("forecast slot carried a malformed timestamp '{0}'")]
    BadTimestamp(String),

    #[error(
        "no API key found.\n\
         Hint: export {var} with your OpenWeather API key before running."
    )]
    MissingApiKey { var: &'static str },
}

impl ForecastError {
    /// True for the one failure that ends the session outright.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ForecastError::PermissionDenied)
    }
}
