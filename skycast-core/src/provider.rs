use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::ForecastError;
use crate::model::{Coordinates, ForecastResponse};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// The forecast capability the session consumes: coordinates in, a parsed
/// multi-day forecast out. Exactly one call is made per session.
#[async_trait]
pub trait ForecastService: Send + Sync + Debug {
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<ForecastResponse, ForecastError>;
}
