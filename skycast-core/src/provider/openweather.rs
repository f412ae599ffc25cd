use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ForecastError;
use crate::model::{ConditionKind, Coordinates, ForecastResponse, ForecastSlot};

use super::ForecastService;

const BASE_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Client for the OpenWeather 5-day / 3-hour forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Result<Self, ForecastError> {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ForecastError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            api_key,
            http,
            base_url,
        })
    }
}

#[async_trait]
impl ForecastService for OpenWeatherClient {
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<ForecastResponse, ForecastError> {
        let url = format!("{}/data/2.5/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string().as_str()),
                ("lon", coords.longitude.to_string().as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "en"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Api {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        let slots = parsed
            .list
            .into_iter()
            .map(slot_from_entry)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            city = %parsed.city.name,
            slots = slots.len(),
            "parsed forecast response"
        );

        Ok(ForecastResponse {
            location_name: parsed.city.name,
            slots,
        })
    }
}

fn slot_from_entry(entry: OwForecastEntry) -> Result<ForecastSlot, ForecastError> {
    let timestamp = NaiveDateTime::parse_from_str(&entry.dt_txt, DT_TXT_FORMAT)
        .map_err(|_| ForecastError::BadTimestamp(entry.dt_txt.clone()))?;

    // The wire contract promises at least one weather entry, but the client
    // degrades instead of trusting it.
    let (condition, description) = match entry.weather.into_iter().next() {
        Some(w) => (ConditionKind::from_category(&w.main), w.description),
        None => (ConditionKind::Other, "unknown".to_string()),
    };

    Ok(ForecastSlot {
        timestamp,
        temperature: entry.main.temp,
        condition,
        description,
    })
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
