use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ForecastError;
use crate::model::Coordinates;

/// Outcome of the permission request. `Unresolved` is the state before the
/// prompt fires; a provider answers `Granted` or `Denied` exactly once per
/// session, and the gate is never re-requested within the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    #[default]
    Unresolved,
    Granted,
    Denied,
}

/// Requested precision for the coordinate fix. The pipeline always asks for
/// `City`: exact meters are not contract-relevant, but the fix must resolve
/// the city correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccuracyTier {
    Coarse,
    #[default]
    City,
    Fine,
}

/// The location capability the session consumes: a user-grantable permission
/// gate plus a single coordinate reading.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask the user for foreground location access. May show a prompt; fires
    /// at most once per session.
    async fn request_permission(&self) -> Result<Permission, ForecastError>;

    /// Resolve the device's current coordinates at the given tier.
    async fn current_coordinates(&self, tier: AccuracyTier) -> Result<Coordinates, ForecastError>;
}

const IP_API_URL: &str = "http://ip-api.com/json";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Coordinate lookup backed by ip-api.com.
///
/// IP geolocation is city-level regardless of the requested tier, which is
/// exactly the precision the forecast needs.
#[derive(Debug, Clone)]
pub struct IpLookup {
    http: Client,
    endpoint: String,
}

impl IpLookup {
    pub fn new() -> Result<Self, ForecastError> {
        Self::with_endpoint(IP_API_URL.to_string())
    }

    /// Point the lookup at a different endpoint (used by tests).
    pub fn with_endpoint(endpoint: String) -> Result<Self, ForecastError> {
        let http = Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
        Ok(Self { http, endpoint })
    }

    /// One GET against the geolocation endpoint, mapped onto `Coordinates`.
    pub async fn coordinates(&self) -> Result<Coordinates, ForecastError> {
        let res = self.http.get(&self.endpoint).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ForecastError::LocationUnavailable(format!(
                "geolocation endpoint returned status {status}"
            )));
        }

        let parsed: IpApiResponse = res.json().await?;

        match (parsed.status.as_str(), parsed.lat, parsed.lon) {
            ("success", Some(latitude), Some(longitude)) => {
                tracing::debug!(latitude, longitude, "resolved coordinates from IP");
                Ok(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => Err(ForecastError::LocationUnavailable(
                parsed
                    .message
                    .unwrap_or_else(|| "geolocation lookup failed".to_string()),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}
