use async_trait::async_trait;
use inquire::{Confirm, InquireError};

use skycast_core::{
    AccuracyTier, Coordinates, ForecastError, IpLookup, LocationProvider, Permission,
};

/// Location capability for a terminal host: consent is asked interactively
/// (the terminal's stand-in for the OS permission dialog), and coordinates
/// come from a city-level IP geolocation lookup.
#[derive(Debug)]
pub struct ConsoleLocationProvider {
    lookup: IpLookup,
}

impl ConsoleLocationProvider {
    pub fn new() -> Result<Self, ForecastError> {
        Ok(Self {
            lookup: IpLookup::new()?,
        })
    }
}

#[async_trait]
impl LocationProvider for ConsoleLocationProvider {
    async fn request_permission(&self) -> Result<Permission, ForecastError> {
        let answer = tokio::task::spawn_blocking(|| {
            Confirm::new("Allow skycast to use your approximate location?")
                .with_default(true)
                .prompt()
        })
        .await
        .map_err(|e| ForecastError::LocationUnavailable(format!("prompt task failed: {e}")))?;

        match answer {
            Ok(true) => Ok(Permission::Granted),
            Ok(false) => Ok(Permission::Denied),
            // Esc / Ctrl-C on the prompt counts as a denial.
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(Permission::Denied)
            }
            Err(e) => Err(ForecastError::LocationUnavailable(format!(
                "could not show the permission prompt: {e}"
            ))),
        }
    }

    async fn current_coordinates(&self, _tier: AccuracyTier) -> Result<Coordinates, ForecastError> {
        // IP geolocation resolves the city regardless of the requested tier.
        self.lookup.coordinates().await
    }
}
