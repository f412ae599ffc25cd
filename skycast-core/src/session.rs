use std::time::Duration;

use tokio::time::timeout;

use crate::error::{ForecastError, Stage};
use crate::location::{AccuracyTier, LocationProvider, Permission};
use crate::provider::ForecastService;
use crate::render::RenderModel;

/// What the presentation surface renders. An explicit immutable value: the
/// view starts at `Loading` and ends at exactly one of the other three.
#[derive(Debug)]
pub enum ViewState {
    Loading,
    Denied,
    Error(ForecastError),
    Loaded(RenderModel),
}

/// Bounded waits for each suspension point. None of the awaits is allowed
/// to hang: expiry becomes `ForecastError::Timeout` for that stage.
#[derive(Debug, Clone, Copy)]
pub struct PipelineTimeouts {
    pub permission: Duration,
    pub location: Duration,
    pub forecast: Duration,
}

impl Default for PipelineTimeouts {
    fn default() -> Self {
        Self {
            // A human is deciding; give them longer than the machines.
            permission: Duration::from_secs(120),
            location: Duration::from_secs(15),
            forecast: Duration::from_secs(15),
        }
    }
}

/// The single-shot session pipeline: permission → coordinates → fetch →
/// render model. Strictly sequential; runs exactly once per process.
pub struct Pipeline<'a> {
    location: &'a dyn LocationProvider,
    service: &'a dyn ForecastService,
    timeouts: PipelineTimeouts,
}

impl<'a> Pipeline<'a> {
    pub fn new(location: &'a dyn LocationProvider, service: &'a dyn ForecastService) -> Self {
        Self {
            location,
            service,
            timeouts: PipelineTimeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: PipelineTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Drive the session to its final view state.
    pub async fn run(&self) -> ViewState {
        match self.drive().await {
            Ok(model) => ViewState::Loaded(model),
            Err(ForecastError::PermissionDenied) => ViewState::Denied,
            Err(err) => {
                tracing::warn!(error = %err, "session ended in an error state");
                ViewState::Error(err)
            }
        }
    }

    async fn drive(&self) -> Result<RenderModel, ForecastError> {
        let permission = timeout(self.timeouts.permission, self.location.request_permission())
            .await
            .map_err(|_| ForecastError::Timeout(Stage::Permission))??;

        // One-way gate: anything but an explicit grant ends the session.
        if permission != Permission::Granted {
            return Err(ForecastError::PermissionDenied);
        }

        let coords = timeout(
            self.timeouts.location,
            self.location.current_coordinates(AccuracyTier::City),
        )
        .await
        .map_err(|_| ForecastError::Timeout(Stage::Location))??;

        tracing::info!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "acquired device coordinates"
        );

        let response = timeout(self.timeouts.forecast, self.service.fetch_forecast(coords))
            .await
            .map_err(|_| ForecastError::Timeout(Stage::Forecast))??;

        Ok(RenderModel::from_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionKind, Coordinates, ForecastResponse, ForecastSlot};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubLocation {
        decision: Permission,
        coords: Coordinates,
    }

    #[async_trait]
    impl LocationProvider for StubLocation {
        async fn request_permission(&self) -> Result<Permission, ForecastError> {
            Ok(self.decision)
        }

        async fn current_coordinates(
            &self,
            _tier: AccuracyTier,
        ) -> Result<Coordinates, ForecastError> {
            Ok(self.coords)
        }
    }

    #[derive(Debug)]
    struct RecordingService {
        calls: AtomicUsize,
        response: ForecastResponse,
    }

    impl RecordingService {
        fn returning(response: ForecastResponse) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response,
            }
        }
    }

    #[async_trait]
    impl ForecastService for RecordingService {
        async fn fetch_forecast(
            &self,
            _coords: Coordinates,
        ) -> Result<ForecastResponse, ForecastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    #[derive(Debug)]
    struct NeverResolves;

    #[async_trait]
    impl ForecastService for NeverResolves {
        async fn fetch_forecast(
            &self,
            _coords: Coordinates,
        ) -> Result<ForecastResponse, ForecastError> {
            std::future::pending().await
        }
    }

    fn fixture_response(slots: usize) -> ForecastResponse {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        ForecastResponse {
            location_name: "Seoul".to_string(),
            slots: (0..slots)
                .map(|i| ForecastSlot {
                    timestamp: start + chrono::Duration::hours(3 * i as i64),
                    temperature: 20.0 + i as f64 * 0.1,
                    condition: ConditionKind::Clear,
                    description: "clear sky".to_string(),
                })
                .collect(),
        }
    }

    fn seoul() -> Coordinates {
        Coordinates {
            latitude: 37.5,
            longitude: 127.0,
        }
    }

    #[tokio::test]
    async fn denied_session_never_contacts_the_forecast_service() {
        let location = StubLocation {
            decision: Permission::Denied,
            coords: seoul(),
        };
        let service = RecordingService::returning(fixture_response(40));

        let state = Pipeline::new(&location, &service).run().await;

        assert!(matches!(state, ViewState::Denied));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unresolved_permission_is_treated_as_denial() {
        let location = StubLocation {
            decision: Permission::Unresolved,
            coords: seoul(),
        };
        let service = RecordingService::returning(fixture_response(40));

        let state = Pipeline::new(&location, &service).run().await;

        assert!(matches!(state, ViewState::Denied));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn granted_session_renders_five_daily_summaries() {
        let location = StubLocation {
            decision: Permission::Granted,
            coords: seoul(),
        };
        let service = RecordingService::returning(fixture_response(40));

        let state = Pipeline::new(&location, &service).run().await;

        let model = match state {
            ViewState::Loaded(model) => model,
            other => panic!("expected Loaded, got {other:?}"),
        };

        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(model.location_name, "Seoul");
        assert_eq!(model.days.len(), 5);
        assert_eq!(model.days[0].date_label, "2024-03-15");
        assert_eq!(model.days[0].hour_label, "09 AM");
        assert_eq!(model.days[0].temp_label, "20.0");
        assert_eq!(model.days[0].icon_key, "day-sunny");
        // Stride 8: the second summary comes from slot index 8.
        assert_eq!(model.days[1].temp_label, "20.8");
    }

    #[tokio::test]
    async fn short_upstream_response_truncates_the_selection() {
        let location = StubLocation {
            decision: Permission::Granted,
            coords: seoul(),
        };
        let service = RecordingService::returning(fixture_response(17));

        let state = Pipeline::new(&location, &service).run().await;

        match state {
            ViewState::Loaded(model) => assert_eq!(model.days.len(), 3),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn hung_fetch_becomes_a_timeout_error() {
        let location = StubLocation {
            decision: Permission::Granted,
            coords: seoul(),
        };
        let service = NeverResolves;

        let timeouts = PipelineTimeouts {
            permission: Duration::from_secs(1),
            location: Duration::from_secs(1),
            forecast: Duration::from_millis(20),
        };
        let state = Pipeline::new(&location, &service)
            .with_timeouts(timeouts)
            .run()
            .await;

        match state {
            ViewState::Error(ForecastError::Timeout(stage)) => {
                assert_eq!(stage, Stage::Forecast);
            }
            other => panic!("expected a forecast timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn location_failure_is_a_visible_error_state() {
        #[derive(Debug)]
        struct NoFix;

        #[async_trait]
        impl LocationProvider for NoFix {
            async fn request_permission(&self) -> Result<Permission, ForecastError> {
                Ok(Permission::Granted)
            }

            async fn current_coordinates(
                &self,
                _tier: AccuracyTier,
            ) -> Result<Coordinates, ForecastError> {
                Err(ForecastError::LocationUnavailable("no fix".into()))
            }
        }

        let service = RecordingService::returning(fixture_response(40));
        let state = Pipeline::new(&NoFix, &service).run().await;

        assert!(matches!(
            state,
            ViewState::Error(ForecastError::LocationUnavailable(_))
        ));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }
}
