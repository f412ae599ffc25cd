//! Core library for the `skycast` forecast viewer.
//!
//! This crate defines:
//! - Credential handling (one API key, read from the environment)
//! - The location capability (permission gate + coordinate lookup)
//! - The forecast service client (OpenWeather 5-day / 3-hour)
//! - Daily selection and the presentation render model
//! - The single-shot session pipeline and its view states
//!
//! It is used by `skycast-cli`, but can also be reused by other front-ends.

pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;
pub mod render;
pub mod select;
pub mod session;

pub use config::Config;
pub use error::{ForecastError, Stage};
pub use location::{AccuracyTier, IpLookup, LocationProvider, Permission};
pub use model::{ConditionKind, Coordinates, ForecastResponse, ForecastSlot};
pub use provider::{ForecastService, OpenWeatherClient};
pub use render::{DaySummary, RenderModel};
pub use select::select_daily;
pub use session::{Pipeline, PipelineTimeouts, ViewState};
