use serde::Serialize;

use crate::model::{ForecastResponse, ForecastSlot};
use crate::select::select_daily;

/// Display fields for one day of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    /// Calendar date, `YYYY-MM-DD`.
    pub date_label: String,
    /// Zero-padded 12-hour clock with meridiem, e.g. `09 AM`.
    pub hour_label: String,
    /// Temperature rounded to one decimal place.
    pub temp_label: String,
    pub icon_key: &'static str,
    pub description: String,
}

impl DaySummary {
    fn from_slot(slot: &ForecastSlot) -> Self {
        Self {
            date_label: slot.timestamp.format("%Y-%m-%d").to_string(),
            hour_label: slot.timestamp.format("%I %p").to_string(),
            temp_label: format!("{:.1}", slot.temperature),
            icon_key: slot.condition.icon_key(),
            description: slot.description.clone(),
        }
    }
}

/// What the presentation surface receives: the location name once, plus one
/// summary per selected day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub location_name: String,
    pub days: Vec<DaySummary>,
}

impl RenderModel {
    /// Derive the render model from a parsed forecast: daily selection
    /// first, then the per-slot display mapping.
    pub fn from_response(response: &ForecastResponse) -> Self {
        let days = select_daily(&response.slots)
            .iter()
            .map(DaySummary::from_slot)
            .collect();

        Self {
            location_name: response.location_name.clone(),
            days,
        }
    }
}
