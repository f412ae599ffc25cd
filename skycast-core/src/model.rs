use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Device coordinates in floating-point degrees.
///
/// Captured once per session, before any forecast request is issued, and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Coarse weather classification used to pick a display icon.
///
/// `Other` absorbs any category outside the enumerated set so the icon
/// lookup stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Atmosphere,
    Other,
}

impl ConditionKind {
    /// Map an upstream category string onto the enumerated set.
    pub fn from_category(category: &str) -> Self {
        match category {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Atmosphere" => Self::Atmosphere,
            _ => Self::Other,
        }
    }

    /// Icon asset key for this condition. Total: unrecognized categories get
    /// the fallback key rather than a lookup failure.
    pub fn icon_key(&self) -> &'static str {
        match self {
            Self::Clear => "day-sunny",
            Self::Clouds => "cloudy",
            Self::Rain => "rain",
            Self::Drizzle => "rains",
            Self::Thunderstorm => "lightning",
            Self::Snow => "snow",
            Self::Atmosphere => "fog",
            Self::Other => "cloudy",
        }
    }
}

/// One timestamped observation in the multi-day forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSlot {
    pub timestamp: NaiveDateTime,
    /// Celsius.
    pub temperature: f64,
    pub condition: ConditionKind,
    pub description: String,
}

/// Parsed forecast payload: a location name plus the ordered slot sequence.
///
/// The upstream service returns 40 slots at 3-hour granularity covering
/// 5 days, but the length is not trusted anywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location_name: String,
    pub slots: Vec<ForecastSlot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_their_icons() {
        assert_eq!(ConditionKind::from_category("Clear").icon_key(), "day-sunny");
        assert_eq!(
            ConditionKind::from_category("Thunderstorm").icon_key(),
            "lightning"
        );
        assert_eq!(ConditionKind::from_category("Atmosphere").icon_key(), "fog");
        assert_eq!(ConditionKind::from_category("Drizzle").icon_key(), "rains");
    }

    #[test]
    fn unknown_category_falls_back_to_a_defined_icon() {
        let kind = ConditionKind::from_category("Tornado");
        assert_eq!(kind, ConditionKind::Other);
        assert_eq!(kind.icon_key(), "cloudy");
    }

    #[test]
    fn category_matching_is_case_sensitive_like_the_wire_format() {
        // OpenWeather sends capitalized categories; anything else is Other.
        assert_eq!(ConditionKind::from_category("clear"), ConditionKind::Other);
    }
}
