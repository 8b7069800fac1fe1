//! Response types of the nearby-search endpoint. Only the fields the bot renders are modelled.

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair as the API names it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// Day of week (0 = Sunday) and `HHMM` time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTime {
    pub day: u8,
    pub time: String,
}

/// One opening interval. `close` is absent for places open around the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub open: DayTime,
    #[serde(default)]
    pub close: Option<DayTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Option<Vec<String>>,
    #[serde(default)]
    pub periods: Option<Vec<Period>>,
}

/// A venue returned by nearby search. `vicinity` is the short address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub vicinity: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

/// Top-level response body.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<Place>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}
