use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
}

/// One bus departure. Immutable reference data; the UI never mutates these.
///
/// Times and durations are kept as the display strings the catalog ships
/// with ("HH:MM", "<h>h <m>m"); `query` parses them leniently and degrades
/// to zero rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: u32,
    pub route: Route,
    /// Calendar date of travel as stored. Compared through
    /// `query::normalize_date`, not parsed into a date type.
    pub travel_date: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: u32,
    pub rating: f32,
    pub seats_available: u32,
    pub bus_type: String,
    pub amenities: Vec<String>,
    pub operator_name: String,
}

/// The from/to/date triple the search page submits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub from: String,
    pub to: String,
    pub date: String,
}

/// What the simulated search resolves with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Bus>,
    pub total: usize,
}

/// Departure-hour buckets offered by the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    /// 06:00 - 11:59
    Early,
    /// 12:00 - 17:59
    Mid,
    /// 18:00 - 05:59
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Duration,
    Rating,
    Departure,
}

/// Filter/sort criteria for the result list. Every field is optional;
/// `None` (or an empty string) means "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub departure_time: Option<TimeBucket>,
    pub bus_type: Option<String>,
    /// "min-max" string as produced by the price slider, e.g. "500-1000".
    pub price_range: Option<String>,
    pub sort_by: Option<SortKey>,
}
