use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Free-text place lookup, e.g. `?q=Paris`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeQuery {
    pub q: String,
}

/// One place match, in the order upstream ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: Option<String>,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub latitude: Option<Number>,
    pub longitude: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
}

/// Coordinates for a weather lookup. Range is not checked locally.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions flattened next to the hourly series.
///
/// Numbers keep the representation upstream sent (`60` stays `60`, `3.0` stays
/// `3.0`). Every field serializes even when absent so consumers always see the
/// same keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub temperature: Option<Number>,
    pub apparent_temperature: Option<Number>,
    pub humidity: Option<Number>,
    pub precipitation: Option<Number>,
    pub wind_speed: Option<Number>,
    pub wind_gusts: Option<Number>,
    pub weather_code: Option<Number>,
    pub hourly: HourlySeries,
}

/// Hourly arrays exactly as upstream ordered them; indices are not realigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub precipitation: Option<Vec<Option<Number>>>,
    pub cloud_cover: Option<Vec<Option<Number>>>,
    pub time: Option<Vec<String>>,
}
