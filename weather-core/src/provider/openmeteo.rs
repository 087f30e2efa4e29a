//! Open-Meteo geocoding and forecast client.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Number;
use tracing::{debug, instrument};

use crate::{
    config::UpstreamConfig,
    error::{Endpoint, UpstreamError, truncate_body},
    model::{GeocodeQuery, GeocodeResult, HourlySeries, WeatherQuery, WeatherResult},
};

use super::WeatherProvider;

/// Number of place matches requested per geocoding call.
pub const GEOCODE_RESULT_COUNT: u8 = 5;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                              precipitation,wind_speed_10m,wind_gusts_10m,weather_code";
const HOURLY_FIELDS: &str = "precipitation,cloud_cover";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoProvider {
    /// Build the provider with one pooled client bounded by the configured timeout.
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client for Open-Meteo")?;

        Ok(Self {
            http,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        debug!(%endpoint, url, "Calling Open-Meteo");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(endpoint, e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| UpstreamError::from_reqwest(endpoint, e))?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| UpstreamError::Decode { endpoint, source })
    }
}

fn geocode_params(query: &GeocodeQuery) -> Vec<(&'static str, String)> {
    vec![
        ("name", query.q.clone()),
        ("count", GEOCODE_RESULT_COUNT.to_string()),
        ("language", "en".to_string()),
        ("format", "json".to_string()),
    ]
}

fn forecast_params(query: &WeatherQuery) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", query.lat.to_string()),
        ("longitude", query.lon.to_string()),
        ("current", CURRENT_FIELDS.to_string()),
        ("hourly", HOURLY_FIELDS.to_string()),
        ("timezone", "auto".to_string()),
    ]
}

#[derive(Debug, Deserialize)]
struct OmGeocodeResponse {
    results: Option<Vec<OmPlace>>,
}

#[derive(Debug, Deserialize)]
struct OmPlace {
    name: Option<String>,
    country: Option<String>,
    admin1: Option<String>,
    latitude: Option<Number>,
    longitude: Option<Number>,
}

impl From<OmPlace> for GeocodeResult {
    fn from(place: OmPlace) -> Self {
        GeocodeResult {
            name: place.name,
            country: place.country,
            admin1: place.admin1,
            latitude: place.latitude,
            longitude: place.longitude,
        }
    }
}

// Numbers stay `serde_json::Number` so integer/float representation survives the projection.
#[derive(Debug, Default, Deserialize)]
struct OmCurrent {
    temperature_2m: Option<Number>,
    relative_humidity_2m: Option<Number>,
    apparent_temperature: Option<Number>,
    precipitation: Option<Number>,
    wind_speed_10m: Option<Number>,
    wind_gusts_10m: Option<Number>,
    weather_code: Option<Number>,
}

#[derive(Debug, Default, Deserialize)]
struct OmHourly {
    precipitation: Option<Vec<Option<Number>>>,
    cloud_cover: Option<Vec<Option<Number>>>,
    time: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: Option<OmCurrent>,
    hourly: Option<OmHourly>,
}

impl From<OmForecastResponse> for WeatherResult {
    fn from(res: OmForecastResponse) -> Self {
        let current = res.current.unwrap_or_default();
        let hourly = res.hourly.unwrap_or_default();

        WeatherResult {
            temperature: current.temperature_2m,
            apparent_temperature: current.apparent_temperature,
            humidity: current.relative_humidity_2m,
            precipitation: current.precipitation,
            wind_speed: current.wind_speed_10m,
            wind_gusts: current.wind_gusts_10m,
            weather_code: current.weather_code,
            hourly: HourlySeries {
                precipitation: hourly.precipitation,
                cloud_cover: hourly.cloud_cover,
                time: hourly.time,
            },
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self, query), fields(q = %query.q))]
    async fn geocode(&self, query: &GeocodeQuery) -> Result<Vec<GeocodeResult>, UpstreamError> {
        let parsed: OmGeocodeResponse = self
            .get_json(Endpoint::Geocoding, &self.geocoding_url, &geocode_params(query))
            .await?;

        let results: Vec<GeocodeResult> = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodeResult::from)
            .collect();

        debug!(count = results.len(), "Geocoding finished");
        Ok(results)
    }

    #[instrument(skip(self, query), fields(lat = %query.lat, lon = %query.lon))]
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherResult, UpstreamError> {
        let parsed: OmForecastResponse = self
            .get_json(Endpoint::Forecast, &self.forecast_url, &forecast_params(query))
            .await?;

        Ok(WeatherResult::from(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_forecast(value: serde_json::Value) -> serde_json::Value {
        let parsed: OmForecastResponse =
            serde_json::from_value(value).expect("forecast JSON should parse");
        serde_json::to_value(WeatherResult::from(parsed)).expect("result should serialize")
    }

    #[test]
    fn geocode_params_match_upstream_contract() {
        let params = geocode_params(&GeocodeQuery { q: "Paris".into() });

        assert_eq!(
            params,
            vec![
                ("name", "Paris".to_string()),
                ("count", "5".to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ]
        );
    }

    #[test]
    fn forecast_params_request_fixed_field_sets() {
        let params = forecast_params(&WeatherQuery {
            lat: 48.85,
            lon: 2.35,
        });

        assert!(params.contains(&("latitude", "48.85".to_string())));
        assert!(params.contains(&("longitude", "2.35".to_string())));
        assert!(params.contains(&("timezone", "auto".to_string())));
        assert!(params.contains(&("hourly", "precipitation,cloud_cover".to_string())));

        let current = &params.iter().find(|(k, _)| *k == "current").unwrap().1;
        let fields: Vec<&str> = current.split(',').collect();
        assert_eq!(
            fields,
            vec![
                "temperature_2m",
                "relative_humidity_2m",
                "apparent_temperature",
                "precipitation",
                "wind_speed_10m",
                "wind_gusts_10m",
                "weather_code",
            ]
        );
    }

    #[test]
    fn forecast_projection_renames_current_fields() {
        let result = project_forecast(json!({
            "latitude": 48.86,
            "current": {
                "time": "2026-10-15T12:00",
                "temperature_2m": 21.5,
                "relative_humidity_2m": 64,
                "apparent_temperature": 20.9,
                "precipitation": 0.1,
                "wind_speed_10m": 11.2,
                "wind_gusts_10m": 24.8,
                "weather_code": 61
            },
            "hourly": {
                "time": ["2026-10-15T00:00", "2026-10-15T01:00"],
                "precipitation": [0.0, 0.4],
                "cloud_cover": [100, 87]
            }
        }));

        assert_eq!(
            result,
            json!({
                "temperature": 21.5,
                "apparent_temperature": 20.9,
                "humidity": 64,
                "precipitation": 0.1,
                "wind_speed": 11.2,
                "wind_gusts": 24.8,
                "weather_code": 61,
                "hourly": {
                    "precipitation": [0.0, 0.4],
                    "cloud_cover": [100, 87],
                    "time": ["2026-10-15T00:00", "2026-10-15T01:00"]
                }
            })
        );
    }

    #[test]
    fn forecast_projection_keeps_number_representation() {
        let parsed: OmForecastResponse = serde_json::from_str(
            r#"{"current":{"relative_humidity_2m":60,"weather_code":3.0},
                "hourly":{"precipitation":[0,0.2,1.0]}}"#,
        )
        .expect("float weather code should decode");

        let text = serde_json::to_string(&WeatherResult::from(parsed)).unwrap();

        assert!(text.contains(r#""humidity":60,"#), "{text}");
        assert!(text.contains(r#""weather_code":3.0,"#), "{text}");
        assert!(text.contains(r#""precipitation":[0,0.2,1.0]"#), "{text}");
    }

    #[test]
    fn forecast_projection_tolerates_missing_sections() {
        let empty = serde_json::to_value(WeatherResult::default()).unwrap();

        assert_eq!(project_forecast(json!({})), empty);
        assert_eq!(
            project_forecast(json!({ "current": null, "hourly": null })),
            empty
        );
    }

    #[test]
    fn forecast_projection_keeps_null_hourly_entries() {
        let result = project_forecast(json!({
            "current": { "temperature_2m": 3.0 },
            "hourly": { "precipitation": [null, 1.2] }
        }));

        assert_eq!(result["temperature"], json!(3.0));
        assert!(result["wind_gusts"].is_null());
        assert_eq!(result["hourly"]["precipitation"], json!([null, 1.2]));
        assert!(result["hourly"]["cloud_cover"].is_null());
    }

    #[test]
    fn geocode_projection_drops_extra_fields_and_keeps_order() {
        let parsed: OmGeocodeResponse = serde_json::from_value(json!({
            "results": [
                { "id": 2988507, "name": "Paris", "country": "France", "admin1": "Île-de-France",
                  "latitude": 48.85341, "longitude": 2.3488, "population": 2138551 },
                { "id": 4717560, "name": "Paris", "country": "United States",
                  "latitude": 33.66094, "longitude": -95.55551 }
            ],
            "generationtime_ms": 0.5
        }))
        .unwrap();

        let results: Vec<GeocodeResult> = parsed
            .results
            .unwrap()
            .into_iter()
            .map(GeocodeResult::from)
            .collect();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].country.as_deref(), Some("France"));
        assert_eq!(results[1].country.as_deref(), Some("United States"));
        assert_eq!(results[1].admin1, None);
    }

    #[test]
    fn geocode_response_without_results_is_empty() {
        let parsed: OmGeocodeResponse =
            serde_json::from_value(json!({ "generationtime_ms": 0.2 })).unwrap();
        assert!(parsed.results.is_none());
    }
}
