use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use weather_core::{WeatherQuery, WeatherResult};

use crate::{error::ApiError, state::AppState};

/// `GET /weather?lat=<f64>&lon=<f64>`
///
/// Coordinates are forwarded as given; only non-finite values are refused.
pub async fn weather(
    State(state): State<AppState>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherResult>, ApiError> {
    let Query(query) = query?;

    if !query.lat.is_finite() || !query.lon.is_finite() {
        return Err(ApiError::BadRequest("`lat` and `lon` must be finite numbers".to_string()));
    }

    let result = state.provider.current_weather(&query).await?;

    Ok(Json(result))
}
