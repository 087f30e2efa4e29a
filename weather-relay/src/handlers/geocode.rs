use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use weather_core::{GeocodeQuery, GeocodeResponse};

use crate::{error::ApiError, state::AppState};

/// `GET /geocode?q=<place>`
pub async fn geocode(
    State(state): State<AppState>,
    query: Result<Query<GeocodeQuery>, QueryRejection>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let Query(query) = query?;

    if query.q.is_empty() {
        return Err(ApiError::BadRequest("query parameter `q` must not be empty".to_string()));
    }

    let results = state.provider.geocode(&query).await?;

    Ok(Json(GeocodeResponse { results }))
}
