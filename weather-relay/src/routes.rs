//! Route definitions

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the router with all routes and the CORS/trace layers.
///
/// CORS mirrors the caller's origin, method and headers and allows credentials,
/// which is what "any origin with credentials" has to look like on the wire.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/geocode", get(handlers::geocode::geocode))
        .route("/weather", get(handlers::weather::weather))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
