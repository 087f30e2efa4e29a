//! HTTP surface of the weather relay.
//!
//! Exposes `/health`, `/geocode` and `/weather`, forwarding the latter two to
//! the configured `WeatherProvider` and returning the projected JSON.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
