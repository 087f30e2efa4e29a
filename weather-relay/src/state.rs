//! Shared router state

use std::sync::Arc;

use weather_core::WeatherProvider;

/// Handed to every handler; cloning only bumps the provider refcount.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}
