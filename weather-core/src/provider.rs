use crate::{
    GeocodeQuery, GeocodeResult, UpstreamError, WeatherQuery, WeatherResult,
    config::UpstreamConfig, provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openmeteo;

/// Source of geocoding and weather data.
///
/// Each call is a single outbound request; implementations never retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Places matching `query.q`, in upstream relevance order.
    async fn geocode(&self, query: &GeocodeQuery) -> Result<Vec<GeocodeResult>, UpstreamError>;

    /// Current conditions and the hourly precipitation/cloud series.
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherResult, UpstreamError>;
}

/// Build the provider the relay shares across all requests.
pub fn provider_from_config(config: &UpstreamConfig) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = OpenMeteoProvider::new(config)?;
    Ok(Arc::new(provider))
}
