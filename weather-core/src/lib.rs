//! Core library for the weather relay.
//!
//! This crate defines:
//! - Configuration loading (server address, upstream endpoints, timeout)
//! - The `WeatherProvider` abstraction and its Open-Meteo implementation
//! - The projected request/response models served to the front-end
//! - `UpstreamError`, the single failure type of outbound calls
//!
//! It is used by `weather-relay`, but carries no HTTP server concerns of its own.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, ServerConfig, UpstreamConfig};
pub use error::{Endpoint, UpstreamError};
pub use model::{
    GeocodeQuery, GeocodeResponse, GeocodeResult, HourlySeries, WeatherQuery, WeatherResult,
};
pub use provider::{WeatherProvider, openmeteo::OpenMeteoProvider, provider_from_config};
