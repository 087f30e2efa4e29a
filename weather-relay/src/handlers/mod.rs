//! HTTP handlers

pub mod geocode;
pub mod health;
pub mod weather;
