//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::WeatherByPostalCode;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use case resolving a postal code to temperatures.
    pub weather: Arc<dyn WeatherByPostalCode>,
}

impl HttpState {
    /// Construct state from the postal code weather use case.
    pub fn new(weather: Arc<dyn WeatherByPostalCode>) -> Self {
        Self { weather }
    }
}
