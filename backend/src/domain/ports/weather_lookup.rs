//! Driven port for fetching current weather by city name.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::WeatherReading;

define_port_error! {
    /// Errors surfaced while calling the weather service.
    pub enum WeatherLookupError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "weather transport failed: {message}",
        /// The request did not complete within the client timeout.
        Timeout { message: String } =>
            "weather request timed out: {message}",
        /// The service answered with a non-200 status.
        Status { status: u16 } =>
            "weather service returned status {status}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "weather response decode failed: {message}",
    }
}

/// Port for querying current conditions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Fetch the current reading for `city`.
    ///
    /// The city is passed as resolved by the address lookup; adapters own
    /// any escaping their transport needs.
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, WeatherLookupError>;
}

/// Fixture implementation returning a mild São Paulo afternoon.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureWeatherLookup;

#[async_trait]
impl WeatherLookup for FixtureWeatherLookup {
    async fn current_weather(&self, _city: &str) -> Result<WeatherReading, WeatherLookupError> {
        Ok(WeatherReading::new(25.5, 77.9))
    }
}
