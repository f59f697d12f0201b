//! Driving port used by inbound adapters to request temperatures.

use async_trait::async_trait;

use crate::domain::{Error, TemperatureReport, WeatherReading};

/// Use-case port: raw postal code in, temperatures out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherByPostalCode: Send + Sync {
    /// Validate `raw_postal_code`, resolve its city and report the current
    /// temperature in Celsius, Fahrenheit and Kelvin.
    ///
    /// # Errors
    ///
    /// Every failure is already classified into a domain [`Error`]; callers
    /// never see transport errors.
    async fn temperatures_for(&self, raw_postal_code: &str) -> Result<TemperatureReport, Error>;
}

/// Fixture implementation returning a fixed report.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureWeatherByPostalCode;

#[async_trait]
impl WeatherByPostalCode for FixtureWeatherByPostalCode {
    async fn temperatures_for(&self, _raw_postal_code: &str) -> Result<TemperatureReport, Error> {
        Ok(TemperatureReport::from_reading(&WeatherReading::new(
            25.5, 77.9,
        )))
    }
}
