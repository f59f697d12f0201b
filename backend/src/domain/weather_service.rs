//! Postal code to temperature orchestration.
//!
//! The flow is strictly linear: validate the postal code, resolve its
//! address, fetch the weather for the resolved city and convert the reading.
//! Every port failure is folded into a single domain error per step, so the
//! address lookup always surfaces as "not found" and the weather lookup
//! always as an upstream failure, whatever the transport cause.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{AddressLookup, WeatherByPostalCode, WeatherLookup};
use crate::domain::{Error, PostalCode, TemperatureReport};

/// Service implementing [`WeatherByPostalCode`] over the two lookup ports.
///
/// The ports may be concrete adapters or trait objects such as
/// `Arc<dyn AddressLookup>`.
pub struct WeatherByPostalCodeService<A: ?Sized, W: ?Sized> {
    addresses: Arc<A>,
    weather: Arc<W>,
}

impl<A: ?Sized, W: ?Sized> WeatherByPostalCodeService<A, W> {
    /// Create a new service with the given lookups.
    pub fn new(addresses: Arc<A>, weather: Arc<W>) -> Self {
        Self { addresses, weather }
    }
}

impl<A: ?Sized, W: ?Sized> Clone for WeatherByPostalCodeService<A, W> {
    fn clone(&self) -> Self {
        Self {
            addresses: Arc::clone(&self.addresses),
            weather: Arc::clone(&self.weather),
        }
    }
}

#[async_trait]
impl<A, W> WeatherByPostalCode for WeatherByPostalCodeService<A, W>
where
    A: AddressLookup + ?Sized,
    W: WeatherLookup + ?Sized,
{
    async fn temperatures_for(&self, raw_postal_code: &str) -> Result<TemperatureReport, Error> {
        debug!(postal_code = raw_postal_code, "resolving temperatures for postal code");

        let postal_code = PostalCode::new(raw_postal_code).map_err(|err| {
            error!(postal_code = raw_postal_code, error = %err, "invalid postal code format");
            Error::invalid_zipcode()
        })?;

        let address = self
            .addresses
            .find_address(&postal_code)
            .await
            .map_err(|err| {
                error!(%postal_code, error = %err, "address lookup failed");
                Error::zipcode_not_found()
            })?;
        info!(
            %postal_code,
            city = %address.city,
            state = %address.state,
            "address resolved"
        );

        let reading = self
            .weather
            .current_weather(&address.city)
            .await
            .map_err(|err| {
                error!(city = %address.city, error = %err, "weather lookup failed");
                Error::weather_service_unavailable()
            })?;
        info!(
            city = %address.city,
            temp_c = reading.temp_c,
            "weather reading retrieved"
        );

        Ok(TemperatureReport::from_reading(&reading))
    }
}
