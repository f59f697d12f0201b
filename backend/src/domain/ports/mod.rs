//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod address_lookup;
mod weather_by_postal_code;
mod weather_lookup;

#[cfg(test)]
pub use address_lookup::MockAddressLookup;
pub use address_lookup::{AddressLookup, AddressLookupError, FixtureAddressLookup};
#[cfg(test)]
pub use weather_by_postal_code::MockWeatherByPostalCode;
pub use weather_by_postal_code::{FixtureWeatherByPostalCode, WeatherByPostalCode};
#[cfg(test)]
pub use weather_lookup::MockWeatherLookup;
pub use weather_lookup::{FixtureWeatherLookup, WeatherLookup, WeatherLookupError};
