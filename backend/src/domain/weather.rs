//! Address and temperature records exchanged with the lookup ports.

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Address resolved from a postal code.
///
/// Only `city` feeds the weather lookup; the remaining fields are kept for
/// logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// City name (ViaCEP `localidade`).
    pub city: String,
    /// Two-letter state code (ViaCEP `uf`).
    pub state: String,
    /// Postal code as echoed by the lookup service.
    pub postal_code: Option<String>,
    /// Street name, when the postal code maps to a single street.
    pub street: Option<String>,
    /// Complement such as a number range or building side.
    pub complement: Option<String>,
    /// Neighbourhood name.
    pub district: Option<String>,
    /// IBGE municipality code.
    pub ibge_code: Option<String>,
}

impl Address {
    /// Create an address with only the fields the lookup flow needs.
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            ..Self::default()
        }
    }
}

/// Current conditions reported by the weather service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius.
    pub temp_c: f64,
    /// Temperature in degrees Fahrenheit, as reported upstream.
    pub temp_f: f64,
    /// Location name the service matched the query to.
    pub location: Option<String>,
    /// Short human-readable condition, e.g. "Partly cloudy".
    pub condition: Option<String>,
}

impl WeatherReading {
    /// Create a reading from the two reported temperatures.
    #[must_use]
    pub fn new(temp_c: f64, temp_f: f64) -> Self {
        Self {
            temp_c,
            temp_f,
            ..Self::default()
        }
    }
}

/// Temperatures returned to callers in all three scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReport {
    /// Degrees Celsius.
    pub temp_c: f64,
    /// Degrees Fahrenheit.
    pub temp_f: f64,
    /// Kelvin, always `temp_c + 273.15`.
    pub temp_k: f64,
}

impl TemperatureReport {
    /// Derive the report from an upstream reading.
    ///
    /// # Examples
    /// ```
    /// use cep_weather::domain::{TemperatureReport, WeatherReading};
    ///
    /// let report = TemperatureReport::from_reading(&WeatherReading::new(25.5, 77.9));
    /// assert_eq!(report.temp_k, 298.65);
    /// ```
    #[must_use]
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            temp_c: reading.temp_c,
            temp_f: reading.temp_f,
            temp_k: celsius_to_kelvin(reading.temp_c),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "scale conversion is inherently floating point"
)]
fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(25.5, 298.65)]
    #[case(0.0, 273.15)]
    #[case(-273.15, 0.0)]
    fn kelvin_adds_fixed_offset(#[case] celsius: f64, #[case] kelvin: f64) {
        let report = TemperatureReport::from_reading(&WeatherReading::new(celsius, 0.0));
        assert_eq!(report.temp_k, kelvin);
    }

    #[rstest]
    fn fahrenheit_is_passed_through_untouched() {
        let report = TemperatureReport::from_reading(&WeatherReading::new(25.5, 77.9));
        assert_eq!(report.temp_c, 25.5);
        assert_eq!(report.temp_f, 77.9);
    }
}
