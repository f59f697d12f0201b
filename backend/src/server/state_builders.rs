//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use cep_weather::domain::WeatherByPostalCodeService;
use cep_weather::inbound::http::state::HttpState;
use cep_weather::outbound::viacep::ViaCepHttpSource;
use cep_weather::outbound::weatherapi::WeatherApiHttpSource;
use cep_weather::settings::Settings;

/// Build the HTTP state backed by the ViaCEP and WeatherAPI adapters.
///
/// Each adapter owns one reqwest client so connections are reused across
/// requests and workers.
///
/// # Errors
/// Returns [`std::io::Error`] when a base URL is invalid or an HTTP client
/// cannot be constructed.
pub fn build_http_state(settings: &Settings) -> std::io::Result<HttpState> {
    let client_timeout = settings.request_timeout();
    let viacep_base_url = settings.viacep_base_url().map_err(std::io::Error::other)?;
    let weather_base_url = settings
        .weather_base_url()
        .map_err(std::io::Error::other)?;

    let addresses = ViaCepHttpSource::new(viacep_base_url, client_timeout).map_err(|e| {
        std::io::Error::other(format!("ViaCEP client construction failed: {e}"))
    })?;
    let weather = WeatherApiHttpSource::new(
        weather_base_url,
        settings.weather_api_key(),
        client_timeout,
    )
    .map_err(|e| std::io::Error::other(format!("WeatherAPI client construction failed: {e}")))?;

    let service = WeatherByPostalCodeService::new(Arc::new(addresses), Arc::new(weather));
    Ok(HttpState::new(Arc::new(service)))
}
