//! Service configuration loaded via OrthoConfig.
//!
//! Values come from defaults, `CEP_WEATHER_*` environment variables and CLI
//! flags. Deployments configured with the unprefixed names (`PORT`,
//! `WEATHER_API_KEY`, ...) are honoured through
//! [`Settings::with_env_fallbacks`], below the prefixed names in precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws/";
const DEFAULT_WEATHER_BASE_URL: &str = "http://api.weatherapi.com/v1/current.json?key=";

/// Errors raised when a configured value cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A base URL setting is not an absolute URL.
    #[error("{field} is not a valid URL ({value}): {source}")]
    InvalidUrl {
        /// Setting that failed to parse.
        field: &'static str,
        /// Rejected value.
        value: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
}

/// Configuration values for the HTTP server and its upstream clients.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CEP_WEATHER")]
pub struct Settings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Deployment environment label, e.g. `development` or `production`.
    pub environment: Option<String>,
    /// Deadline for a whole request, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// ViaCEP base URL; the postal code and `/json/` are appended.
    pub viacep_base_url: Option<String>,
    /// WeatherAPI base URL ending in `key=`.
    pub weather_base_url: Option<String>,
    /// WeatherAPI key.
    pub weather_api_key: Option<String>,
    /// Grace period for in-flight requests on shutdown, in seconds.
    #[ortho_config(default = 30)]
    pub shutdown_timeout_secs: u64,
}

impl Settings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Address tuple accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host(), self.port())
    }

    /// Return the deployment environment label.
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// Per-request deadline. Never shorter than one second.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .max(1);
        Duration::from_secs(secs)
    }

    /// Grace period granted to workers on shutdown.
    pub const fn shutdown_timeout_secs(&self) -> u64 {
        self.shutdown_timeout_secs
    }

    /// Return the WeatherAPI key; empty when unset.
    pub fn weather_api_key(&self) -> &str {
        self.weather_api_key.as_deref().unwrap_or_default()
    }

    /// Return the validated ViaCEP base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the value does not parse.
    pub fn viacep_base_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "viacep_base_url",
            self.viacep_base_url
                .as_deref()
                .unwrap_or(DEFAULT_VIACEP_BASE_URL),
        )
    }

    /// Return the validated WeatherAPI base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the value does not parse.
    pub fn weather_base_url(&self) -> Result<Url, SettingsError> {
        parse_url(
            "weather_base_url",
            self.weather_base_url
                .as_deref()
                .unwrap_or(DEFAULT_WEATHER_BASE_URL),
        )
    }
}

impl Settings {
    /// Fill unset fields from the unprefixed variable names.
    ///
    /// `lookup` resolves a variable name, normally `std::env::var(name).ok()`.
    /// Values already supplied through flags or `CEP_WEATHER_*` variables are
    /// kept. Numeric values that do not parse are logged and ignored.
    ///
    /// # Examples
    /// ```
    /// use cep_weather::settings::Settings;
    ///
    /// let settings = Settings::default()
    ///     .with_env_fallbacks(|name| (name == "PORT").then(|| "3000".to_owned()));
    /// assert_eq!(settings.port(), 3000);
    /// ```
    #[must_use]
    pub fn with_env_fallbacks<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |name: &str| {
            lookup(name).and_then(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .inspect_err(|error| warn!(variable = name, %error, "ignoring invalid value"))
                    .ok()
            })
        };
        Self {
            host: self.host.or_else(|| lookup("HOST")),
            port: self.port.or_else(|| number("PORT").and_then(|p| u16::try_from(p).ok())),
            environment: self.environment.or_else(|| lookup("ENV")),
            request_timeout_secs: self
                .request_timeout_secs
                .or_else(|| number("REQUEST_TIMEOUT_SEC")),
            viacep_base_url: self.viacep_base_url.or_else(|| lookup("VIACEP_BASE_URL")),
            weather_base_url: self.weather_base_url.or_else(|| lookup("WEATHER_BASE_URL")),
            weather_api_key: self.weather_api_key.or_else(|| lookup("WEATHER_API_KEY")),
            shutdown_timeout_secs: self.shutdown_timeout_secs,
        }
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, SettingsError> {
    Url::parse(value).map_err(|source| SettingsError::InvalidUrl {
        field,
        value: value.to_owned(),
        source,
    })
}
