//! HTTP server configuration object and helpers.

use std::time::Duration;

use cep_weather::settings::Settings;

/// Listener and lifecycle settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) request_timeout: Duration,
    pub(crate) shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Derive the server configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let (host, port) = settings.bind_addr();
        Self {
            host: host.to_owned(),
            port,
            request_timeout: settings.request_timeout(),
            shutdown_timeout_secs: settings.shutdown_timeout_secs(),
        }
    }
}
