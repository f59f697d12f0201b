//! Service entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use cep_weather::settings::Settings;
use ortho_config::OrthoConfig;
use server::create_server;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?
        .with_env_fallbacks(|name| std::env::var(name).ok());
    if settings.weather_api_key().is_empty() {
        warn!("weather API key is not set; weather lookups will be rejected upstream");
    }

    create_server(&settings)?.await
}
