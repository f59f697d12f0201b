//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use tracing::info;

use cep_weather::app::{AppDependencies, build_app};
use cep_weather::settings::Settings;
use state_builders::build_http_state;

/// Construct an Actix HTTP server from loaded settings.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener. Actix installs
/// SIGINT/SIGTERM handlers and drains workers for up to the configured
/// shutdown timeout.
///
/// # Errors
/// Propagates [`std::io::Error`] when adapter wiring, binding the socket or
/// starting the server fails.
pub fn create_server(settings: &Settings) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(settings)?);
    let ServerConfig {
        host,
        port,
        request_timeout,
        shutdown_timeout_secs,
    } = ServerConfig::from_settings(settings);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            request_timeout,
        })
    })
    .shutdown_timeout(shutdown_timeout_secs)
    .bind((host.as_str(), port))?
    .run();

    info!(%host, port, environment = settings.environment(), "server listening");
    Ok(server)
}
