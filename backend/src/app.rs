//! Application factory shared by the server binary and integration tests.

use std::time::Duration;

use actix_web::body::BoxBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::error::path_config;
use crate::inbound::http::health::health;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::weather::get_weather;
use crate::middleware::{RequestBoundary, Trace};

/// Everything an [`App`] instance needs; cloned into each worker.
#[derive(Clone)]
pub struct AppDependencies {
    /// Shared handler state holding the weather use case.
    pub http_state: web::Data<HttpState>,
    /// Deadline applied to every request by [`RequestBoundary`].
    pub request_timeout: Duration,
}

/// Build the Actix application with routes and middleware.
///
/// `Trace` wraps `RequestBoundary`, so timeout and panic responses still
/// carry a `trace-id` header. Path extraction failures render the error
/// envelope rather than actix's plain-text body.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        request_timeout,
    } = deps;

    let api = web::scope("/api/v1").service(get_weather);

    let app = App::new()
        .app_data(http_state)
        .app_data(path_config())
        .wrap(RequestBoundary::new(request_timeout))
        .wrap(Trace)
        .service(health)
        .service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
