//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers the weather and health
//! paths plus the envelope schema wrappers from
//! [`crate::inbound::http::schemas`].
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, HealthStatusSchema, TemperatureEnvelopeSchema,
};
use crate::inbound::http::weather::TemperatureResponse;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CEP weather API",
        description = "Current temperature for a Brazilian postal code (CEP)."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::weather::get_weather,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        TemperatureResponse,
        TemperatureEnvelopeSchema,
        ErrorEnvelopeSchema,
        HealthStatusSchema
    )),
    tags(
        (name = "weather", description = "Temperature lookups by postal code"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
