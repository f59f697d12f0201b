//! OpenAPI schema definitions for the response envelope.
//!
//! `ApiEnvelope` is generic over its payload, so the documented shapes are
//! registered here as concrete wrappers. They mirror the serialised JSON and
//! are never constructed.

use utoipa::ToSchema;

use super::weather::TemperatureResponse;

/// OpenAPI schema for a failed request.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    /// Always `null` for errors.
    #[schema(value_type = Option<Object>)]
    data: Option<serde_json::Value>,
    /// Human-readable summary of the failure.
    #[schema(example = "can not find zipcode")]
    message: String,
    /// Supplementary error detail; omitted when empty.
    #[schema(example = json!(["The provided zipcode was not found"]))]
    causes: Option<Vec<String>>,
}

/// OpenAPI schema for a successful temperature lookup.
#[derive(ToSchema)]
#[schema(as = TemperatureEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TemperatureEnvelopeSchema {
    /// Temperatures in all three scales.
    data: TemperatureResponse,
    /// Human-readable summary of the outcome.
    #[schema(example = "Weather data retrieved successfully")]
    message: String,
}

/// OpenAPI schema for the health probe body.
#[derive(ToSchema)]
#[schema(as = HealthStatus)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HealthStatusSchema {
    #[schema(example = "healthy")]
    status: String,
}
