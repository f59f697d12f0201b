//! Postal code weather HTTP handler.
//!
//! ```text
//! GET /api/v1/weather/{postal_code}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::{Error, TemperatureReport, TraceId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiEnvelope;
use crate::inbound::http::schemas::{ErrorEnvelopeSchema, TemperatureEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Message returned alongside a successful lookup.
pub const SUCCESS_MESSAGE: &str = "Weather data retrieved successfully";

/// Temperatures in Celsius, Fahrenheit and Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureResponse {
    /// Degrees Celsius, as reported upstream.
    #[serde(rename = "temp_C")]
    #[schema(example = 25.5)]
    pub temp_c: f64,
    /// Degrees Fahrenheit, as reported upstream.
    #[serde(rename = "temp_F")]
    #[schema(example = 77.9)]
    pub temp_f: f64,
    /// Kelvin, derived from Celsius.
    #[serde(rename = "temp_K")]
    #[schema(example = 298.65)]
    pub temp_k: f64,
}

impl From<TemperatureReport> for TemperatureResponse {
    fn from(value: TemperatureReport) -> Self {
        Self {
            temp_c: value.temp_c,
            temp_f: value.temp_f,
            temp_k: value.temp_k,
        }
    }
}

fn require_postal_code(raw: &str) -> Result<&str, Error> {
    if raw.is_empty() {
        return Err(Error::missing_postal_code());
    }
    Ok(raw)
}

fn trace_label() -> String {
    TraceId::current().map_or_else(String::new, |id| id.to_string())
}

/// Resolve the current temperature for a Brazilian postal code.
#[utoipa::path(
    get,
    path = "/api/v1/weather/{postal_code}",
    description = "Look up the city for a CEP and return its current temperature.",
    params(
        ("postal_code" = String, Path, description = "CEP as `DDDDD-DDD` or `DDDDDDDD`", example = "01001-000")
    ),
    responses(
        (status = 200, description = "Current temperatures", body = TemperatureEnvelopeSchema),
        (status = 400, description = "Postal code missing", body = ErrorEnvelopeSchema),
        (status = 404, description = "Postal code not found", body = ErrorEnvelopeSchema),
        (status = 422, description = "Postal code malformed", body = ErrorEnvelopeSchema),
        (status = 502, description = "Weather service failed", body = ErrorEnvelopeSchema),
        (status = 504, description = "Request deadline exceeded", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["weather"],
    operation_id = "getWeatherByPostalCode"
)]
#[get("/weather/{postal_code}")]
pub async fn get_weather(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let trace_id = trace_label();
    let postal_code = require_postal_code(&raw).inspect_err(|_| {
        warn!(%trace_id, "request without postal code");
    })?;

    info!(%trace_id, postal_code, "weather requested");
    let report = state
        .weather
        .temperatures_for(postal_code)
        .await
        .inspect_err(|err| {
            warn!(
                %trace_id,
                postal_code,
                code = %err.code(),
                error = %err,
                "weather request failed"
            );
        })?;
    info!(%trace_id, postal_code, temp_c = report.temp_c, "weather request served");

    Ok(HttpResponse::Ok().json(ApiEnvelope::success(
        TemperatureResponse::from(report),
        SUCCESS_MESSAGE,
    )))
}
