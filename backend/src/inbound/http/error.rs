//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the JSON envelope and a status code
//! derived solely from the error code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use tracing::error;

use super::envelope::ApiEnvelope;
use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidInput
        | ErrorCode::MissingParameter
        | ErrorCode::InvalidFormat
        | ErrorCode::BusinessRuleViolation => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ResourceNotFound | ErrorCode::ZipcodeNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ExternalServiceError | ErrorCode::WeatherServiceError => {
            StatusCode::BAD_GATEWAY
        }
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::ServiceTimeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiEnvelope::failure(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error").with_cause(err.to_string())
    }
}

/// Path extractor configuration rendering failures as the error envelope.
///
/// Extraction errors are unclassified, so they surface as a 500 with the
/// extractor's message as the cause.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let unclassified = actix_web::Error::from(err);
        Error::from(unclassified).into()
    })
}

#[cfg(test)]
mod tests;
