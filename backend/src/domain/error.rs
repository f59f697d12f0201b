//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters derive a status code
//! from [`ErrorCode`] and render the message and causes into their own
//! envelope.

use std::fmt;

/// Broad failure category, used to group codes in logs and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller supplied input of the wrong shape.
    Validation,
    /// A domain rule rejected the request, including unknown resources.
    Business,
    /// An upstream dependency failed or did not answer in time.
    External,
    /// Unexpected internal failure.
    System,
}

impl ErrorCategory {
    /// Lower-case tag used in structured log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Business => "business",
            Self::External => "external",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable machine-readable error code describing the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Generic malformed input.
    InvalidInput,
    /// A required request parameter was absent.
    MissingParameter,
    /// A parameter was present but badly formatted.
    InvalidFormat,
    /// The postal code does not have a recognised shape.
    InvalidZipcode,
    /// Generic unknown resource.
    ResourceNotFound,
    /// Generic domain rule violation.
    BusinessRuleViolation,
    /// The postal code could not be resolved to an address.
    ZipcodeNotFound,
    /// Generic upstream failure.
    ExternalServiceError,
    /// The weather service could not provide a reading.
    WeatherServiceError,
    /// An upstream dependency is not available.
    ServiceUnavailable,
    /// The request exceeded its deadline.
    ServiceTimeout,
    /// An unexpected error occurred inside the service.
    InternalServerError,
}

impl ErrorCode {
    /// Wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidZipcode => "INVALID_ZIPCODE",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::BusinessRuleViolation => "BUSINESS_RULE_VIOLATION",
            Self::ZipcodeNotFound => "ZIPCODE_NOT_FOUND",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::WeatherServiceError => "WEATHER_SERVICE_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::ServiceTimeout => "SERVICE_TIMEOUT",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Category the code belongs to.
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::InvalidInput
            | Self::MissingParameter
            | Self::InvalidFormat
            | Self::InvalidZipcode => ErrorCategory::Validation,
            Self::ResourceNotFound | Self::BusinessRuleViolation | Self::ZipcodeNotFound => {
                ErrorCategory::Business
            }
            Self::ExternalServiceError
            | Self::WeatherServiceError
            | Self::ServiceUnavailable
            | Self::ServiceTimeout => ErrorCategory::External,
            Self::InternalServerError => ErrorCategory::System,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// Built once at the point of failure and handed unchanged to the inbound
/// adapter.
///
/// # Examples
/// ```
/// use cep_weather::domain::{Error, ErrorCategory, ErrorCode};
///
/// let err = Error::zipcode_not_found();
/// assert_eq!(err.code(), ErrorCode::ZipcodeNotFound);
/// assert_eq!(err.category(), ErrorCategory::Business);
/// assert_eq!(err.message(), "can not find zipcode");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    causes: Vec<String>,
}

impl Error {
    /// Create an error without causes.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Append one cause string.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Append several cause strings.
    #[must_use]
    pub fn with_causes<I, S>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.causes.extend(causes.into_iter().map(Into::into));
        self
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Category derived from the code.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Human-readable message returned to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary cause strings, possibly empty.
    #[must_use]
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// Convenience constructor for [`ErrorCode::InvalidInput`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Convenience constructor for [`ErrorCode::MissingParameter`].
    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingParameter, message)
    }

    /// Convenience constructor for [`ErrorCode::BusinessRuleViolation`].
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BusinessRuleViolation, message)
    }

    /// Convenience constructor for [`ErrorCode::ResourceNotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ExternalServiceError`].
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceTimeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceTimeout, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalServerError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalServerError, message)
    }

    /// The postal code has neither the `DDDDD-DDD` nor the `DDDDDDDD` shape.
    #[must_use]
    pub fn invalid_zipcode() -> Self {
        Self::new(ErrorCode::InvalidZipcode, "invalid zipcode")
            .with_cause("The provided zipcode format is invalid")
    }

    /// The address lookup could not resolve the postal code.
    #[must_use]
    pub fn zipcode_not_found() -> Self {
        Self::new(ErrorCode::ZipcodeNotFound, "can not find zipcode")
            .with_cause("The provided zipcode was not found")
    }

    /// The weather lookup failed for the resolved city.
    #[must_use]
    pub fn weather_service_unavailable() -> Self {
        Self::new(
            ErrorCode::WeatherServiceError,
            "Weather service temporarily unavailable",
        )
        .with_cause("Unable to fetch weather data from external service")
    }

    /// The request did not finish before its deadline.
    #[must_use]
    pub fn request_timeout() -> Self {
        Self::timeout("Request timeout exceeded")
            .with_cause("Request exceeded the configured timeout")
    }

    /// The request path carried no postal code.
    #[must_use]
    pub fn missing_postal_code() -> Self {
        Self::missing_parameter("CEP parameter is required")
            .with_cause("CEP parameter must be provided in the URL path")
    }

    /// A handler panicked while serving the request.
    #[must_use]
    pub fn unexpected_panic() -> Self {
        Self::internal("Internal server error")
            .with_cause("An unexpected error occurred in the application")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
