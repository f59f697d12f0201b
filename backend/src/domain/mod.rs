//! Domain primitives, ports and services.
//!
//! Purpose: hold the postal code to temperature flow free of HTTP and
//! transport concerns. Inbound adapters call the driving port
//! [`ports::WeatherByPostalCode`]; outbound adapters implement the driven
//! lookups.
//!
//! Public surface:
//! - Error / ErrorCode / ErrorCategory: classified failures.
//! - PostalCode: validated, normalised CEP.
//! - Address, WeatherReading, TemperatureReport: lookup records.
//! - WeatherByPostalCodeService: the orchestration use case.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod postal_code;
pub mod trace_id;
pub mod weather;
mod weather_service;

pub use self::error::{Error, ErrorCategory, ErrorCode};
pub use self::postal_code::{PostalCode, PostalCodeValidationError};
pub use self::trace_id::TraceId;
pub use self::weather::{Address, KELVIN_OFFSET, TemperatureReport, WeatherReading};
pub use self::weather_service::WeatherByPostalCodeService;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
