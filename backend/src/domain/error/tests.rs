//! Tests for domain error construction and classification.

use super::*;
use rstest::rstest;

#[rstest]
#[case::invalid_input(ErrorCode::InvalidInput, ErrorCategory::Validation)]
#[case::missing_parameter(ErrorCode::MissingParameter, ErrorCategory::Validation)]
#[case::invalid_zipcode(ErrorCode::InvalidZipcode, ErrorCategory::Validation)]
#[case::not_found(ErrorCode::ResourceNotFound, ErrorCategory::Business)]
#[case::zipcode_not_found(ErrorCode::ZipcodeNotFound, ErrorCategory::Business)]
#[case::weather(ErrorCode::WeatherServiceError, ErrorCategory::External)]
#[case::timeout(ErrorCode::ServiceTimeout, ErrorCategory::External)]
#[case::internal(ErrorCode::InternalServerError, ErrorCategory::System)]
fn codes_map_to_expected_category(#[case] code: ErrorCode, #[case] expected: ErrorCategory) {
    assert_eq!(code.category(), expected);
    assert_eq!(Error::new(code, "x").category(), expected);
}

#[rstest]
fn postal_code_errors_carry_fixed_messages() {
    let invalid = Error::invalid_zipcode();
    assert_eq!(invalid.code().as_str(), "INVALID_ZIPCODE");
    assert_eq!(invalid.message(), "invalid zipcode");
    assert_eq!(invalid.causes(), ["The provided zipcode format is invalid"]);

    let missing = Error::zipcode_not_found();
    assert_eq!(missing.code().as_str(), "ZIPCODE_NOT_FOUND");
    assert_eq!(missing.message(), "can not find zipcode");

    let weather = Error::weather_service_unavailable();
    assert_eq!(weather.code().as_str(), "WEATHER_SERVICE_ERROR");
    assert_eq!(weather.category(), ErrorCategory::External);
}

#[rstest]
fn causes_accumulate_in_order() {
    let err = Error::internal("boom")
        .with_cause("first")
        .with_causes(["second", "third"]);
    assert_eq!(err.causes(), ["first", "second", "third"]);
    assert_eq!(err.to_string(), "boom");
}

#[rstest]
fn request_timeout_uses_service_timeout_code() {
    let err = Error::request_timeout();
    assert_eq!(err.code(), ErrorCode::ServiceTimeout);
    assert_eq!(err.message(), "Request timeout exceeded");
    assert_eq!(err.causes(), ["Request exceeded the configured timeout"]);
}

#[rstest]
#[case::missing(
    Error::missing_postal_code(),
    ErrorCode::MissingParameter,
    "CEP parameter is required"
)]
#[case::panic(
    Error::unexpected_panic(),
    ErrorCode::InternalServerError,
    "Internal server error"
)]
fn boundary_errors_carry_fixed_messages(
    #[case] err: Error,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    assert_eq!(err.code(), code);
    assert_eq!(err.message(), message);
    assert_eq!(err.causes().len(), 1);
}
