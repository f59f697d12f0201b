//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::invalid_input(ErrorCode::InvalidInput, StatusCode::BAD_REQUEST)]
#[case::missing_parameter(ErrorCode::MissingParameter, StatusCode::BAD_REQUEST)]
#[case::invalid_format(ErrorCode::InvalidFormat, StatusCode::BAD_REQUEST)]
#[case::invalid_zipcode(ErrorCode::InvalidZipcode, StatusCode::UNPROCESSABLE_ENTITY)]
#[case::business_rule(ErrorCode::BusinessRuleViolation, StatusCode::BAD_REQUEST)]
#[case::resource_not_found(ErrorCode::ResourceNotFound, StatusCode::NOT_FOUND)]
#[case::zipcode_not_found(ErrorCode::ZipcodeNotFound, StatusCode::NOT_FOUND)]
#[case::external(ErrorCode::ExternalServiceError, StatusCode::BAD_GATEWAY)]
#[case::weather(ErrorCode::WeatherServiceError, StatusCode::BAD_GATEWAY)]
#[case::unavailable(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
#[case::timeout(ErrorCode::ServiceTimeout, StatusCode::GATEWAY_TIMEOUT)]
#[case::internal(ErrorCode::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&Error::new(code, "x")), expected);
}

async fn response_json(error: &Error) -> (StatusCode, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn error_response_renders_envelope() {
    let (status, body) = response_json(&Error::invalid_zipcode()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({
            "data": null,
            "message": "invalid zipcode",
            "causes": ["The provided zipcode format is invalid"]
        })
    );
}

#[rstest]
#[actix_web::test]
async fn timeout_response_is_gateway_timeout() {
    let (status, body) = response_json(&Error::request_timeout()).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["message"], "Request timeout exceeded");
}

#[rstest]
fn actix_errors_become_internal_with_cause() {
    let actix_error = actix_web::error::ErrorBadRequest("payload exploded");
    let err: Error = actix_error.into();

    assert_eq!(err.code(), ErrorCode::InternalServerError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.causes(), ["payload exploded"]);
}

async fn numeric_item(id: web::Path<u32>) -> HttpResponse {
    HttpResponse::Ok().body(id.into_inner().to_string())
}

#[rstest]
#[actix_web::test]
async fn path_extraction_failures_render_envelope() {
    use actix_web::{App, test as actix_test};

    let app = actix_test::init_service(
        App::new()
            .app_data(path_config())
            .route("/items/{id}", web::get().to(numeric_item)),
    )
    .await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/items/abc").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["message"], "Internal server error");
    let cause = body["causes"][0].as_str().expect("cause is a string");
    assert!(cause.contains("Path deserialize error"), "cause was {cause}");
}
