//! Health probe for load balancers and orchestration.
//!
//! ```text
//! GET /health
//! ```

use actix_web::{HttpResponse, get, http::header};
use serde_json::json;

use crate::inbound::http::schemas::HealthStatusSchema;

/// Report that the process is serving requests.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is healthy", body = HealthStatusSchema)
    ),
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn reports_healthy() {
        let app = actix_test::init_service(App::new().service(health)).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/health").to_request())
                .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "status": "healthy" }));
    }
}
