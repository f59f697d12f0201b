//! Request boundary enforcing a deadline and containing handler panics.
//!
//! Every downstream future runs under [`tokio::time::timeout`]. On expiry the
//! future is dropped, which cancels any in-flight outbound call, and the
//! request fails with the domain timeout error (a 504 envelope). A panic while
//! polling the downstream future is caught and becomes the domain panic error
//! (a 500 envelope) so the worker keeps serving. Both failures are returned as
//! [`actix_web::Error`]; actix renders them through [`ResponseError`].
//!
//! [`ResponseError`]: actix_web::ResponseError

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};
use std::time::Duration;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, warn};

use crate::domain;

/// Middleware bounding each request by `timeout` and mapping panics to 500.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use actix_web::App;
/// use cep_weather::middleware::RequestBoundary;
///
/// let app = App::new().wrap(RequestBoundary::new(Duration::from_secs(30)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestBoundary {
    timeout: Duration,
}

impl RequestBoundary {
    /// Create a boundary with the given per-request deadline.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestBoundary
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestBoundaryMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestBoundaryMiddleware {
            service,
            timeout: self.timeout,
        }))
    }
}

/// Service wrapper produced by [`RequestBoundary`].
pub struct RequestBoundaryMiddleware<S> {
    service: S,
    timeout: Duration,
}

impl<S, B> Service<ServiceRequest> for RequestBoundaryMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Routing needs sole ownership of the request, so only the path is kept.
        let path = req.path().to_owned();
        let timeout = self.timeout;
        let fut = AssertUnwindSafe(self.service.call(req)).catch_unwind();
        Box::pin(async move {
            let failure = match tokio::time::timeout(timeout, fut).await {
                Ok(Ok(result)) => return result,
                Ok(Err(payload)) => {
                    error!(
                        path = %path,
                        panic = %panic_message(payload.as_ref()),
                        "handler panicked"
                    );
                    domain::Error::unexpected_panic()
                }
                Err(_) => {
                    warn!(
                        path = %path,
                        timeout_secs = timeout.as_secs_f64(),
                        "request deadline exceeded"
                    );
                    domain::Error::request_timeout()
                }
            };
            Err(failure.into())
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
