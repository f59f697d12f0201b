//! Brazilian postal code (CEP) to current temperature service.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the lookup flow and
//! its ports, [`outbound`] the ViaCEP and WeatherAPI adapters, and
//! [`inbound`] the Actix handlers.

pub mod app;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
