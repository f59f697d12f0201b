//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod weather;

pub use error::ApiResult;
