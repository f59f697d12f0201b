//! JSON envelope shared by every API response.
//!
//! Successful responses populate `data`; failures leave it `null` and list
//! supplementary detail in `causes`, which is omitted when empty.

use serde::{Deserialize, Serialize};

use crate::domain::Error;

/// Uniform response body: `{data, message, causes}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Payload for successful responses; `null` on errors.
    pub data: Option<T>,
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Additional error detail.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a successful payload.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            message: message.into(),
            causes: Vec::new(),
        }
    }
}

impl ApiEnvelope<()> {
    /// Render a domain error without a payload.
    pub fn failure(error: &Error) -> Self {
        Self {
            data: None,
            message: error.message().to_owned(),
            causes: error.causes().to_vec(),
        }
    }
}
