//! Reqwest-backed ViaCEP address adapter.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP status mapping, and JSON decoding into the domain [`Address`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::dto::ViaCepResponseDto;
use crate::domain::ports::{AddressLookup, AddressLookupError};
use crate::domain::{Address, PostalCode};

/// Address lookup adapter issuing `GET {base_url}{postal_code}/json/`.
pub struct ViaCepHttpSource {
    client: Client,
    base_url: String,
}

impl ViaCepHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// `base_url` is used verbatim as a prefix, so it must end with the path
    /// separator the service expects (e.g. `https://viacep.com.br/ws/`).
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Build an adapter around an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn address_url(&self, postal_code: &PostalCode) -> String {
        format!("{}{}/json/", self.base_url, postal_code.as_str())
    }
}

#[async_trait]
impl AddressLookup for ViaCepHttpSource {
    async fn find_address(&self, postal_code: &PostalCode) -> Result<Address, AddressLookupError> {
        let response = self
            .client
            .get(self.address_url(postal_code))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AddressLookupError::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_address(postal_code, body.as_ref())
    }
}

fn parse_address(postal_code: &PostalCode, body: &[u8]) -> Result<Address, AddressLookupError> {
    let decoded: ViaCepResponseDto = serde_json::from_slice(body).map_err(|error| {
        AddressLookupError::decode(format!("invalid ViaCEP JSON payload: {error}"))
    })?;
    decoded.into_domain_address(postal_code.as_str())
}

fn map_transport_error(error: reqwest::Error) -> AddressLookupError {
    if error.is_timeout() {
        AddressLookupError::timeout(error.to_string())
    } else {
        AddressLookupError::transport(error.to_string())
    }
}
