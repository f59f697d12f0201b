//! Driven port for resolving a postal code to an address.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Address, PostalCode};

define_port_error! {
    /// Errors surfaced while calling the address lookup service.
    pub enum AddressLookupError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "address lookup transport failed: {message}",
        /// The request did not complete within the client timeout.
        Timeout { message: String } =>
            "address lookup timed out: {message}",
        /// The service answered with a non-200 status.
        Status { status: u16 } =>
            "address lookup returned status {status}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "address lookup response decode failed: {message}",
        /// The service reported the postal code as unknown.
        UnknownPostalCode { postal_code: String } =>
            "postal code {postal_code} is unknown to the address service",
    }
}

/// Port for looking up the address behind a postal code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve `postal_code` to an address.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use cep_weather::domain::PostalCode;
    /// use cep_weather::domain::ports::{AddressLookup, FixtureAddressLookup};
    ///
    /// let code = PostalCode::new("01001-000")?;
    /// let address = FixtureAddressLookup.find_address(&code).await?;
    /// assert_eq!(address.city, "São Paulo");
    /// ```
    async fn find_address(&self, postal_code: &PostalCode) -> Result<Address, AddressLookupError>;
}

/// Fixture implementation resolving every postal code to São Paulo.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAddressLookup;

#[async_trait]
impl AddressLookup for FixtureAddressLookup {
    async fn find_address(&self, _postal_code: &PostalCode) -> Result<Address, AddressLookupError> {
        Ok(Address::new("São Paulo", "SP"))
    }
}
