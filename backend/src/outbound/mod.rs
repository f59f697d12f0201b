//! Outbound adapters implementing domain ports for external services.
//!
//! - **viacep**: postal code to address lookups.
//! - **weatherapi**: current conditions by city name.
//!
//! Adapters are thin translators between wire payloads and domain records.
//! They contain no business logic.

pub mod viacep;
pub mod weatherapi;
