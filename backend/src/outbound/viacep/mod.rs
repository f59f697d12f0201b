//! ViaCEP outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `AddressLookup`
//! port.

mod dto;
mod http_source;

pub use http_source::ViaCepHttpSource;
