//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns:
//! trace identifiers, per-request deadlines and panic containment.

pub mod boundary;
pub mod trace;

pub use boundary::RequestBoundary;
pub use trace::Trace;
