//! Scene Gateway Core Library
//!
//! Request handling for the imagery gateway:
//! - validation of search parameters into a [`SearchFilter`](types::SearchFilter)
//! - delegation to an [`ImageryProvider`](scene_gateway_provider::ImageryProvider)
//! - shaping of search, asset and activation results
//! - the error taxonomy surfaced to HTTP clients
//!
//! Platform-independent; the web crate only adds routing and envelopes.

pub mod error;
pub mod services;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ErrorKind};
pub use services::ImageryService;
