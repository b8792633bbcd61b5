//! Inbound Adapters - Turning requests into colony operations

pub mod error;
pub mod http;

pub use error::ApiError;
