//! # Alien Colony Shared
//!
//! Configuration and error types used by the adapter and the binary.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
