//! # Alien Colony Use Case Layer
//!
//! Application-specific business rules.
//! This layer runs each colony operation against a repository:
//! load the colony, apply the domain operation, save it back on success.

pub mod colony_service;
pub mod error;

pub use colony_domain;

pub use colony_service::ColonyService;
pub use error::ServiceError;
