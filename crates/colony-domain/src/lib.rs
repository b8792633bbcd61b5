//! # Alien Colony Domain Layer
//!
//! The colony's rules with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Alien entity, AlienType, rendered profiles    ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - The Colony arena and its five operations      ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Swapping HTTP frameworks or adding a persistent store never touches
//! the reproduction rules defined here.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ColonyError, ErrorKind, MAX_FIELD_LEN};

pub use model::{
    alien::{Alien, AlienId},
    alien_type::{AlienType, ParseAlienTypeError},
    profile::{AlienProfile, ParentLink},
};

pub use repository::colony_repository::{ColonyRepository, RepositoryError};

pub use service::colony::Colony;
