//! Colony Errors - Every way a colony operation can be refused
//!
//! The wording of these messages is part of the public contract:
//! the HTTP layer answers 404 for any message containing "not exist"
//! or "not found" and 400 for everything else. Only the `NotFound`
//! kind may use either phrase.

use crate::model::alien_type::AlienType;

/// Maximum length of an alien's name or home planet, in characters.
pub const MAX_FIELD_LEN: usize = 50;

/// Coarse classification of a [`ColonyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No colony has been started (or it has been emptied)
    NotStarted,
    /// A required field is missing or a field is too long
    Validation,
    /// The requested name is already taken
    DuplicateName,
    /// The alien (or parent) being addressed does not exist
    NotFound,
    /// A non-ALPHA alien was asked to bear or list children
    Reproduction,
    /// A third child was requested
    Capacity,
    /// The tree is corrupted; never a caller mistake
    InvariantViolation,
}

/// Errors raised by [`Alien`](crate::Alien) and [`Colony`](crate::Colony)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColonyError {
    /// Any operation on a colony that has not been started
    NotStarted,
    /// Name or type absent when minting an alien
    MissingNameOrType,
    /// addAlien called without a parent name
    MissingParent,
    /// Name or home planet longer than [`MAX_FIELD_LEN`]
    FieldTooLong { field: &'static str },
    /// Another alien already carries this name
    DuplicateName { name: String },
    /// addAlien: the parent does not exist
    ParentNotFound { parent: String },
    /// getAlien: no alien with that name
    AlienNotFound { name: String },
    /// updateAlien: no alien with that name
    UpdateTargetMissing { name: String },
    /// deleteAlien: no alien with that name
    DeleteTargetMissing { name: String },
    /// A non-ALPHA alien was asked to reproduce
    CannotReproduce { name: String, alien_type: AlienType },
    /// A non-ALPHA alien was asked for its children
    NoChildren,
    /// Both lifetime child slots have already been used
    CapacityReached { name: String },
    /// More than one alien claims the same child
    MultipleParents { child: String, claimants: usize },
}

impl ColonyError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColonyError::NotStarted => ErrorKind::NotStarted,
            ColonyError::MissingNameOrType
            | ColonyError::MissingParent
            | ColonyError::FieldTooLong { .. } => ErrorKind::Validation,
            ColonyError::DuplicateName { .. } => ErrorKind::DuplicateName,
            ColonyError::ParentNotFound { .. }
            | ColonyError::AlienNotFound { .. }
            | ColonyError::UpdateTargetMissing { .. }
            | ColonyError::DeleteTargetMissing { .. } => ErrorKind::NotFound,
            ColonyError::CannotReproduce { .. } | ColonyError::NoChildren => {
                ErrorKind::Reproduction
            }
            ColonyError::CapacityReached { .. } => ErrorKind::Capacity,
            ColonyError::MultipleParents { .. } => ErrorKind::InvariantViolation,
        }
    }

    /// Whether this error reports a corrupted tree rather than a bad request
    pub fn is_invariant_violation(&self) -> bool {
        self.kind() == ErrorKind::InvariantViolation
    }
}

impl core::fmt::Display for ColonyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColonyError::NotStarted => {
                write!(f, "No aliens! Please start a new colony.")
            }
            ColonyError::MissingNameOrType => {
                write!(f, "Aliens must have a name and a type")
            }
            ColonyError::MissingParent => {
                write!(f, "Please specify a parent for this alien.")
            }
            ColonyError::FieldTooLong { field } => {
                write!(f, "{} must be at most {} characters", field, MAX_FIELD_LEN)
            }
            ColonyError::DuplicateName { name } => {
                write!(
                    f,
                    "Alien {} already exists. Aliens must have unique names.",
                    name
                )
            }
            ColonyError::ParentNotFound { parent } => {
                write!(f, "Alien {} does not exist, Child not added.", parent)
            }
            ColonyError::AlienNotFound { name } => {
                write!(f, "Alien {} not found", name)
            }
            ColonyError::UpdateTargetMissing { name } => {
                write!(f, "Alien {} not updated as they do not exist", name)
            }
            ColonyError::DeleteTargetMissing { name } => {
                write!(f, "Alien {} not removed as it does not exist.", name)
            }
            ColonyError::CannotReproduce { name, alien_type } => {
                write!(
                    f,
                    "Only Alpha aliens can reproduce. {} is of type {}",
                    name, alien_type
                )
            }
            ColonyError::NoChildren => write!(f, "Only alphas have children"),
            ColonyError::CapacityReached { name } => {
                write!(f, "Alien {} has already had two children", name)
            }
            ColonyError::MultipleParents { child, claimants } => {
                write!(
                    f,
                    "Colony corrupted: alien {} is claimed by {} parents",
                    child, claimants
                )
            }
        }
    }
}

impl std::error::Error for ColonyError {}
