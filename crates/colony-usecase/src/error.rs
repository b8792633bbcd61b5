//! Use case errors

use colony_domain::{ColonyError, RepositoryError};

/// Why a colony operation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The colony refused the operation
    Colony(ColonyError),
    /// The repository could not load or store the colony
    Repository(RepositoryError),
}

impl ServiceError {
    /// The domain error, if the colony itself refused
    pub fn colony_error(&self) -> Option<&ColonyError> {
        match self {
            ServiceError::Colony(e) => Some(e),
            ServiceError::Repository(_) => None,
        }
    }

    /// Failures that are not the caller's fault
    pub fn is_internal(&self) -> bool {
        match self {
            ServiceError::Colony(e) => e.is_invariant_violation(),
            ServiceError::Repository(_) => true,
        }
    }
}

impl core::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ServiceError::Colony(e) => write!(f, "{}", e),
            ServiceError::Repository(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Colony(e) => Some(e),
            ServiceError::Repository(e) => Some(e),
        }
    }
}

impl From<ColonyError> for ServiceError {
    fn from(e: ColonyError) -> Self {
        ServiceError::Colony(e)
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(e: RepositoryError) -> Self {
        ServiceError::Repository(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_transparent() {
        let err: ServiceError = ColonyError::AlienNotFound { name: "Frank".into() }.into();
        assert_eq!(err.to_string(), "Alien Frank not found");
        assert!(!err.is_internal());
    }

    #[test]
    fn test_internal_failures() {
        let repo: ServiceError = RepositoryError::PersistenceError {
            message: "poisoned".into(),
        }
        .into();
        assert!(repo.is_internal());
        assert!(repo.colony_error().is_none());

        let corrupted: ServiceError = ColonyError::MultipleParents {
            child: "Frank".into(),
            claimants: 3,
        }
        .into();
        assert!(corrupted.is_internal());
    }
}
