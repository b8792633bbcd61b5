//! Colony Repository - Abstract keeping of the live colony
//!
//! There is at most one colony per process. The repository holds it
//! between operations; how (memory, file, database) is not our concern here.

use crate::service::colony::Colony;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Failed to read or write the stored colony
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Colony Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
///
/// Note: No async and no locking contract here. Callers that share a
/// repository between threads serialize whole load → save sequences.
pub trait ColonyRepository {
    /// The current colony, or `None` if none was ever started
    fn load(&self) -> Result<Option<Colony>, RepositoryError>;

    /// Replace the stored colony
    fn save(&mut self, colony: Colony) -> Result<(), RepositoryError>;

    /// Check if a colony has been started
    fn exists(&self) -> Result<bool, RepositoryError> {
        Ok(self.load()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory implementation for testing
    #[derive(Default)]
    struct SingleSlotRepo {
        colony: Option<Colony>,
    }

    impl ColonyRepository for SingleSlotRepo {
        fn load(&self) -> Result<Option<Colony>, RepositoryError> {
            Ok(self.colony.clone())
        }

        fn save(&mut self, colony: Colony) -> Result<(), RepositoryError> {
            self.colony = Some(colony);
            Ok(())
        }
    }

    #[test]
    fn test_exists_follows_save() {
        let mut repo = SingleSlotRepo::default();
        assert!(!repo.exists().unwrap());

        repo.save(Colony::start(Some("Vexorg"), Some("Omicron")).unwrap())
            .unwrap();
        assert!(repo.exists().unwrap());
        assert_eq!(repo.load().unwrap().map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_error_display() {
        let err = RepositoryError::PersistenceError {
            message: "Failed to acquire write lock".into(),
        };
        assert_eq!(err.to_string(), "Persistence error: Failed to acquire write lock");
    }
}
