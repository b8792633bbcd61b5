//! In-Memory Repository Implementation
//!
//! Keeps the colony for the life of the process. Nothing survives a restart.

use std::sync::{Arc, RwLock};

use colony_domain::{Colony, ColonyRepository, RepositoryError};

/// In-memory Colony Repository
///
/// Thread-safe implementation using RwLock. Clones share the same colony.
#[derive(Debug, Clone, Default)]
pub struct InMemoryColonyRepository {
    colony: Arc<RwLock<Option<Colony>>>,
}

impl InMemoryColonyRepository {
    pub fn new() -> Self {
        Self {
            colony: Arc::new(RwLock::new(None)),
        }
    }
}

impl ColonyRepository for InMemoryColonyRepository {
    fn load(&self) -> Result<Option<Colony>, RepositoryError> {
        let colony = self.colony.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(colony.clone())
    }

    fn save(&mut self, colony: Colony) -> Result<(), RepositoryError> {
        let mut slot = self.colony.write().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;
        *slot = Some(colony);
        Ok(())
    }
}
