//! ColonyService - The five colony operations over a repository
//!
//! Each mutating operation loads the colony, applies the domain
//! operation to that copy, and saves only if it succeeded. A failed
//! operation therefore never reaches the repository.

use colony_domain::{AlienId, AlienType, Colony, ColonyError, ColonyRepository};

use crate::error::ServiceError;

/// Colony operations bound to one repository
#[derive(Debug)]
pub struct ColonyService<R> {
    repository: R,
}

impl<R: ColonyRepository> ColonyService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Replace any existing colony with a fresh one.
    ///
    /// The founder is always ALPHA. If the founder is invalid the
    /// previous colony is kept.
    pub fn start_colony(
        &mut self,
        name: Option<&str>,
        home_planet: Option<&str>,
    ) -> Result<(), ServiceError> {
        let colony = Colony::start(name, home_planet)?;
        self.repository.save(colony)?;
        Ok(())
    }

    pub fn add_alien(
        &mut self,
        parent_name: Option<&str>,
        child_name: Option<&str>,
        alien_type: Option<AlienType>,
        home_planet: Option<&str>,
    ) -> Result<AlienId, ServiceError> {
        self.mutate(|colony| colony.add_alien(parent_name, child_name, alien_type, home_planet))
    }

    pub fn get_alien(&self, name: &str) -> Result<String, ServiceError> {
        Ok(self.current()?.get_alien(name)?)
    }

    pub fn update_alien(
        &mut self,
        old_name: &str,
        new_name: Option<&str>,
        new_planet: Option<&str>,
    ) -> Result<(), ServiceError> {
        self.mutate(|colony| colony.update_alien(old_name, new_name, new_planet))
    }

    pub fn delete_alien(&mut self, name: &str) -> Result<(), ServiceError> {
        self.mutate(|colony| colony.delete_alien(name))
    }

    fn current(&self) -> Result<Colony, ServiceError> {
        self.repository
            .load()?
            .ok_or(ServiceError::Colony(ColonyError::NotStarted))
    }

    fn mutate<T>(
        &mut self,
        operation: impl FnOnce(&mut Colony) -> Result<T, ColonyError>,
    ) -> Result<T, ServiceError> {
        let mut colony = self.current()?;
        let outcome = operation(&mut colony)?;
        self.repository.save(colony)?;
        Ok(outcome)
    }
}
