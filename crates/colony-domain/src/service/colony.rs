//! Colony - The arena that owns every alien
//!
//! The colony is one flat, insertion-ordered `Vec<Alien>`. Parent and
//! child links are `AlienId`s into that arena, never references, so the
//! parent ↔ child cycle costs nothing in ownership terms.
//!
//! Every operation validates before it mutates: when an operation
//! returns `Err`, the colony is exactly as it was.
//!
//! This is pure domain logic - no I/O, no locking, no external dependencies.

use std::collections::HashMap;

use crate::error::ColonyError;
use crate::model::alien::{Alien, AlienId};
use crate::model::alien_type::AlienType;
use crate::model::profile::{AlienProfile, ParentLink};

/// Colony - The single live tree of aliens
#[derive(Debug, Clone, Default)]
pub struct Colony {
    /// Founder first, then children in the order they were added
    aliens: Vec<Alien>,
    /// Last known names of deleted aliens, for stale parent links
    departed: HashMap<AlienId, String>,
    /// Next id to hand out
    next_id: u64,
}

impl Colony {
    /// Start a brand-new colony with an ALPHA founder
    pub fn start(name: Option<&str>, home_planet: Option<&str>) -> Result<Self, ColonyError> {
        let founder =
            Alien::initialise(AlienId::new(0), name, Some(AlienType::Alpha), home_planet)?;
        Ok(Self {
            aliens: vec![founder],
            departed: HashMap::new(),
            next_id: 1,
        })
    }

    // ========== Queries ==========

    /// A colony with no aliens left behaves as if it was never started
    pub fn is_populated(&self) -> bool {
        !self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    /// The parentless alien, while it is still in the colony
    pub fn founder(&self) -> Option<&Alien> {
        self.aliens.iter().find(|a| a.is_founder())
    }

    /// First alien (in insertion order) carrying `name`
    pub fn find(&self, name: &str) -> Option<&Alien> {
        self.aliens.iter().find(|a| a.name() == name)
    }

    pub fn get(&self, id: AlienId) -> Option<&Alien> {
        self.aliens.iter().find(|a| a.id() == id)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.aliens.iter().position(|a| a.name() == name)
    }

    fn ensure_active(&self) -> Result<(), ColonyError> {
        if self.is_populated() {
            Ok(())
        } else {
            Err(ColonyError::NotStarted)
        }
    }

    // ========== Operations ==========

    /// Add a new alien as a child of `parent_name`.
    ///
    /// Checks, in order: colony started, parent named, child name free,
    /// parent exists. Reproduction, validation and capacity failures come
    /// from the parent's own [`Alien::add_child`].
    pub fn add_alien(
        &mut self,
        parent_name: Option<&str>,
        child_name: Option<&str>,
        alien_type: Option<AlienType>,
        home_planet: Option<&str>,
    ) -> Result<AlienId, ColonyError> {
        self.ensure_active()?;
        let parent_name = given(parent_name).ok_or(ColonyError::MissingParent)?;
        let child_name = given(child_name);

        if let Some(child_name) = child_name {
            if self.find(child_name).is_some() {
                return Err(ColonyError::DuplicateName {
                    name: child_name.to_string(),
                });
            }
        }

        let parent_index = self
            .position(parent_name)
            .ok_or_else(|| ColonyError::ParentNotFound {
                parent: parent_name.to_string(),
            })?;

        let child_id = AlienId::new(self.next_id);
        let child =
            self.aliens[parent_index].add_child(child_id, child_name, alien_type, home_planet)?;

        self.next_id += 1;
        self.aliens.push(child);
        Ok(child_id)
    }

    /// Build the profile of the alien called `name`
    pub fn profile(&self, name: &str) -> Result<AlienProfile, ColonyError> {
        self.ensure_active()?;
        let alien = self.find(name).ok_or_else(|| ColonyError::AlienNotFound {
            name: name.to_string(),
        })?;
        Ok(self.profile_of(alien))
    }

    /// Rendered description of the alien called `name`
    pub fn get_alien(&self, name: &str) -> Result<String, ColonyError> {
        self.profile(name).map(|profile| profile.to_string())
    }

    /// Rename and/or relocate an alien. Absent arguments (and an empty
    /// new name) leave the field alone.
    pub fn update_alien(
        &mut self,
        old_name: &str,
        new_name: Option<&str>,
        new_planet: Option<&str>,
    ) -> Result<(), ColonyError> {
        self.ensure_active()?;
        let index = self
            .position(old_name)
            .ok_or_else(|| ColonyError::UpdateTargetMissing {
                name: old_name.to_string(),
            })?;
        let new_name = given(new_name);

        if let Some(new_name) = new_name {
            Alien::check_name(new_name)?;
            if matches!(self.position(new_name), Some(other) if other != index) {
                return Err(ColonyError::DuplicateName {
                    name: new_name.to_string(),
                });
            }
        }
        if let Some(new_planet) = new_planet {
            Alien::check_home_planet(new_planet)?;
        }

        let alien = &mut self.aliens[index];
        if let Some(new_name) = new_name {
            alien.rename(new_name)?;
        }
        if let Some(new_planet) = new_planet {
            alien.relocate(new_planet)?;
        }
        Ok(())
    }

    /// Remove one alien from the colony.
    ///
    /// Only the named alien goes. Its own children stay, still pointing
    /// at it as their parent; their profiles report it as departed.
    pub fn delete_alien(&mut self, name: &str) -> Result<(), ColonyError> {
        self.ensure_active()?;
        let index = self
            .position(name)
            .ok_or_else(|| ColonyError::DeleteTargetMissing {
                name: name.to_string(),
            })?;
        let target = self.aliens[index].id();

        if !self.aliens[index].is_founder() {
            let claimants: Vec<usize> = self
                .aliens
                .iter()
                .enumerate()
                .filter(|(_, alien)| alien.has_child(target))
                .map(|(i, _)| i)
                .collect();

            if claimants.len() > 1 {
                return Err(ColonyError::MultipleParents {
                    child: name.to_string(),
                    claimants: claimants.len(),
                });
            }
            // No claimant means the parent was deleted earlier
            if let Some(&parent_index) = claimants.first() {
                self.aliens[parent_index].remove_child(target);
            }
        }

        let removed = self.aliens.remove(index);
        self.departed.insert(removed.id(), removed.name().to_string());

        // A name stays only while an orphan still points at it
        let aliens = &self.aliens;
        self.departed.retain(|id, _| aliens.iter().any(|alien| alien.parent() == Some(*id)));
        Ok(())
    }

    // ========== Rendering ==========

    fn profile_of(&self, alien: &Alien) -> AlienProfile {
        let parent = match alien.parent() {
            None => ParentLink::Founder,
            Some(id) => match self.get(id) {
                Some(parent) => ParentLink::Living(parent.name().to_string()),
                None => ParentLink::Departed(
                    self.departed
                        .get(&id)
                        .cloned()
                        .unwrap_or_else(|| id.to_string()),
                ),
            },
        };

        let children = alien
            .child_ids()
            .filter_map(|id| self.get(id))
            .map(|child| child.name().to_string())
            .collect();

        AlienProfile {
            name: alien.name().to_string(),
            alien_type: alien.alien_type(),
            home_planet: alien.home_planet().map(str::to_string),
            parent,
            children,
        }
    }
}

/// An empty string counts as absent
fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
