//! Alien - One individual of the colony
//!
//! Alien is an Entity (has identity). Its name may change, but the
//! `AlienId` handed out by the colony does not, so parent and child
//! links survive renames.
//!
//! IMPORTANT: Aliens cannot appear out of the ether. The only ways to
//! obtain one are `Alien::initialise` (a founder) and `Alien::add_child`
//! (a child minted by its ALPHA parent).

use super::alien_type::AlienType;
use crate::error::{ColonyError, MAX_FIELD_LEN};

/// Arena identifier for an Alien
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlienId(u64);

impl AlienId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for AlienId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "alien-{}", self.0)
    }
}

/// One of the two lifetime child-bearing capacities of an alien.
///
/// `used` is set on birth and never cleared, so removing the occupant
/// does not give the capacity back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ChildSlot {
    occupant: Option<AlienId>,
    used: bool,
}

/// Alien - A member of the colony
#[derive(Debug, Clone)]
pub struct Alien {
    /// Arena identity (never reused within a colony)
    id: AlienId,
    /// Unique within the colony, at most 50 characters
    name: String,
    /// Only ALPHA aliens reproduce
    alien_type: AlienType,
    /// Unset is not the same as empty
    home_planet: Option<String>,
    /// None only for the founder
    parent: Option<AlienId>,
    slots: [ChildSlot; 2],
}

impl Alien {
    /// Create a parentless alien (the colony founder)
    pub fn initialise(
        id: AlienId,
        name: Option<&str>,
        alien_type: Option<AlienType>,
        home_planet: Option<&str>,
    ) -> Result<Self, ColonyError> {
        Self::mint(id, name, alien_type, home_planet, None)
    }

    fn mint(
        id: AlienId,
        name: Option<&str>,
        alien_type: Option<AlienType>,
        home_planet: Option<&str>,
        parent: Option<AlienId>,
    ) -> Result<Self, ColonyError> {
        let (name, alien_type) = match (name, alien_type) {
            (Some(name), Some(alien_type)) if !name.is_empty() => (name, alien_type),
            _ => return Err(ColonyError::MissingNameOrType),
        };
        Self::check_name(name)?;
        if let Some(planet) = home_planet {
            Self::check_home_planet(planet)?;
        }

        Ok(Self {
            id,
            name: name.to_string(),
            alien_type,
            home_planet: home_planet.map(str::to_string),
            parent,
            slots: [ChildSlot::default(); 2],
        })
    }

    // ========== Validation ==========

    /// Reject names that are empty or longer than [`MAX_FIELD_LEN`]
    pub fn check_name(name: &str) -> Result<(), ColonyError> {
        if name.is_empty() {
            return Err(ColonyError::MissingNameOrType);
        }
        if name.chars().count() > MAX_FIELD_LEN {
            return Err(ColonyError::FieldTooLong { field: "Name" });
        }
        Ok(())
    }

    /// Reject home planets longer than [`MAX_FIELD_LEN`]
    pub fn check_home_planet(planet: &str) -> Result<(), ColonyError> {
        if planet.chars().count() > MAX_FIELD_LEN {
            return Err(ColonyError::FieldTooLong {
                field: "Home planet",
            });
        }
        Ok(())
    }

    // ========== Getters ==========

    pub fn id(&self) -> AlienId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alien_type(&self) -> AlienType {
        self.alien_type
    }

    pub fn home_planet(&self) -> Option<&str> {
        self.home_planet.as_deref()
    }

    pub fn parent(&self) -> Option<AlienId> {
        self.parent
    }

    pub fn is_founder(&self) -> bool {
        self.parent.is_none()
    }

    // ========== Reproduction ==========

    /// Bear a child into the first never-used slot.
    ///
    /// The returned alien is the only handle to the child; the caller
    /// is expected to place it in the colony.
    pub fn add_child(
        &mut self,
        child_id: AlienId,
        name: Option<&str>,
        alien_type: Option<AlienType>,
        home_planet: Option<&str>,
    ) -> Result<Alien, ColonyError> {
        if !self.alien_type.can_reproduce() {
            return Err(ColonyError::CannotReproduce {
                name: self.name.clone(),
                alien_type: self.alien_type,
            });
        }

        let child = Self::mint(child_id, name, alien_type, home_planet, Some(self.id))?;

        let free = match self.slots.iter().position(|slot| !slot.used) {
            Some(index) => index,
            None => {
                return Err(ColonyError::CapacityReached {
                    name: self.name.clone(),
                })
            }
        };
        self.slots[free] = ChildSlot {
            occupant: Some(child.id),
            used: true,
        };

        Ok(child)
    }

    /// Currently occupied child slots, in slot order
    pub fn get_children(&self) -> Result<Vec<AlienId>, ColonyError> {
        if !self.alien_type.can_reproduce() {
            return Err(ColonyError::NoChildren);
        }
        Ok(self.child_ids().collect())
    }

    /// Occupied slots without the ALPHA check, for rendering and scans
    pub fn child_ids(&self) -> impl Iterator<Item = AlienId> + '_ {
        self.slots.iter().filter_map(|slot| slot.occupant)
    }

    /// How many children this alien has ever had
    pub fn children_born(&self) -> usize {
        self.slots.iter().filter(|slot| slot.used).count()
    }

    pub fn has_child(&self, child: AlienId) -> bool {
        self.child_ids().any(|id| id == child)
    }

    /// Vacate the slot holding `child`. The slot stays used.
    pub fn remove_child(&mut self, child: AlienId) {
        for slot in self.slots.iter_mut() {
            if slot.occupant == Some(child) {
                slot.occupant = None;
            }
        }
    }

    // ========== Updates ==========

    pub fn rename(&mut self, new_name: &str) -> Result<(), ColonyError> {
        Self::check_name(new_name)?;
        self.name = new_name.to_string();
        Ok(())
    }

    pub fn relocate(&mut self, new_planet: &str) -> Result<(), ColonyError> {
        Self::check_home_planet(new_planet)?;
        self.home_planet = Some(new_planet.to_string());
        Ok(())
    }
}

impl PartialEq for Alien {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same alien
        self.id == other.id
    }
}

impl Eq for Alien {}

#[cfg(test)]
mod tests {
    use super::*;

    fn adam(alien_type: AlienType) -> Alien {
        Alien::initialise(AlienId::new(0), Some("Adam"), Some(alien_type), Some("Omicron"))
            .unwrap()
    }

    #[test]
    fn test_initialise_founder() {
        let adam = adam(AlienType::Alpha);

        assert_eq!(adam.name(), "Adam");
        assert_eq!(adam.alien_type(), AlienType::Alpha);
        assert_eq!(adam.home_planet(), Some("Omicron"));
        assert!(adam.parent().is_none());
        assert!(adam.is_founder());
    }

    #[test]
    fn test_initialise_without_planet_leaves_it_unset() {
        let alien = Alien::initialise(AlienId::new(0), Some("Adam"), Some(AlienType::Gamma), None)
            .unwrap();
        assert_eq!(alien.home_planet(), None);

        let empty =
            Alien::initialise(AlienId::new(1), Some("Eve"), Some(AlienType::Gamma), Some(""))
                .unwrap();
        assert_eq!(empty.home_planet(), Some(""));
    }

    #[test]
    fn test_initialise_requires_name_and_type() {
        let missing_name =
            Alien::initialise(AlienId::new(0), None, Some(AlienType::Alpha), None);
        assert_eq!(missing_name.unwrap_err(), ColonyError::MissingNameOrType);

        let empty_name =
            Alien::initialise(AlienId::new(0), Some(""), Some(AlienType::Alpha), None);
        assert_eq!(empty_name.unwrap_err(), ColonyError::MissingNameOrType);

        let missing_type = Alien::initialise(AlienId::new(0), Some("Adam"), None, None);
        assert_eq!(missing_type.unwrap_err(), ColonyError::MissingNameOrType);
    }

    #[test]
    fn test_length_limits() {
        let fifty = "x".repeat(50);
        let fifty_one = "x".repeat(51);

        let longest = Alien::initialise(
            AlienId::new(0),
            Some(&fifty),
            Some(AlienType::Alpha),
            Some(&fifty),
        );
        assert!(longest.is_ok());

        let long_name =
            Alien::initialise(AlienId::new(0), Some(&fifty_one), Some(AlienType::Alpha), None);
        assert_eq!(long_name.unwrap_err(), ColonyError::FieldTooLong { field: "Name" });

        let long_planet = Alien::initialise(
            AlienId::new(0),
            Some("Adam"),
            Some(AlienType::Alpha),
            Some(&fifty_one),
        );
        assert_eq!(
            long_planet.unwrap_err(),
            ColonyError::FieldTooLong { field: "Home planet" }
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let wide = "é".repeat(50);
        assert!(Alien::check_name(&wide).is_ok());
    }

    #[test]
    fn test_add_child() {
        let mut adam = adam(AlienType::Alpha);
        let vexorg = adam
            .add_child(AlienId::new(1), Some("Vexorg"), Some(AlienType::Alpha), Some("Omicron"))
            .unwrap();

        assert_eq!(vexorg.name(), "Vexorg");
        assert_eq!(vexorg.parent(), Some(adam.id()));
        assert_eq!(adam.get_children().unwrap(), vec![vexorg.id()]);
    }

    #[test]
    fn test_betas_and_gammas_cannot_have_children() {
        for alien_type in [AlienType::Beta, AlienType::Gamma] {
            let mut alien = adam(alien_type);

            let err = alien
                .add_child(
                    AlienId::new(1),
                    Some("someName"),
                    Some(AlienType::Alpha),
                    Some("somePlanet"),
                )
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Only Alpha aliens can reproduce. Adam is of type {}", alien_type)
            );

            let err = alien.get_children().unwrap_err();
            assert_eq!(err.to_string(), "Only alphas have children");
        }
    }

    #[test]
    fn test_reproduction_checked_before_validation() {
        let mut beta = adam(AlienType::Beta);
        let err = beta.add_child(AlienId::new(1), None, None, None).unwrap_err();
        assert!(matches!(err, ColonyError::CannotReproduce { .. }));
    }

    #[test]
    fn test_third_child_is_refused() {
        let mut adam = adam(AlienType::Alpha);
        adam.add_child(AlienId::new(1), Some("Vexorg"), Some(AlienType::Alpha), Some("Omicron"))
            .unwrap();
        adam.add_child(AlienId::new(2), Some("Braxtarg"), Some(AlienType::Gamma), Some("Persei"))
            .unwrap();
        assert_eq!(adam.get_children().unwrap().len(), 2);

        let err = adam
            .add_child(AlienId::new(3), Some("Proxigord"), Some(AlienType::Beta), Some("Persei"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Alien Adam has already had two children");
    }

    #[test]
    fn test_removed_children_do_not_free_capacity() {
        let mut adam = adam(AlienType::Alpha);
        let first = adam
            .add_child(AlienId::new(1), Some("Vexorg"), Some(AlienType::Alpha), None)
            .unwrap();
        let second = adam
            .add_child(AlienId::new(2), Some("Braxtarg"), Some(AlienType::Gamma), None)
            .unwrap();

        adam.remove_child(first.id());
        adam.remove_child(second.id());
        assert!(adam.get_children().unwrap().is_empty());
        assert_eq!(adam.children_born(), 2);

        let err = adam
            .add_child(AlienId::new(3), Some("Proxigord"), Some(AlienType::Beta), None)
            .unwrap_err();
        assert_eq!(err, ColonyError::CapacityReached { name: "Adam".into() });
    }

    #[test]
    fn test_remove_child_keeps_slot_order() {
        let mut adam = adam(AlienType::Alpha);
        let first = adam
            .add_child(AlienId::new(1), Some("Vexorg"), Some(AlienType::Alpha), None)
            .unwrap();
        let second = adam
            .add_child(AlienId::new(2), Some("Braxtarg"), Some(AlienType::Gamma), None)
            .unwrap();

        adam.remove_child(first.id());
        assert!(!adam.has_child(first.id()));
        assert!(adam.has_child(second.id()));
        assert_eq!(adam.get_children().unwrap(), vec![second.id()]);

        // Removing an unknown child is a no-op
        adam.remove_child(AlienId::new(42));
        assert_eq!(adam.get_children().unwrap(), vec![second.id()]);
    }

    #[test]
    fn test_rename_and_relocate() {
        let mut adam = adam(AlienType::Alpha);
        adam.rename("Frank").unwrap();
        adam.relocate("Grimsby").unwrap();
        assert_eq!(adam.name(), "Frank");
        assert_eq!(adam.home_planet(), Some("Grimsby"));

        let too_long = "y".repeat(51);
        assert!(adam.rename(&too_long).is_err());
        assert!(adam.relocate(&too_long).is_err());
        assert_eq!(adam.name(), "Frank");
        assert_eq!(adam.home_planet(), Some("Grimsby"));
    }

    #[test]
    fn test_entity_equality() {
        let a = adam(AlienType::Alpha);
        let mut b = adam(AlienType::Beta);
        b.rename("Someone Else").unwrap();

        // Same ID = same alien
        assert_eq!(a, b);
    }
}
