//! AlienProfile - The human-readable description of one alien
//!
//! A profile is a snapshot: the colony resolves parent and child ids to
//! their current names when it builds one, so a rename shows up in every
//! profile built afterwards.

use super::alien_type::AlienType;

/// How an alien's parent link resolves at render time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentLink {
    /// The alien is the colony founder
    Founder,
    /// The parent is still in the colony
    Living(String),
    /// The parent was deleted; this is the last name it had
    Departed(String),
}

/// Rendered view of an alien
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlienProfile {
    pub name: String,
    pub alien_type: AlienType,
    pub home_planet: Option<String>,
    pub parent: ParentLink,
    /// Names of currently occupied child slots, in slot order
    pub children: Vec<String>,
}

impl core::fmt::Display for AlienProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Alien: {}", self.name)?;
        writeln!(f, "Type: {}", self.alien_type)?;
        if let Some(planet) = &self.home_planet {
            writeln!(f, "Home planet: {}", planet)?;
        }
        match &self.parent {
            ParentLink::Founder => writeln!(f, "Parent: none (colony founder)")?,
            ParentLink::Living(name) => writeln!(f, "Parent: {}", name)?,
            ParentLink::Departed(name) => writeln!(f, "Parent: {} (departed)", name)?,
        }
        if !self.children.is_empty() {
            writeln!(f, "Children: {}", self.children.join(", "))?;
        }
        Ok(())
    }
}
