//! Domain Models - The vocabulary of the colony
//!
//! Every name here should match how we talk about the colony:
//! aliens, their types, their child slots and how they are described.

pub mod alien;
pub mod alien_type;
pub mod profile;
