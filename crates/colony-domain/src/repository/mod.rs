//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants the colony kept,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait ColonyRepo      │  InMemoryColonyRepo
//!   fn load()           │
//!   fn save()           │
//! ```

pub mod colony_repository;
