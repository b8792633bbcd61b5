//! Storage Adapters - Repository implementations
//!
//! These implement the repository traits from colony-domain.

pub mod in_memory;
