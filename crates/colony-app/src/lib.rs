//! # Alien Colony Application
//!
//! Command implementations for the `alien-colony` binary.

pub mod commands;
